use clap::{Parser, Subcommand};
use sobel_edges::config::{self, Overrides, PolicyName};
use sobel_edges::filter::HostParallelism;
use sobel_edges::imaging::RustCodec;
use sobel_edges::{output, pipeline};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sobel-edges")]
#[command(about = "Parallel Sobel edge detection for grayscale images")]
#[command(long_about = "\
Parallel Sobel edge detection for grayscale images

Reads a PGM or JPEG image, converts it to 8-bit grayscale, runs the 3x3
Sobel operator across worker threads, and writes the gradient magnitude in
the format implied by the output extension (.pgm/.pnm or .jpg/.jpeg).

Worker count (first available wins):
  -t/--threads flag  → [threads].count in sobel.toml → heuristic
Heuristics:
  core-aware    one worker per 250000 px, capped at the CPU count (default)
  static-tiers  1 / 2 / 4 / 8 workers by image size

Set RUST_LOG=debug to see the row ranges given to each worker.
Run 'sobel-edges gen-config' to generate a documented sobel.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = defaults)
    #[arg(long, default_value = "sobel.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect edges in INPUT and write the result to OUTPUT
    Detect(DetectArgs),
    /// Print a stock sobel.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct DetectArgs {
    /// Input image (.pgm, .pnm, .jpg, .jpeg)
    input: PathBuf,

    /// Output image (.pgm, .pnm, .jpg, .jpeg)
    output: PathBuf,

    /// Number of worker threads (positive integer; omit for heuristic)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Heuristic used when no thread count is given
    #[arg(long, value_enum)]
    policy: Option<PolicyName>,

    /// JPEG output quality (1-100)
    #[arg(long)]
    quality: Option<u32>,

    /// Print the run report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Detect(args) => {
            let config = config::load_config(&cli.config)?.apply(&Overrides {
                threads: args.threads,
                policy: args.policy,
                jpeg_quality: args.quality,
            })?;
            let codec = RustCodec::with_quality(config.output.quality());
            let report = pipeline::detect_edges(
                &codec,
                &args.input,
                &args.output,
                &config,
                &HostParallelism,
            )?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_report(&report, &args.output);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
