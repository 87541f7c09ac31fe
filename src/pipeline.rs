//! End-to-end edge detection for one file.
//!
//! ```text
//! decode  input   →  GrayImage          (codec)
//! decide  threads →  worker count       (override or heuristic)
//! filter  image   →  GrayImage          (run_parallel)
//! encode  output  ←  GrayImage          (codec)
//! ```
//!
//! The codec and the host-parallelism query are passed in, so the whole
//! pipeline runs against a mock codec and a fixed core count in tests.

use crate::config::DetectConfig;
use crate::filter::{FilterError, Parallelism, decide_thread_count, run_parallel};
use crate::imaging::{CodecError, ImageCodec};
use log::info;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Image I/O failed: {0}")]
    Codec(#[from] CodecError),
    #[error("Edge detection failed: {0}")]
    Filter(#[from] FilterError),
}

/// Summary of one completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectReport {
    pub width: usize,
    pub height: usize,
    pub threads: usize,
    /// `"override"` when the count came from the user, else the policy name.
    pub policy: String,
    /// Wall time of the filter pass alone, excluding decode and encode.
    pub elapsed_ms: f64,
}

/// Decode `input`, run the parallel Sobel pass, encode to `output`.
///
/// Nothing is written to `output` unless the filter pass succeeds.
pub fn detect_edges(
    codec: &impl ImageCodec,
    input: &Path,
    output: &Path,
    config: &DetectConfig,
    parallelism: &impl Parallelism,
) -> Result<DetectReport, PipelineError> {
    config.validate()?;

    let image = codec.decode(input)?;
    let policy = config.threads.policy();
    let threads = decide_thread_count(&image, config.threads.count, policy, parallelism);
    let policy_name = match config.threads.count {
        Some(_) => "override",
        None => policy.name(),
    };
    info!(
        "{}: {}x{} px, {} worker(s) ({})",
        input.display(),
        image.width(),
        image.height(),
        threads,
        policy_name
    );

    let started = Instant::now();
    let edges = run_parallel(&image, threads)?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    codec.encode(&edges, output)?;
    info!("wrote {}", output.display());

    Ok(DetectReport {
        width: image.width(),
        height: image.height(),
        threads,
        policy: policy_name.to_string(),
        elapsed_ms,
    })
}
