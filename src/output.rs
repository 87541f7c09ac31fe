//! CLI output formatting.
//!
//! Formatting functions are pure and return lines; `print_*` wrappers write
//! them to stdout. Human output looks like:
//!
//! ```text
//! Using 4 threads (core-aware)
//!     Image: 1920x1080
//!     Filter: 12.345 ms
//!     Output: edges.pgm
//! ```

use crate::pipeline::DetectReport;
use std::path::Path;

/// `"Using 1 thread"` / `"Using 4 threads"`.
pub fn thread_line(threads: usize) -> String {
    let plural = if threads == 1 { "" } else { "s" };
    format!("Using {threads} thread{plural}")
}

pub fn format_report(report: &DetectReport, output: &Path) -> Vec<String> {
    vec![
        format!("{} ({})", thread_line(report.threads), report.policy),
        format!("    Image: {}x{}", report.width, report.height),
        format!("    Filter: {:.3} ms", report.elapsed_ms),
        format!("    Output: {}", output.display()),
    ]
}

pub fn print_report(report: &DetectReport, output: &Path) {
    for line in format_report(report, output) {
        println!("{line}");
    }
}
