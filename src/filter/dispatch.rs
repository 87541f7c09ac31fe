//! Fork-join over row ranges.
//!
//! One scoped OS thread per range, spawned fresh for each pass. The output is
//! split into disjoint row slices up front, so every worker holds an exclusive
//! `&mut` to its rows and a shared `&` to the input. No locks.

use super::kernel::apply_rows;
use super::{FilterError, try_vec_with_capacity};
use super::partition::partition_rows;
use crate::imaging::GrayImage;
use log::debug;
use std::thread;
use std::time::Instant;

/// Run the Sobel filter over `image` with `thread_count` workers.
///
/// Returns a new image of the same dimensions. Border pixels stay 0. The
/// result is the same for every `thread_count`. Any allocation failure, spawn
/// failure, worker error or worker panic fails the whole pass; no partial
/// output escapes.
pub fn run_parallel(image: &GrayImage, thread_count: usize) -> Result<GrayImage, FilterError> {
    if thread_count == 0 {
        return Err(FilterError::InvalidThreadCount(thread_count));
    }

    let width = image.width();
    let mut output = GrayImage::zeroed(width, image.height())?;
    let ranges = partition_rows(image.height(), thread_count)?;
    debug!(
        "sobel pass {}x{} on {} workers: {:?}",
        width,
        image.height(),
        thread_count,
        ranges
    );

    // Ranges are contiguous and ordered, so peeling slices off the front
    // hands each worker exactly its own rows.
    let mut stripes = try_vec_with_capacity(ranges.len())?;
    let mut rest = output.as_bytes_mut();
    for &range in &ranges {
        let (rows, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * width);
        stripes.push((range, rows));
        rest = tail;
    }

    let started = Instant::now();
    thread::scope(|scope| -> Result<(), FilterError> {
        let mut handles = try_vec_with_capacity(stripes.len())?;
        let mut failure = None;

        for (worker, (range, rows)) in stripes.into_iter().enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("sobel-{worker}"))
                .spawn_scoped(scope, move || apply_rows(image, rows, range));
            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(e) => {
                    failure = Some(FilterError::WorkerSpawn(e));
                    break;
                }
            }
        }

        // Join everything already running, even after a spawn failure, so a
        // panicking worker is reported rather than re-raised by the scope.
        for (worker, handle) in handles {
            let outcome = handle
                .join()
                .map_err(|_| FilterError::WorkerPanicked { worker })
                .and_then(|r| r);
            if let Err(e) = outcome {
                failure = failure.or(Some(e));
            }
        }

        failure.map_or(Ok(()), Err)
    })?;

    debug!(
        "sobel pass finished in {:.3} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    Ok(output)
}
