//! # Sobel Edges
//!
//! Edge detection on 8-bit grayscale images with the 3×3 Sobel operator,
//! split across worker threads by rows.
//!
//! # Architecture
//!
//! ```text
//! file ──decode──▶ GrayImage ──run_parallel(N)──▶ GrayImage ──encode──▶ file
//!                      │                ▲
//!                      └─ decide_thread_count (override | heuristic)
//! ```
//!
//! The filter core ([`filter`]) never sees a file format. It takes a
//! [`GrayImage`](imaging::GrayImage), partitions its rows into `N` contiguous
//! ranges, runs one scoped worker per range, and returns a fresh image of the
//! same size. Border pixels have no full 3×3 neighbourhood and stay 0.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`filter`] | Sobel kernel, row partitioning, thread heuristics, fork-join dispatcher |
//! | [`imaging`] | `GrayImage` raster plus PGM/JPEG codecs on the `image` crate |
//! | [`config`] | `sobel.toml` loading, validation, CLI overrides |
//! | [`pipeline`] | decode → filter → encode for one file, with a run report |
//! | [`output`] | CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## Exclusive Row Slices Instead of a Shared Buffer
//!
//! The output buffer is split with `split_at_mut` before any thread starts.
//! Each worker owns `&mut` to exactly its rows and `&` to the input, so the
//! borrow checker proves the absence of write races; no `unsafe`, no locks.
//!
//! ## Result Independent of Thread Count
//!
//! Each output pixel is a pure function of its input neighbourhood. Running
//! with 1 worker or 64 yields byte-identical output; the thread count only
//! affects wall time.
//!
//! ## Heuristic Behind an Injected Capability
//!
//! The core-aware policy needs the host CPU count. That query sits behind the
//! [`Parallelism`](filter::Parallelism) trait so tests pin it with
//! [`FixedParallelism`](filter::FixedParallelism).

pub mod config;
pub mod filter;
pub mod imaging;
pub mod output;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_helpers;
