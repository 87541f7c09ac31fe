//! Grayscale raster type and file codecs.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Raster** | [`GrayImage`], bounds-checked `(row, col)` access |
//! | **Decode** | `image::ImageReader` (PGM, JPEG) → 8-bit luma |
//! | **Encode** | `PnmEncoder` (binary PGM), `JpegEncoder` (gray, quality 1–100) |
//!
//! The module is split into:
//! - **Gray**: the owned pixel buffer shared by codecs and the filter core
//! - **Parameters**: [`Quality`] and extension-based [`FileFormat`] selection
//! - **Codec**: [`ImageCodec`] trait + [`RustCodec`]

pub mod codec;
mod gray;
mod params;
pub mod rust_codec;

pub use codec::{CodecError, ImageCodec};
pub use gray::GrayImage;
pub use params::{FileFormat, Quality};
pub use rust_codec::RustCodec;
