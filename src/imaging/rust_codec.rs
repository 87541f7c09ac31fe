//! Codec backed by the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Probe dimensions | `image::image_dimensions` |
//! | Decode (PGM, JPEG) | `image::ImageReader` → `into_luma8` |
//! | Encode PGM | `image::codecs::pnm::PnmEncoder`, binary graymap (`P5`) |
//! | Encode JPEG | `image::codecs::jpeg::JpegEncoder`, 8-bit gray |
//!
//! Color input is collapsed to luma on decode; the filter only sees one
//! channel.

use super::GrayImage;
use super::codec::{CodecError, ImageCodec};
use super::params::{FileFormat, Quality};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Largest width or height accepted on decode.
pub const MAX_DIMENSION: u32 = 10_000;

/// Production codec: PGM and JPEG through the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCodec {
    quality: Quality,
}

impl RustCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec writing JPEG at the given quality.
    pub fn with_quality(quality: Quality) -> Self {
        Self { quality }
    }
}

fn format_for(path: &Path) -> Result<FileFormat, CodecError> {
    FileFormat::from_path(path)
        .ok_or_else(|| CodecError::UnsupportedFormat(path.to_path_buf()))
}

fn decode_error(path: &Path, e: impl std::fmt::Display) -> CodecError {
    CodecError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn encode_error(path: &Path, e: impl std::fmt::Display) -> CodecError {
    CodecError::Encode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// Reject empty or oversized rasters before decoding the pixel data.
fn check_dimensions(path: &Path) -> Result<(), CodecError> {
    let (width, height) = image::image_dimensions(path).map_err(|e| decode_error(path, e))?;
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(CodecError::InvalidDimensions {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
    Ok(())
}

impl ImageCodec for RustCodec {
    fn decode(&self, path: &Path) -> Result<GrayImage, CodecError> {
        let format = match format_for(path)? {
            FileFormat::Pgm => ImageFormat::Pnm,
            FileFormat::Jpeg => ImageFormat::Jpeg,
        };
        check_dimensions(path)?;

        let mut reader = ImageReader::open(path)?;
        reader.set_format(format);
        let luma = reader
            .decode()
            .map_err(|e| decode_error(path, e))?
            .into_luma8();
        let (width, height) = (luma.width() as usize, luma.height() as usize);
        GrayImage::new(width, height, luma.into_raw()).map_err(|e| decode_error(path, e))
    }

    fn encode(&self, image: &GrayImage, path: &Path) -> Result<(), CodecError> {
        let format = format_for(path)?;
        let width = u32::try_from(image.width()).map_err(|e| encode_error(path, e))?;
        let height = u32::try_from(image.height()).map_err(|e| encode_error(path, e))?;

        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        let written = match format {
            FileFormat::Pgm => PnmEncoder::new(&mut writer)
                .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
                .write_image(image.as_bytes(), width, height, ExtendedColorType::L8),
            FileFormat::Jpeg => JpegEncoder::new_with_quality(&mut writer, self.quality.value())
                .write_image(image.as_bytes(), width, height, ExtendedColorType::L8),
        };
        written.map_err(|e| encode_error(path, e))?;
        writer.flush()?;
        Ok(())
    }
}
