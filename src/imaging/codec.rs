//! Codec trait and shared error type.
//!
//! The [`ImageCodec`] trait is the seam between the filter core and file
//! formats: decode a path into a [`GrayImage`], encode one back out. The
//! production implementation is [`RustCodec`](super::rust_codec::RustCodec),
//! built on the `image` crate.

use super::GrayImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Invalid image dimensions {width}x{height} in {path}")]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },
}

/// Reads and writes grayscale rasters.
///
/// `Sync` so a single codec can be shared by reference across threads.
pub trait ImageCodec: Sync {
    /// Decode the file at `path` into 8-bit luma.
    fn decode(&self, path: &Path) -> Result<GrayImage, CodecError>;

    /// Encode `image` to `path`, format chosen by the implementation.
    fn encode(&self, image: &GrayImage, path: &Path) -> Result<(), CodecError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock codec that serves canned images and records what it was asked
    /// to write instead of touching the filesystem.
    #[derive(Default)]
    pub struct MockCodec {
        pub images: Mutex<Vec<GrayImage>>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Decode(String),
        Encode { path: String, image: GrayImage },
    }

    impl MockCodec {
        pub fn with_image(image: GrayImage) -> Self {
            Self {
                images: Mutex::new(vec![image]),
                operations: Mutex::new(Vec::new()),
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        /// The image passed to the last `encode` call.
        pub fn last_encoded(&self) -> Option<GrayImage> {
            self.get_operations()
                .into_iter()
                .rev()
                .find_map(|op| match op {
                    RecordedOp::Encode { image, .. } => Some(image),
                    RecordedOp::Decode(_) => None,
                })
        }
    }

    impl ImageCodec for MockCodec {
        fn decode(&self, path: &Path) -> Result<GrayImage, CodecError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Decode(path.to_string_lossy().to_string()));

            self.images
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| CodecError::Decode {
                    path: path.to_path_buf(),
                    reason: "no mock image".to_string(),
                })
        }

        fn encode(&self, image: &GrayImage, path: &Path) -> Result<(), CodecError> {
            self.operations.lock().unwrap().push(RecordedOp::Encode {
                path: path.to_string_lossy().to_string(),
                image: image.clone(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_decode() {
        let image = GrayImage::new(2, 1, vec![3, 4]).unwrap();
        let codec = MockCodec::with_image(image.clone());

        assert_eq!(codec.decode(Path::new("/in.pgm")).unwrap(), image);
        let ops = codec.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Decode(p) if p == "/in.pgm"));
    }

    #[test]
    fn mock_decode_without_image_errors() {
        let codec = MockCodec::default();
        assert!(matches!(
            codec.decode(Path::new("/missing.pgm")),
            Err(CodecError::Decode { .. })
        ));
    }

    #[test]
    fn mock_records_encode() {
        let codec = MockCodec::default();
        let image = GrayImage::new(1, 1, vec![9]).unwrap();
        codec.encode(&image, Path::new("/out.jpg")).unwrap();

        assert_eq!(codec.last_encoded(), Some(image));
        assert!(matches!(
            &codec.get_operations()[0],
            RecordedOp::Encode { path, .. } if path == "/out.jpg"
        ));
    }
}
