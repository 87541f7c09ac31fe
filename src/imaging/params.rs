//! Parameter types for the codec layer.
//!
//! - [`Quality`]: JPEG encoding quality (1-100, default 90), clamped on construction
//! - [`FileFormat`]: which codec handles a path, chosen from its extension

use std::path::Path;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// On-disk formats the codec layer reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Binary portable graymap (`P5`).
    Pgm,
    Jpeg,
}

impl FileFormat {
    /// Pick the format from the file extension, case-insensitively.
    ///
    /// `.pgm` and `.pnm` map to PGM, `.jpg` and `.jpeg` to JPEG. Anything
    /// else is `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pgm" | "pnm" => Some(Self::Pgm),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_90() {
        assert_eq!(Quality::default().value(), 90);
    }

    #[test]
    fn format_from_extension() {
        let cases = [
            ("a.pgm", Some(FileFormat::Pgm)),
            ("a.PNM", Some(FileFormat::Pgm)),
            ("a.jpg", Some(FileFormat::Jpeg)),
            ("dir/b.JPEG", Some(FileFormat::Jpeg)),
            ("a.png", None),
            ("noext", None),
        ];
        for (path, expected) in cases {
            assert_eq!(FileFormat::from_path(Path::new(path)), expected, "{path}");
        }
    }
}
