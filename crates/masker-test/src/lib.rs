//! masker-test - Regression test framework for masker
//!
//! This crate provides a small regression test framework supporting
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Write outputs without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use masker_test::RegParams;
//!
//! let mut rp = RegParams::new("wand");
//! rp.compare_values(25.0, count as f64, 0.0);
//! rp.compare_masks(&expected, masker.mask_buffer(), width);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::fs;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // masker-test is at crates/masker-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Encode an 8-bit grayscale buffer as binary PGM (P5)
///
/// # Errors
///
/// Returns [`TestError::BadDimensions`] if `data.len() != width * height`.
pub fn encode_pgm(width: u32, height: u32, data: &[u8]) -> TestResult<Vec<u8>> {
    if data.len() != width as usize * height as usize {
        return Err(TestError::BadDimensions {
            width,
            height,
            len: data.len(),
        });
    }
    let mut out = format!("P5\n{} {}\n255\n", width, height).into_bytes();
    out.extend_from_slice(data);
    Ok(out)
}

/// Write an 8-bit grayscale buffer to `path` as binary PGM
pub fn write_pgm(path: &str, width: u32, height: u32, data: &[u8]) -> TestResult<()> {
    let bytes = encode_pgm(width, height, data)?;
    fs::write(path, bytes).map_err(|e| TestError::FileWrite {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Build a source image from ASCII art
///
/// Each string is one row; `'#'` becomes `on`, any other byte `off`.
/// All rows must have the same length.
pub fn image_from_rows(rows: &[&str], on: u32, off: u32) -> masker_core::SourceImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    masker_core::SourceImage::from_fn(width, height, masker_core::PixelFormat::Rgba, |x, y| {
        if rows[y as usize].as_bytes()[x as usize] == b'#' {
            on
        } else {
            off
        }
    })
    .unwrap_or_else(|e| panic!("bad test image: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pgm() {
        let bytes = encode_pgm(2, 1, &[0, 255]).unwrap();
        assert_eq!(&bytes[..], b"P5\n2 1\n255\n\x00\xff");
        assert!(encode_pgm(2, 2, &[0, 255]).is_err());
    }

    #[test]
    fn test_image_from_rows() {
        let image = image_from_rows(&["#.", ".#"], 1, 0);
        assert_eq!(image.data(), &[1, 0, 0, 1]);
    }
}
