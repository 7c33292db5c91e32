//! Decoding input files into image assets.

use std::path::{Path, PathBuf};

use collage_engine::ImageAsset;
use image::{DynamicImage, ImageReader, ImageResult};
use tracing::{info, warn};

/// A file that could not be decoded.
#[derive(Debug, Clone)]
pub struct SkippedImage {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of decoding a list of files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Decoded images, indexed 0..n in input order.
    pub assets: Vec<ImageAsset>,
    pub skipped: Vec<SkippedImage>,
}

/// Decode every file in order, skipping the ones that fail.
///
/// Surviving images get consecutive indices so the grid has no holes.
pub fn load_images(paths: &[PathBuf]) -> LoadReport {
    let total = paths.len();
    let mut report = LoadReport::default();

    for (i, path) in paths.iter().enumerate() {
        let name = display_name(path);
        info!("Processing image {}/{}: {}", i + 1, total, name);

        match decode(path) {
            Ok(image) => {
                let index = report.assets.len();
                report.assets.push(ImageAsset::new(index, name, image));
            }
            Err(e) => {
                warn!("Error processing {name}: {e}. Skipping this image");
                report.skipped.push(SkippedImage {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

/// Decode using the format detected from the file contents, so a misnamed
/// file still loads. The extension is only a fallback.
fn decode(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::tests::temp_dir;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::fs;

    #[test]
    fn test_load_skips_corrupt_files() {
        let dir = temp_dir("load");
        RgbImage::from_pixel(4, 3, Rgb([1, 2, 3]))
            .save(dir.join("a.png"))
            .unwrap();
        fs::write(dir.join("b.jpg"), b"not really a jpeg").unwrap();
        RgbImage::from_pixel(5, 6, Rgb([9, 9, 9]))
            .save(dir.join("c.png"))
            .unwrap();

        let paths = vec![dir.join("a.png"), dir.join("b.jpg"), dir.join("c.png")];
        let report = load_images(&paths);

        assert_eq!(report.assets.len(), 2);
        assert_eq!(report.assets[0].index, 0);
        assert_eq!(report.assets[0].name, "a.png");
        assert_eq!(report.assets[0].dimensions(), (4, 3));
        assert_eq!(report.assets[1].index, 1);
        assert_eq!(report.assets[1].name, "c.png");
        assert_eq!(report.assets[1].dimensions(), (5, 6));

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, dir.join("b.jpg"));
        assert!(!report.skipped[0].reason.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_detects_format_from_contents() {
        let dir = temp_dir("misnamed");
        // PNG data behind a .jpg extension
        let path = dir.join("photo.jpg");
        RgbImage::from_pixel(7, 2, Rgb([4, 5, 6]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let report = load_images(&[path]);
        assert!(report.skipped.is_empty(), "{:?}", report.skipped);
        assert_eq!(report.assets.len(), 1);
        assert_eq!(report.assets[0].name, "photo.jpg");
        assert_eq!(report.assets[0].dimensions(), (7, 2));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_is_skipped() {
        let report = load_images(&[PathBuf::from("/nonexistent/x.png")]);
        assert!(report.assets.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }
}
