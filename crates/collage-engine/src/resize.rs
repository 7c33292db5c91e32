//! Cell resizing.
//!
//! Every image is brought to exactly the cell size using Lanczos3 filtering.
//! The fit mode decides whether the aspect ratio survives.

use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use tracing::debug;

/// How a source image is fitted into its cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FitMode {
    /// Scale both axes independently to fill the cell exactly.
    #[default]
    Stretch,
    /// Preserve aspect ratio, fill the cell, crop the overflow around the center.
    Cover,
    /// Preserve aspect ratio, fit inside the cell, center on a transparent cell.
    Contain,
}

impl FitMode {
    pub const ALL: [FitMode; 3] = [FitMode::Stretch, FitMode::Cover, FitMode::Contain];

    pub fn as_str(self) -> &'static str {
        match self {
            FitMode::Stretch => "stretch",
            FitMode::Cover => "cover",
            FitMode::Contain => "contain",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stretch" => Ok(FitMode::Stretch),
            "cover" | "crop" => Ok(FitMode::Cover),
            "contain" => Ok(FitMode::Contain),
            other => Err(format!(
                "unknown fit mode '{other}' (expected stretch, cover or contain)"
            )),
        }
    }
}

/// Resize an image to exactly `width` x `height` pixels.
///
/// Returns the original image unchanged if it already matches the cell size.
pub fn resize_to_cell(img: &DynamicImage, width: u32, height: u32, fit: FitMode) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if (orig_w, orig_h) == (width, height) {
        debug!(width, height, "Image already at cell size, skipping resize");
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        cell_width = width,
        cell_height = height,
        fit = fit.as_str(),
        "Resizing image to cell"
    );

    match fit {
        FitMode::Stretch => img.resize_exact(width, height, FilterType::Lanczos3),
        FitMode::Cover => img.resize_to_fill(width, height, FilterType::Lanczos3),
        FitMode::Contain => {
            let fitted = img.resize(width, height, FilterType::Lanczos3).to_rgba8();
            let mut cell = RgbaImage::new(width, height);
            let x = (width - fitted.width().min(width)) / 2;
            let y = (height - fitted.height().min(height)) / 2;
            imageops::replace(&mut cell, &fitted, i64::from(x), i64::from(y));
            DynamicImage::ImageRgba8(cell)
        }
    }
}
