//! Grid collage layout engine.
//!
//! Computes grid geometry and cell placement, resizes images to a uniform
//! cell size, composites them onto a background-filled canvas, and encodes
//! the finished canvas.

pub mod color;
pub mod compose;
pub mod config;
pub mod encode;
pub mod layout;
pub mod resize;

use std::path::PathBuf;

use image::DynamicImage;

// Re-exports for convenience
pub use color::BackgroundColor;
pub use compose::{compose, paste_over};
pub use config::GridConfig;
pub use encode::{output_format, save_canvas};
pub use layout::{GridGeometry, GridLayout, compute_geometry, compute_placement};
pub use resize::{FitMode, resize_to_cell};

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: u32 = 5;

/// Default cell width and height in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 300;

/// Default padding around and between cells in pixels.
pub const DEFAULT_PADDING: u32 = 10;

/// Default JPEG quality for the output file.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "collage_output.jpg";

/// A decoded input image, owned by the engine until it is pasted.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// Position in the input sequence, as assigned by the loader.
    ///
    /// `compose` places assets by their order in the vector it receives;
    /// this index is carried for logging and diagnostics.
    pub index: usize,
    /// Display name, usually the file name.
    pub name: String,
    pub image: DynamicImage,
}

impl ImageAsset {
    pub fn new(index: usize, name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            index,
            name: name.into(),
            image,
        }
    }

    /// Native (pre-resize) dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// Errors that can occur while laying out or writing a collage.
#[derive(Debug, thiserror::Error)]
pub enum CollageError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No images to arrange")]
    EmptyInput,

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias for collage operations.
pub type Result<T> = std::result::Result<T, CollageError>;
