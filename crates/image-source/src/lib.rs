//! Input discovery for the collage engine.
//!
//! Scans a directory for supported image files, orders them by a chosen
//! strategy, and decodes them into [`collage_engine::ImageAsset`]s.

pub mod load;
pub mod order;
pub mod scan;

use std::path::PathBuf;

// Re-exports for convenience
pub use load::{LoadReport, SkippedImage, load_images};
pub use order::{OrderStrategy, order_files};
pub use scan::{ScanResult, SUPPORTED_EXTENSIONS, is_supported, scan_directory};

/// Errors that can occur while discovering input images.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Input directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

/// Result type alias for image-source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
