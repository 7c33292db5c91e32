//! Collage configuration options.
//!
//! These options control the grid shape, cell size, fill color and where the
//! finished canvas is written.

use std::path::PathBuf;

use crate::encode::output_format;
use crate::layout::GridLayout;
use crate::{
    BackgroundColor, CollageError, DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_JPEG_QUALITY,
    DEFAULT_OUTPUT, DEFAULT_PADDING, FitMode, Result,
};

/// Configuration for a single collage run.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Number of grid columns (at least 1).
    pub columns: u32,

    /// Width of every cell in pixels.
    pub cell_width: u32,

    /// Height of every cell in pixels.
    pub cell_height: u32,

    /// Padding around the canvas edge and between cells.
    pub padding: u32,

    pub background: BackgroundColor,

    pub fit: FitMode,

    /// Output file; the format follows its extension.
    pub output_path: PathBuf,

    /// JPEG quality (1..=100). Ignored for other formats.
    pub jpeg_quality: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            cell_width: DEFAULT_CELL_SIZE,
            cell_height: DEFAULT_CELL_SIZE,
            padding: DEFAULT_PADDING,
            background: BackgroundColor::default(),
            fit: FitMode::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl GridConfig {
    /// Create a config with the default 5-column, 300x300 grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set column count.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Builder: set cell size.
    pub fn with_cell_size(mut self, width: u32, height: u32) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Builder: set padding.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Builder: set background color.
    pub fn with_background(mut self, background: BackgroundColor) -> Self {
        self.background = background;
        self
    }

    /// Builder: set fit mode.
    pub fn with_fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }

    /// Builder: set output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Builder: set JPEG quality.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Check every field, returning the validated grid layout.
    ///
    /// The output extension must name a writable image format.
    pub fn validate(&self) -> Result<GridLayout> {
        output_format(&self.output_path)?;
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(CollageError::InvalidConfig(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        self.layout()
    }

    /// The grid layout described by this config.
    pub fn layout(&self) -> Result<GridLayout> {
        GridLayout::new(
            self.columns,
            self.cell_width,
            self.cell_height,
            self.padding,
        )
    }
}
