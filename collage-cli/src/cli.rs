//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Create an image collage from a folder of images.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "collage",
    version,
    about,
    after_help = "Supported image formats: JPG, JPEG, PNG, BMP, GIF, WEBP, TIFF\n\n\
Example:\n  collage --columns 3 --input-dir my_images --output collages/my_collage.jpg \
--width 400 --height 600 --padding 15 --background black"
)]
pub struct CliArgs {
    /// Number of columns in the collage
    #[arg(short, long, env = "COLLAGE_COLUMNS", default_value_t = collage_engine::DEFAULT_COLUMNS)]
    pub columns: u32,

    /// Input directory containing images
    #[arg(short, long, env = "COLLAGE_INPUT_DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Output file; the format follows the extension
    #[arg(short, long, env = "COLLAGE_OUTPUT", default_value = collage_engine::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Target width for each image
    #[arg(short, long, env = "COLLAGE_WIDTH", default_value_t = collage_engine::DEFAULT_CELL_SIZE)]
    pub width: u32,

    /// Target height for each image
    #[arg(short = 't', long, env = "COLLAGE_HEIGHT", default_value_t = collage_engine::DEFAULT_CELL_SIZE)]
    pub height: u32,

    /// Padding around and between images
    #[arg(short, long, env = "COLLAGE_PADDING", default_value_t = collage_engine::DEFAULT_PADDING)]
    pub padding: u32,

    /// Background color: name, hex (#FFFFFF) or rgb(255, 255, 255)
    #[arg(short, long, env = "COLLAGE_BACKGROUND", default_value = "white")]
    pub background: String,

    /// How images are fitted into their cells
    #[arg(long, env = "COLLAGE_FIT", value_enum, default_value_t = FitArg::Stretch)]
    pub fit: FitArg,

    /// Order in which images fill the grid
    #[arg(long, env = "COLLAGE_ORDER", value_enum, default_value_t = OrderArg::Lexicographic)]
    pub order: OrderArg,

    /// Manifest listing file names in order (used with --order manifest)
    #[arg(long, env = "COLLAGE_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// JPEG quality (1-100)
    #[arg(short, long, env = "COLLAGE_QUALITY", default_value_t = collage_engine::DEFAULT_JPEG_QUALITY)]
    pub quality: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FitArg {
    /// Scale to the cell exactly, ignoring aspect ratio
    Stretch,
    /// Fill the cell and crop the overflow
    Cover,
    /// Fit inside the cell, background shows around it
    Contain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Sort by file name
    Lexicographic,
    /// Sort by file name, comparing numbers by value
    Natural,
    /// Use the order listed in --manifest
    Manifest,
}
