//! Run orchestration: scan, order, decode, compose, save.

use std::path::PathBuf;

use anyhow::{Context, bail};
use collage_engine::{compose, save_canvas};
use image_source::{SUPPORTED_EXTENSIONS, load_images, order_files, scan_directory};
use tracing::{info, warn};

use crate::config::RunConfig;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub placed: usize,
    pub skipped: usize,
}

/// Build the collage described by `config` and write it to disk.
pub fn run(config: &RunConfig) -> anyhow::Result<RunSummary> {
    config.grid.validate()?;

    let scan = scan_directory(&config.input_dir)?;
    let files = order_files(scan.images, &config.input_dir, &config.order)?;

    if files.is_empty() {
        bail!(
            "No supported image files found in {} (supported formats: {})",
            config.input_dir.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        );
    }

    let report = load_images(&files);
    if report.assets.is_empty() {
        bail!(
            "None of the {} image files in {} could be read",
            files.len(),
            config.input_dir.display()
        );
    }
    if !report.skipped.is_empty() {
        warn!(skipped = report.skipped.len(), "Some images were skipped");
    }

    let placed = report.assets.len();
    let canvas = compose(report.assets, &config.grid)?;

    let output = config.grid.output_path.clone();
    save_canvas(&canvas, &output, config.grid.jpeg_quality)
        .with_context(|| format!("Error saving collage to {}", output.display()))?;

    info!(
        output = %output.display(),
        width = canvas.width(),
        height = canvas.height(),
        "Collage saved"
    );

    Ok(RunSummary {
        output,
        width: canvas.width(),
        height: canvas.height(),
        placed,
        skipped: report.skipped.len(),
    })
}
