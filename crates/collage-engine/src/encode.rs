//! Canvas encoding. The output format follows the file extension.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageResult, RgbaImage};
use tracing::{debug, info};

use crate::{CollageError, Result};

/// Output format for `path`, rejecting extensions that cannot be written.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| format.writing_enabled())
        .ok_or_else(|| CollageError::UnsupportedFormat(path.to_path_buf()))
}

/// Write `canvas` to `path`, creating missing parent directories.
///
/// The canvas is encoded in memory first and moved into place only once the
/// whole file is written, so a failed save leaves `path` untouched.
/// JPEG output drops the alpha channel and uses `jpeg_quality`.
pub fn save_canvas(canvas: &RgbaImage, path: &Path, jpeg_quality: u8) -> Result<()> {
    let format = output_format(path)?;

    debug!(
        path = %path.display(),
        ?format,
        width = canvas.width(),
        height = canvas.height(),
        "Encoding canvas"
    );

    let bytes = encode_canvas(canvas, format, jpeg_quality).map_err(|source| {
        CollageError::Encode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| CollageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            info!("Created directory: {}", parent.display());
        }
    }

    let staging = staging_path(path);
    let written = fs::write(&staging, &bytes).and_then(|()| fs::rename(&staging, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&staging);
        return Err(CollageError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn encode_canvas(
    canvas: &RgbaImage,
    format: ImageFormat,
    jpeg_quality: u8,
) -> ImageResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut buf, jpeg_quality).encode_image(&rgb)?;
        }
        ImageFormat::Png | ImageFormat::Tiff | ImageFormat::WebP | ImageFormat::Tga => {
            canvas.write_to(&mut buf, format)?;
        }
        _ => {
            // Formats without reliable alpha support get an opaque canvas.
            let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
            rgb.write_to(&mut buf, format)?;
        }
    }
    Ok(buf.into_inner())
}

/// Hidden sibling of `path` used while the file is being written.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.partial"))
}
