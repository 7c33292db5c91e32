//! Canvas composition: fill the background, then paste every cell in order.

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::{debug, info};

use crate::resize::resize_to_cell;
use crate::{CollageError, GridConfig, ImageAsset, Result};

/// Lay out `images` on a new canvas according to `config`.
///
/// Images are placed in the order given, left to right and top to bottom.
/// Slots left over in the final row keep the background color.
/// Configuration and image count are checked before the canvas is allocated.
pub fn compose(images: Vec<ImageAsset>, config: &GridConfig) -> Result<RgbaImage> {
    let layout = config.layout()?;
    if images.is_empty() {
        return Err(CollageError::EmptyInput);
    }

    let geometry = layout.geometry(images.len())?;
    let (cell_width, cell_height) = layout.cell_size();
    let total = images.len();

    info!(
        images = total,
        width = geometry.canvas_width,
        height = geometry.canvas_height,
        rows = geometry.rows,
        "Creating collage"
    );

    let mut canvas = RgbaImage::from_pixel(
        geometry.canvas_width,
        geometry.canvas_height,
        config.background.to_rgba(),
    );

    for (position, asset) in images.into_iter().enumerate() {
        let (x, y) = layout.placement(position);
        let (orig_w, orig_h) = asset.dimensions();
        debug!(
            position = position + 1,
            total,
            index = asset.index,
            name = %asset.name,
            orig_w,
            orig_h,
            x,
            y,
            "Placing image"
        );

        let resized = resize_to_cell(&asset.image, cell_width, cell_height, config.fit);
        paste_over(&mut canvas, &resized, x, y);
    }

    Ok(canvas)
}

/// Paste `top` onto `base` at the given position.
///
/// Opaque pixels overwrite the destination; translucent ones are
/// over-composited onto it. Pixels falling outside `base` are clipped.
pub fn paste_over(base: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32) {
    let top_rgba = top.to_rgba8();
    for (dx, dy, pixel) in top_rgba.enumerate_pixels() {
        let (Some(target_x), Some(target_y)) = (x.checked_add(dx), y.checked_add(dy)) else {
            continue;
        };
        if target_x >= base.width() || target_y >= base.height() {
            continue;
        }
        match pixel[3] {
            255 => base.put_pixel(target_x, target_y, *pixel),
            0 => {}
            _ => {
                let bg = *base.get_pixel(target_x, target_y);
                base.put_pixel(target_x, target_y, blend_over(bg, *pixel));
            }
        }
    }
}

/// Porter-Duff "over" for straight-alpha pixels.
fn blend_over(bg: Rgba<u8>, fg: Rgba<u8>) -> Rgba<u8> {
    let fa = f32::from(fg[3]) / 255.0;
    let ba = f32::from(bg[3]) / 255.0;
    let out_a = fa + ba * (1.0 - fa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let c = (f32::from(fg[i]) * fa + f32::from(bg[i]) * ba * (1.0 - fa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
