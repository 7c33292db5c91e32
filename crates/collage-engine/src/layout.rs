//! Grid geometry and cell placement.
//!
//! Cells are laid out row by row, left to right. Padding surrounds the
//! canvas edge and separates adjacent cells, so a grid of `columns` cells
//! carries `columns + 1` padding strips horizontally.

use tracing::debug;

use crate::{CollageError, Result};

/// Derived canvas size for a given number of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub rows: u32,
}

/// Validated grid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
    cell_width: u32,
    cell_height: u32,
    padding: u32,
}

impl GridLayout {
    /// Create a layout, rejecting zero columns or an empty cell.
    pub fn new(columns: u32, cell_width: u32, cell_height: u32, padding: u32) -> Result<Self> {
        if columns < 1 {
            return Err(CollageError::InvalidConfig(
                "number of columns must be at least 1".into(),
            ));
        }
        if cell_width < 1 || cell_height < 1 {
            return Err(CollageError::InvalidConfig(format!(
                "cell size must be positive, got {cell_width}x{cell_height}"
            )));
        }
        Ok(Self {
            columns,
            cell_width,
            cell_height,
            padding,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Compute canvas dimensions and row count for `image_count` images.
    pub fn geometry(&self, image_count: usize) -> Result<GridGeometry> {
        if image_count == 0 {
            return Err(CollageError::EmptyInput);
        }

        let count = image_count as u64;
        let columns = u64::from(self.columns);
        let rows = count.div_ceil(columns);

        let canvas_width = span(columns, self.cell_width, self.padding)?;
        let canvas_height = span(rows, self.cell_height, self.padding)?;
        let rows = u32::try_from(rows).map_err(|_| too_large())?;

        debug!(
            image_count,
            columns = self.columns,
            rows,
            canvas_width,
            canvas_height,
            "Computed grid geometry"
        );

        Ok(GridGeometry {
            canvas_width,
            canvas_height,
            rows,
        })
    }

    /// Top-left corner of the cell holding the image at `index`.
    ///
    /// Indices beyond what a valid canvas can hold saturate at `u32::MAX`.
    pub fn placement(&self, index: usize) -> (u32, u32) {
        let index = index as u64;
        let columns = u64::from(self.columns);
        let row = index / columns;
        let col = index % columns;

        let x = offset(col, self.cell_width, self.padding);
        let y = offset(row, self.cell_height, self.padding);
        (x, y)
    }
}

/// `count` cells of `cell` pixels with `count + 1` padding strips.
fn span(count: u64, cell: u32, padding: u32) -> Result<u32> {
    let total = count
        .checked_mul(u64::from(cell))
        .and_then(|cells| {
            count
                .checked_add(1)
                .and_then(|strips| strips.checked_mul(u64::from(padding)))
                .and_then(|pad| cells.checked_add(pad))
        })
        .ok_or_else(too_large)?;
    u32::try_from(total).map_err(|_| too_large())
}

fn offset(slot: u64, cell: u32, padding: u32) -> u32 {
    let stride = u64::from(cell) + u64::from(padding);
    let pos = slot
        .checked_mul(stride)
        .and_then(|v| v.checked_add(u64::from(padding)))
        .unwrap_or(u64::MAX);
    u32::try_from(pos).unwrap_or(u32::MAX)
}

fn too_large() -> CollageError {
    CollageError::InvalidConfig("canvas dimensions exceed the supported maximum".into())
}

/// Compute `(canvas_width, canvas_height, rows)` for a grid.
pub fn compute_geometry(
    image_count: usize,
    columns: u32,
    cell_width: u32,
    cell_height: u32,
    padding: u32,
) -> Result<GridGeometry> {
    GridLayout::new(columns, cell_width, cell_height, padding)?.geometry(image_count)
}

/// Compute the `(x, y)` placement of the image at `index`.
pub fn compute_placement(
    index: usize,
    columns: u32,
    cell_width: u32,
    cell_height: u32,
    padding: u32,
) -> Result<(u32, u32)> {
    Ok(GridLayout::new(columns, cell_width, cell_height, padding)?.placement(index))
}
