use crate::error::Result;
use crate::io::RasterWindowReader;
use crate::sites::PixelCoord;
use log::debug;
use ndarray::{Array1, Array2};
use std::path::Path;

/// HLS fill value
pub const NODATA_SENTINEL: f64 = -9999.0;

pub const WINDOW_WIDTH: usize = 3;
pub const WINDOW_HEIGHT: usize = 4;
pub const WINDOW_LEN: usize = WINDOW_WIDTH * WINDOW_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowLayout {
    /// 12 values in row-major order
    Flat,
    /// The 4 x 3 (rows x cols) neighbourhood as read
    Grid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelWindow {
    Flat(Array1<f64>),
    Grid(Array2<f64>),
}

impl PixelWindow {
    /// Row-major values regardless of layout
    pub fn to_flat(&self) -> Array1<f64> {
        match self {
            PixelWindow::Flat(values) => values.clone(),
            PixelWindow::Grid(grid) => grid.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            PixelWindow::Flat(values) => values.len(),
            PixelWindow::Grid(grid) => grid.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Upper-left corner (x, y) of the window: one column west, two rows north of the site.
/// Rows run north to south, so the window covers rows [row-2, row+1] and columns
/// [col-1, col+1].
pub fn window_origin(coord: PixelCoord) -> (isize, isize) {
    (coord.col as isize - 1, coord.row as isize - 2)
}

/// Read the neighbourhood around `coord` without any fill-value handling
pub fn read_raw_window<R: RasterWindowReader + ?Sized>(
    reader: &R,
    coord: PixelCoord,
    path: &Path,
) -> Result<Array2<f64>> {
    reader.read_window(path, window_origin(coord), (WINDOW_WIDTH, WINDOW_HEIGHT))
}

/// Whole-window fill check: only the mean is compared, so a partially filled window
/// is kept as is.
pub fn is_nodata(values: &Array2<f64>) -> bool {
    values.mean() == Some(NODATA_SENTINEL)
}

/// Read the pixel window for one band, or None if the window is fill
pub fn extract_window<R: RasterWindowReader + ?Sized>(
    reader: &R,
    coord: PixelCoord,
    path: &Path,
    layout: WindowLayout,
) -> Result<Option<PixelWindow>> {
    let grid = read_raw_window(reader, coord, path)?;

    if is_nodata(&grid) {
        debug!("Window is nodata: {}", path.display());
        return Ok(None);
    }

    let window = match layout {
        WindowLayout::Flat => PixelWindow::Flat(grid.iter().copied().collect()),
        WindowLayout::Grid => PixelWindow::Grid(grid),
    };
    Ok(Some(window))
}
