use crate::error::{PixelWindowError, Result};
use gdal::cpl::CslStringList;
use gdal::raster::{Buffer, GdalType};
use gdal::{Dataset, DriverManager};
use log::debug;
use ndarray::Array2;
use std::path::Path;

/// Source of rectangular pixel windows from single-band rasters.
///
/// `origin` is (x, y) = (column, row) of the upper-left pixel, `size` is (width, height).
/// The returned array is shaped (height, width).
pub trait RasterWindowReader {
    fn read_window(
        &self,
        path: &Path,
        origin: (isize, isize),
        size: (usize, usize),
    ) -> Result<Array2<f64>>;
}

/// Reads windows from GeoTIFFs on disk through GDAL
#[derive(Debug, Clone, Copy, Default)]
pub struct GdalWindowReader;

impl RasterWindowReader for GdalWindowReader {
    fn read_window(
        &self,
        path: &Path,
        origin: (isize, isize),
        size: (usize, usize),
    ) -> Result<Array2<f64>> {
        debug!(
            "Reading window: {} offset=({},{}), size=({},{})",
            path.display(),
            origin.0,
            origin.1,
            size.0,
            size.1
        );

        // Dataset is dropped (and the file closed) on every return path
        let dataset = Dataset::open(path)?;
        let rasterband = dataset.rasterband(1)?;

        let raster_width = rasterband.x_size();
        let raster_height = rasterband.y_size();
        let (x, y) = origin;
        let (width, height) = size;

        if x < 0
            || y < 0
            || x as usize + width > raster_width
            || y as usize + height > raster_height
        {
            return Err(PixelWindowError::WindowOutOfBounds {
                path: path.to_path_buf(),
                x,
                y,
                width,
                height,
                raster_width,
                raster_height,
            });
        }

        let buffer = rasterband.read_as::<f64>(origin, size, size, None)?;
        let data_vec: Vec<f64> = buffer.into_iter().collect();
        let data = Array2::from_shape_vec((height, width), data_vec)?;

        Ok(data)
    }
}

/// Write a single-band GeoTIFF
pub fn write_band_raster<T: GdalType + Copy>(
    path: &Path,
    data: &Array2<T>,
    nodata: Option<f64>,
) -> Result<()> {
    let (height, width) = data.dim();
    write_band_window(path, (width, height), (0, 0), data, nodata)
}

/// Create a tiled, sparse single-band GeoTIFF of `raster_size` (width, height) and
/// write `data` at `origin` (x, y). Blocks never written are not stored on disk.
pub fn write_band_window<T: GdalType + Copy>(
    path: &Path,
    raster_size: (usize, usize),
    origin: (isize, isize),
    data: &Array2<T>,
    nodata: Option<f64>,
) -> Result<()> {
    let (width, height) = raster_size;
    let (data_height, data_width) = data.dim();
    debug!(
        "Creating raster {} ({}x{}), data {}x{} at ({},{})",
        path.display(),
        width,
        height,
        data_width,
        data_height,
        origin.0,
        origin.1
    );

    let mut options = CslStringList::new();
    for opt in ["TILED=YES", "SPARSE_OK=TRUE", "COMPRESS=DEFLATE"] {
        options.add_string(opt)?;
    }

    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let dataset =
        driver.create_with_band_type_with_options::<T, _>(path, width, height, 1, &options)?;

    let mut raster_band = dataset.rasterband(1)?;
    if nodata.is_some() {
        raster_band.set_no_data_value(nodata)?;
    }

    // ndarray iterates in logical row-major order, which is what GDAL expects
    let mut buffer = Buffer::new((data_width, data_height), data.iter().copied().collect());
    raster_band.write(origin, (data_width, data_height), &mut buffer)?;

    Ok(())
}
