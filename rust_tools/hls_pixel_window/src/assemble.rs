use crate::aggregate::aggregate;
use crate::bands::{BandValues, SensorFamily, QUALITY_SUFFIX};
use crate::catalog::{enumerate_images, ImageEntry};
use crate::config::ExtractionConfig;
use crate::error::{PixelWindowError, Result};
use crate::io::RasterWindowReader;
use crate::sites::{self, PixelCoord};
use crate::tables::{ObservationKey, ObservationRows, TableBuilder};
use crate::window::{extract_window, read_raw_window, WindowLayout, WINDOW_LEN};
use log::{debug, info};

/// Position of the site pixel itself in the flattened 4x3 window (row 2, col 1)
pub const QUALITY_INDEX: usize = 7;

/// Raw Fmask value at the site pixel. Fill values are not special-cased here.
pub fn quality_value<R: RasterWindowReader + ?Sized>(
    reader: &R,
    coord: PixelCoord,
    entry: &ImageEntry,
) -> Result<f64> {
    let grid = read_raw_window(reader, coord, &entry.raster_path(QUALITY_SUFFIX))?;
    let flat: Vec<f64> = grid.iter().copied().collect();

    if flat.len() != WINDOW_LEN {
        return Err(PixelWindowError::WindowSizeMismatch {
            expected: WINDOW_LEN,
            actual: flat.len(),
        });
    }
    Ok(flat[QUALITY_INDEX])
}

/// Read and aggregate every band of one image
pub fn process_observation<R: RasterWindowReader + ?Sized>(
    reader: &R,
    coord: PixelCoord,
    site: &str,
    sensor: SensorFamily,
    entry: &ImageEntry,
) -> Result<ObservationRows> {
    let mut windows = BandValues::default();
    let mut stats = BandValues::default();

    // Bands the sensor lacks are never read and stay absent
    for (band, suffix) in sensor.bands() {
        let path = entry.raster_path(suffix);
        let window = extract_window(reader, coord, &path, WindowLayout::Flat)?;

        stats.set(band, Some(aggregate(window.as_ref())?));
        windows.set(band, window.map(|w| w.to_flat().to_vec()));
    }

    let raw_quality = quality_value(reader, coord, entry)?;
    debug!(
        "{} DOY {} {}: quality={}",
        entry.year, entry.doy, sensor, raw_quality
    );

    Ok(ObservationRows {
        key: ObservationKey {
            year: entry.year,
            doy: entry.doy,
            sensor,
            site: site.to_string(),
        },
        windows,
        stats,
        raw_quality,
    })
}

/// Walk every configured sensor and year for one site, queueing each image into `builder`
pub fn collect_site<R: RasterWindowReader + ?Sized>(
    reader: &R,
    config: &ExtractionConfig,
    site: &str,
    builder: &mut TableBuilder,
) -> Result<()> {
    let coord = sites::resolve(site)?;
    info!("Site {}: row={}, col={}", site, coord.row, coord.col);

    for sensor in SensorFamily::ALL {
        for &year in config.years(sensor) {
            let before = builder.len();

            for entry in enumerate_images(&config.input_root, sensor, year, &config.tile_path)? {
                let entry = entry?;
                debug!("Processing {}", entry.name);
                builder.push(process_observation(reader, coord, site, sensor, &entry)?);
            }

            info!("{} {}: {} images", sensor, year, builder.len() - before);
        }
    }

    Ok(())
}
