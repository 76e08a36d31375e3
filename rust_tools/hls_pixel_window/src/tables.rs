use crate::aggregate::{BandStats, Region, WindowStats};
use crate::bands::{Band, BandValues, SensorFamily};
use crate::error::{PixelWindowError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Identity shared by every row produced from one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationKey {
    pub year: i32,
    pub doy: u16,
    pub sensor: SensorFamily,
    pub site: String,
}

/// Row of the window table: raw 12-pixel windows per band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub year: i32,
    pub doy: u16,
    pub sensor: SensorFamily,
    pub site: String,
    pub bands: BandValues<Vec<f64>>,
    pub quality: u8,
}

/// Row of the north or center table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub year: i32,
    pub doy: u16,
    pub sensor: SensorFamily,
    pub site: String,
    pub region: Region,
    pub bands: BandValues<BandStats>,
    pub quality: u8,
}

/// Everything extracted from one image before the quality column is normalised
#[derive(Debug, Clone)]
pub struct ObservationRows {
    pub key: ObservationKey,
    pub windows: BandValues<Vec<f64>>,
    pub stats: BandValues<WindowStats>,
    pub raw_quality: f64,
}

#[derive(Debug, Clone, Default)]
pub struct OutputTables {
    pub window: Vec<WindowRecord>,
    pub north: Vec<AggregateRecord>,
    pub center: Vec<AggregateRecord>,
}

impl OutputTables {
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

/// Accumulates observations for the window, north and center tables
#[derive(Debug, Default)]
pub struct TableBuilder {
    observations: Vec<ObservationRows>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rows: ObservationRows) {
        debug!(
            "Queued {} {} DOY {} for {}",
            rows.key.sensor, rows.key.year, rows.key.doy, rows.key.site
        );
        self.observations.push(rows);
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Normalise the quality column and split into the three output tables
    pub fn finish(self) -> Result<OutputTables> {
        let mut tables = OutputTables {
            window: Vec::with_capacity(self.observations.len()),
            north: Vec::with_capacity(self.observations.len()),
            center: Vec::with_capacity(self.observations.len()),
        };

        for rows in self.observations {
            let quality = normalize_quality(rows.raw_quality)?;
            let key = rows.key;

            tables.north.push(aggregate_record(&key, Region::North, &rows.stats, quality));
            tables.center.push(aggregate_record(&key, Region::Center, &rows.stats, quality));
            tables.window.push(WindowRecord {
                year: key.year,
                doy: key.doy,
                sensor: key.sensor,
                site: key.site,
                bands: rows.windows,
                quality,
            });
        }

        Ok(tables)
    }
}

fn aggregate_record(
    key: &ObservationKey,
    region: Region,
    stats: &BandValues<WindowStats>,
    quality: u8,
) -> AggregateRecord {
    let mut bands = BandValues::default();
    for band in Band::ALL {
        bands.set(band, stats.get(band).and_then(|s| s.region(region)));
    }

    AggregateRecord {
        year: key.year,
        doy: key.doy,
        sensor: key.sensor,
        site: key.site.clone(),
        region,
        bands,
        quality,
    }
}

/// Cast a raw Fmask sample to its 8-bit category, rejecting anything that is not one
pub fn normalize_quality(raw: f64) -> Result<u8> {
    if raw.fract() != 0.0 || !(0.0..=255.0).contains(&raw) {
        return Err(PixelWindowError::InvalidQuality(raw));
    }
    Ok(raw as u8)
}
