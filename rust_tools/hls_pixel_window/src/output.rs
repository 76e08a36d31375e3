use crate::bands::Band;
use crate::error::{PixelWindowError, Result};
use crate::tables::{AggregateRecord, OutputTables, WindowRecord};
use csv::Writer;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub window: PathBuf,
    pub north: PathBuf,
    pub center: PathBuf,
}

impl OutputPaths {
    pub fn new(output_dir: &Path, site: &str) -> Self {
        Self {
            window: output_dir.join(format!("{}_window.bin", site)),
            north: output_dir.join(format!("{}_north.csv", site)),
            center: output_dir.join(format!("{}_center.csv", site)),
        }
    }
}

/// Binary encoding of the window table
pub fn encode_window_table(rows: &[WindowRecord]) -> Result<Vec<u8>> {
    Ok(postcard::to_allocvec(rows)?)
}

pub fn decode_window_table(bytes: &[u8]) -> Result<Vec<WindowRecord>> {
    Ok(postcard::from_bytes(bytes)?)
}

pub fn aggregate_header() -> Vec<String> {
    let mut header: Vec<String> = ["Year", "DOY", "Satellite", "Phenocam", "CenterOrNorth"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for band in Band::ALL {
        header.push(format!("{}_mean", band.column_name()));
        header.push(format!("{}_std", band.column_name()));
    }
    header.push("Quality".to_string());
    header
}

/// CSV encoding of a north or center table; absent statistics are empty cells
pub fn encode_aggregate_table(rows: &[AggregateRecord]) -> Result<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(aggregate_header())?;

    for row in rows {
        let mut record = vec![
            row.year.to_string(),
            row.doy.to_string(),
            row.sensor.tag().to_string(),
            row.site.clone(),
            row.region.tag().to_string(),
        ];
        for band in Band::ALL {
            match row.bands.get(band) {
                Some(stats) => {
                    record.push(stats.mean.to_string());
                    record.push(stats.std.to_string());
                }
                None => {
                    record.push(String::new());
                    record.push(String::new());
                }
            }
        }
        record.push(row.quality.to_string());
        wtr.write_record(&record)?;
    }

    wtr.into_inner()
        .map_err(|e| PixelWindowError::Io(e.into_error()))
}

/// Encode all three tables, then write them under `output_dir`
pub fn write_tables(output_dir: &Path, site: &str, tables: &OutputTables) -> Result<OutputPaths> {
    let window = encode_window_table(&tables.window)?;
    let north = encode_aggregate_table(&tables.north)?;
    let center = encode_aggregate_table(&tables.center)?;

    fs::create_dir_all(output_dir)?;
    let paths = OutputPaths::new(output_dir, site);

    fs::write(&paths.window, window)?;
    fs::write(&paths.north, north)?;
    fs::write(&paths.center, center)?;

    info!(
        "Wrote {} rows to {}, {} and {}",
        tables.len(),
        paths.window.display(),
        paths.north.display(),
        paths.center.display()
    );
    Ok(paths)
}
