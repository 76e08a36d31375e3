// Library exports for testing and reuse

pub mod aggregate;
pub mod assemble;
pub mod bands;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod sites;
pub mod tables;
pub mod window;

// Re-export commonly used types
pub use aggregate::{aggregate, BandStats, Region, WindowStats};
pub use bands::{Band, BandValues, SensorFamily};
pub use config::ExtractionConfig;
pub use error::{PixelWindowError, Result};
pub use io::{GdalWindowReader, RasterWindowReader};
pub use tables::{AggregateRecord, OutputTables, TableBuilder, WindowRecord};
pub use window::{extract_window, PixelWindow, WindowLayout};

use log::info;

/// Build all three tables for one site. Nothing is written to disk.
pub fn extract_site<R: RasterWindowReader + ?Sized>(
    reader: &R,
    config: &ExtractionConfig,
    site: &str,
) -> Result<OutputTables> {
    config.validate()?;

    let mut builder = TableBuilder::new();
    assemble::collect_site(reader, config, site, &mut builder)?;

    info!("Collected {} observations for {}", builder.len(), site);
    builder.finish()
}

/// Extract a site and write its window, north and center tables
pub fn run_site(config: &ExtractionConfig, site: &str) -> Result<output::OutputPaths> {
    let tables = extract_site(&GdalWindowReader, config, site)?;
    output::write_tables(&config.output_dir, site, &tables)
}
