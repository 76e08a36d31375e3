use clap::Parser;
use env_logger::Env;
use log::info;

use hls_pixel_window::cli::Args;
use hls_pixel_window::{run_site, ExtractionConfig, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("=== HLS Pixel Window Extraction ===");

    let config = ExtractionConfig::from_args(&args);
    info!("Input root: {}", config.input_root.display());
    info!("Output directory: {}", config.output_dir.display());

    let paths = run_site(&config, &args.site)?;
    info!("Window table: {}", paths.window.display());

    println!("{} complete!", args.site);
    Ok(())
}
