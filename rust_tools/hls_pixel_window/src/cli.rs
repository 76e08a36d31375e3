use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hls-pixel-window")]
#[command(about = "Extract HLS pixel windows around a phenocam site and aggregate band statistics")]
#[command(version)]
pub struct Args {
    /// Phenocam site name (e.g., jershrubland)
    #[arg(value_name = "SITE")]
    pub site: String,

    /// Directory holding the L30 and S30 folders of the HLS bulk download
    #[arg(long, value_name = "DIR", default_value = "path_to_hls_imagery")]
    pub input_root: String,

    /// Tile sub-path below each year directory
    #[arg(long, value_name = "PATH", default_value = "13/S/C/S")]
    pub tile_path: String,

    /// Directory for the window and aggregate tables
    #[arg(short, long, value_name = "DIR", default_value = "data/outputs_hls")]
    pub output_dir: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
