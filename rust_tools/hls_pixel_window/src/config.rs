use crate::bands::SensorFamily;
use crate::cli::Args;
use crate::error::{PixelWindowError, Result};
use std::path::PathBuf;

/// Everything a run needs besides the site itself
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub input_root: PathBuf,
    pub tile_path: PathBuf,
    pub output_dir: PathBuf,
    pub years_l30: Vec<i32>,
    pub years_s30: Vec<i32>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("path_to_hls_imagery"),
            tile_path: PathBuf::from("13/S/C/S"),
            output_dir: PathBuf::from("data/outputs_hls"),
            years_l30: (2014..=2022).collect(),
            years_s30: (2016..=2022).collect(),
        }
    }
}

impl ExtractionConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            input_root: PathBuf::from(&args.input_root),
            tile_path: PathBuf::from(&args.tile_path),
            output_dir: PathBuf::from(&args.output_dir),
            ..Self::default()
        }
    }

    pub fn years(&self, sensor: SensorFamily) -> &[i32] {
        match sensor {
            SensorFamily::L30 => &self.years_l30,
            SensorFamily::S30 => &self.years_s30,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for sensor in SensorFamily::ALL {
            if self.years(sensor).is_empty() {
                return Err(PixelWindowError::NoYearsConfigured(sensor.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_years() {
        let config = ExtractionConfig::default();
        assert_eq!(config.years(SensorFamily::L30).first(), Some(&2014));
        assert_eq!(config.years(SensorFamily::L30).last(), Some(&2022));
        assert_eq!(config.years(SensorFamily::L30).len(), 9);
        assert_eq!(config.years(SensorFamily::S30).first(), Some(&2016));
        assert_eq!(config.years(SensorFamily::S30).len(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "hls-pixel-window",
            "ibp",
            "--input-root",
            "/data/hls",
            "--output-dir",
            "/tmp/out",
        ]);
        let config = ExtractionConfig::from_args(&args);
        assert_eq!(args.site, "ibp");
        assert_eq!(config.input_root, PathBuf::from("/data/hls"));
        assert_eq!(config.tile_path, PathBuf::from("13/S/C/S"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_empty_years_rejected() {
        let config = ExtractionConfig {
            years_s30: Vec::new(),
            ..ExtractionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PixelWindowError::NoYearsConfigured(s)) if s == "S30"
        ));
    }
}
