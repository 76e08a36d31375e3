use crate::bands::SensorFamily;
use crate::error::{PixelWindowError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

// HLS names look like HLS.L30.T13SCS.2021017T174259.v2.0; the date sits at a fixed offset
const YEAR_RANGE: std::ops::Range<usize> = 15..19;
const DOY_RANGE: std::ops::Range<usize> = 19..22;

/// One HLS granule directory for a single acquisition date
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    pub name: String,
    pub year: i32,
    pub doy: u16,
    pub dir: PathBuf,
}

impl ImageEntry {
    /// Path of the raster with the given suffix, e.g. `<dir>/<name>.B04.tif`
    pub fn raster_path(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}.{}.tif", self.name, suffix))
    }
}

/// Extract (year, day-of-year) from an HLS image name
pub fn parse_date(image_name: &str) -> Result<(i32, u16)> {
    let invalid = || PixelWindowError::InvalidImageName(image_name.to_string());

    let year = parse_digits(image_name, YEAR_RANGE).ok_or_else(invalid)?;
    let doy = parse_digits(image_name, DOY_RANGE).ok_or_else(invalid)?;

    Ok((year as i32, doy as u16))
}

fn parse_digits(name: &str, range: std::ops::Range<usize>) -> Option<u32> {
    let digits = name.get(range)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Directory holding every granule for one sensor and year
pub fn image_directory(root: &Path, sensor: SensorFamily, year: i32, tile_path: &Path) -> PathBuf {
    root.join(sensor.tag()).join(year.to_string()).join(tile_path)
}

/// List the granules of one sensor and year in filesystem order.
///
/// Listing order is whatever the filesystem returns; callers must not rely on it
/// being chronological.
pub fn enumerate_images(
    root: &Path,
    sensor: SensorFamily,
    year: i32,
    tile_path: &Path,
) -> Result<impl Iterator<Item = Result<ImageEntry>>> {
    let image_dir = image_directory(root, sensor, year, tile_path);
    if !image_dir.is_dir() {
        return Err(PixelWindowError::MissingImageDirectory(image_dir));
    }

    debug!("Listing {}", image_dir.display());
    let entries = fs::read_dir(&image_dir)?;

    Ok(entries.map(move |entry| -> Result<ImageEntry> {
        let entry = entry?;
        let name = entry.file_name().into_string().map_err(|raw| {
            PixelWindowError::InvalidImageName(raw.to_string_lossy().into_owned())
        })?;
        let (year, doy) = parse_date(&name)?;

        Ok(ImageEntry {
            dir: image_dir.join(&name),
            name,
            year,
            doy,
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_date() {
        let (year, doy) = parse_date("HLS.L30.T13SCS.2021017T174259.v2.0").unwrap();
        assert_eq!(year, 2021);
        assert_eq!(doy, 17);

        let (year, doy) = parse_date("HLS.S30.T13SCS.2016366T173912.v2.0").unwrap();
        assert_eq!(year, 2016);
        assert_eq!(doy, 366);
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("HLS.L30.T13SCS.20").is_err());
        assert!(parse_date("HLS.L30.T13SCS.20x1017T174259").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_image_directory() {
        let dir = image_directory(
            Path::new("/data/hls"),
            SensorFamily::S30,
            2019,
            Path::new("13/S/C/S"),
        );
        assert_eq!(dir, PathBuf::from("/data/hls/S30/2019/13/S/C/S"));
    }

    #[test]
    fn test_raster_path() {
        let entry = ImageEntry {
            name: "HLS.L30.T13SCS.2021017T174259.v2.0".to_string(),
            year: 2021,
            doy: 17,
            dir: PathBuf::from("/x/HLS.L30.T13SCS.2021017T174259.v2.0"),
        };
        assert_eq!(
            entry.raster_path("Fmask"),
            PathBuf::from(
                "/x/HLS.L30.T13SCS.2021017T174259.v2.0/HLS.L30.T13SCS.2021017T174259.v2.0.Fmask.tif"
            )
        );
    }

    #[test]
    fn test_enumerate_images() {
        let root = TempDir::new().unwrap();
        let tile = Path::new("13/S/C/S");
        let year_dir = image_directory(root.path(), SensorFamily::L30, 2021, tile);
        fs::create_dir_all(year_dir.join("HLS.L30.T13SCS.2021017T174259.v2.0")).unwrap();
        fs::create_dir_all(year_dir.join("HLS.L30.T13SCS.2021033T174301.v2.0")).unwrap();

        let mut entries: Vec<ImageEntry> =
            enumerate_images(root.path(), SensorFamily::L30, 2021, tile)
                .unwrap()
                .collect::<Result<_>>()
                .unwrap();
        entries.sort_by_key(|e| e.doy);

        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].year, entries[0].doy), (2021, 17));
        assert_eq!((entries[1].year, entries[1].doy), (2021, 33));
        assert_eq!(
            entries[0].dir,
            year_dir.join("HLS.L30.T13SCS.2021017T174259.v2.0")
        );
    }

    #[test]
    fn test_enumerate_missing_directory() {
        let root = TempDir::new().unwrap();
        let result = enumerate_images(root.path(), SensorFamily::S30, 2016, Path::new("13/S/C/S"));
        assert!(matches!(
            result,
            Err(PixelWindowError::MissingImageDirectory(_))
        ));
    }
}
