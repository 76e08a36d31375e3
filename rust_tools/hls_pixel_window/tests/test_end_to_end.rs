use hls_pixel_window::bands::QUALITY_SUFFIX;
use hls_pixel_window::catalog::{image_directory, ImageEntry};
use hls_pixel_window::io::write_band_window;
use hls_pixel_window::output::{decode_window_table, OutputPaths};
use hls_pixel_window::window::{window_origin, NODATA_SENTINEL};
use hls_pixel_window::{
    extract_site, run_site, sites, Band, ExtractionConfig, GdalWindowReader, PixelWindowError,
    SensorFamily,
};
use ndarray::Array2;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SITE: &str = "ibp";
const RASTER_SIZE: (usize, usize) = (1000, 3200);
const YEARS: [i32; 2] = [2020, 2021];

fn reflectance_window() -> Array2<i16> {
    Array2::from_shape_fn((4, 3), |(r, c)| ((r * 3 + c + 1) * 100) as i16)
}

fn quality_window(value: u8) -> Array2<u8> {
    let mut q = Array2::from_elem((4, 3), 255u8);
    // Site pixel: row 2, col 1 of the 4x3 window
    q[[2, 1]] = value;
    q
}

/// Write one granule with every band of `sensor`, optionally filling `fill_band` with -9999
fn write_granule(
    root: &Path,
    tile_path: &Path,
    sensor: SensorFamily,
    year: i32,
    doy: u16,
    quality: u8,
    fill_band: Option<Band>,
) {
    let name = format!("HLS.{}.T13SCS.{}{:03}T174259.v2.0", sensor.tag(), year, doy);
    let dir = image_directory(root, sensor, year, tile_path).join(&name);
    fs::create_dir_all(&dir).unwrap();
    let entry = ImageEntry { name, year, doy, dir };

    let origin = window_origin(sites::resolve(SITE).unwrap());
    let fill = Array2::from_elem((4, 3), NODATA_SENTINEL as i16);
    let reflectance = reflectance_window();

    for (band, suffix) in sensor.bands() {
        let data = if Some(band) == fill_band {
            &fill
        } else {
            &reflectance
        };
        write_band_window(
            &entry.raster_path(suffix),
            RASTER_SIZE,
            origin,
            data,
            Some(NODATA_SENTINEL),
        )
        .unwrap();
    }

    write_band_window(
        &entry.raster_path(QUALITY_SUFFIX),
        RASTER_SIZE,
        origin,
        &quality_window(quality),
        Some(255.0),
    )
    .unwrap();
}

fn synthetic_archive(root: &Path) -> ExtractionConfig {
    let config = ExtractionConfig {
        input_root: root.join("hls"),
        output_dir: root.join("outputs"),
        years_l30: YEARS.to_vec(),
        years_s30: YEARS.to_vec(),
        ..ExtractionConfig::default()
    };

    for sensor in SensorFamily::ALL {
        for (i, &year) in YEARS.iter().enumerate() {
            let fill_band = (sensor == SensorFamily::L30 && year == 2020).then_some(Band::Red);
            write_granule(
                &config.input_root,
                &config.tile_path,
                sensor,
                year,
                17 + i as u16,
                64 + i as u8,
                fill_band,
            );
        }
    }

    config
}

#[test]
fn test_extract_site_row_counts() {
    let dir = TempDir::new().unwrap();
    let config = synthetic_archive(dir.path());

    let tables = extract_site(&GdalWindowReader, &config, SITE).unwrap();

    let expected_rows = YEARS.len() * SensorFamily::ALL.len();
    assert_eq!(tables.window.len(), expected_rows);
    assert_eq!(tables.north.len(), expected_rows);
    assert_eq!(tables.center.len(), expected_rows);

    for ((w, n), c) in tables.window.iter().zip(&tables.north).zip(&tables.center) {
        assert_eq!((w.year, w.doy, w.sensor), (n.year, n.doy, n.sensor));
        assert_eq!((w.year, w.doy, w.sensor), (c.year, c.doy, c.sensor));
        assert_eq!(n.quality, c.quality);
        assert_eq!(w.quality, n.quality);
        assert!(n.quality == 64 || n.quality == 65);
    }
}

#[test]
fn test_extract_site_band_values() {
    let dir = TempDir::new().unwrap();
    let config = synthetic_archive(dir.path());

    let tables = extract_site(&GdalWindowReader, &config, SITE).unwrap();
    let expected: Vec<f64> = (1..=12).map(|v| (v * 100) as f64).collect();

    for (w, n) in tables.window.iter().zip(&tables.north) {
        assert_eq!(w.bands.blue.as_ref(), Some(&expected));

        let blue = n.bands.blue.unwrap();
        assert!((blue.mean - 500.0).abs() < 1e-9);

        match w.sensor {
            SensorFamily::L30 => {
                assert!(w.bands.red_edge1.is_none());
                assert!(w.bands.water_vapor.is_none());
                assert!(n.bands.nir_broad.is_none());
                assert!(w.bands.tir1.is_some());
            }
            SensorFamily::S30 => {
                assert!(w.bands.tir1.is_none());
                assert!(w.bands.tir2.is_none());
                assert!(n.bands.tir1.is_none());
                assert!(w.bands.red_edge1.is_some());
            }
        }

        let filled = w.sensor == SensorFamily::L30 && w.year == 2020;
        assert_eq!(w.bands.red.is_none(), filled);
        assert_eq!(n.bands.get(Band::Red).is_none(), filled);
    }

    for c in &tables.center {
        let green = c.bands.green.unwrap();
        assert!((green.mean - 800.0).abs() < 1e-9);
    }
}

#[test]
fn test_run_site_writes_outputs() {
    let dir = TempDir::new().unwrap();
    let config = synthetic_archive(dir.path());

    let paths = run_site(&config, SITE).unwrap();
    assert_eq!(paths, OutputPaths::new(&config.output_dir, SITE));

    let window = decode_window_table(&fs::read(&paths.window).unwrap()).unwrap();
    assert_eq!(window.len(), 4);

    for path in [&paths.north, &paths.center] {
        let csv = fs::read_to_string(path).unwrap();
        assert_eq!(csv.lines().count(), 1 + 4);
        assert!(csv.starts_with("Year,DOY,Satellite,Phenocam,CenterOrNorth,"));
    }
}

#[test]
fn test_missing_year_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut config = synthetic_archive(dir.path());
    config.years_s30.push(2022);

    let err = run_site(&config, SITE).unwrap_err();
    assert!(matches!(err, PixelWindowError::MissingImageDirectory(_)));
    assert!(!config.output_dir.exists());
}

#[test]
fn test_unknown_site_fails() {
    let dir = TempDir::new().unwrap();
    let config = synthetic_archive(dir.path());

    let err = extract_site(&GdalWindowReader, &config, "not-a-phenocam").unwrap_err();
    assert!(matches!(err, PixelWindowError::UnknownSite(_)));
}
