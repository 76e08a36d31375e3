use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelWindowError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Array shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] postcard::Error),

    #[error("Phenocam name not recognized: {0}")]
    UnknownSite(String),

    #[error("Image name does not follow the HLS naming convention: {0}")]
    InvalidImageName(String),

    #[error("Image directory not found: {}", .0.display())]
    MissingImageDirectory(PathBuf),

    #[error(
        "Window at ({x},{y}) size {width}x{height} falls outside raster {raster_width}x{raster_height}: {}",
        path.display()
    )]
    WindowOutOfBounds {
        path: PathBuf,
        x: isize,
        y: isize,
        width: usize,
        height: usize,
        raster_width: usize,
        raster_height: usize,
    },

    #[error("Input array is not the expected size: expected {expected} elements, got {actual}")]
    WindowSizeMismatch { expected: usize, actual: usize },

    #[error("Quality value {0} is not an unsigned 8-bit category")]
    InvalidQuality(f64),

    #[error("No years configured for sensor {0}")]
    NoYearsConfigured(String),
}

pub type Result<T> = std::result::Result<T, PixelWindowError>;
