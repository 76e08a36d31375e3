use crate::error::{PixelWindowError, Result};
use crate::window::{PixelWindow, WINDOW_LEN};
use ndarray::{s, ArrayView1};
use serde::{Deserialize, Serialize};

/// Mean and population standard deviation of one sub-region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandStats {
    pub mean: f64,
    pub std: f64,
}

/// The two overlapping sub-regions of the 4x3 window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// Rows 0..3: the site row and the two rows north of it
    North,
    /// Rows 1..4: the rows immediately around the site
    Center,
}

impl Region {
    pub fn tag(self) -> &'static str {
        match self {
            Region::North => "north",
            Region::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowStats {
    pub north: Option<BandStats>,
    pub center: Option<BandStats>,
}

impl WindowStats {
    pub fn region(&self, region: Region) -> Option<BandStats> {
        match region {
            Region::North => self.north,
            Region::Center => self.center,
        }
    }
}

fn region_stats(values: ArrayView1<f64>) -> BandStats {
    BandStats {
        // Regions are never empty
        mean: values.mean().unwrap_or(f64::NAN),
        std: values.std(0.0),
    }
}

/// Aggregate a window into north (first 9 values) and center (last 9 values) statistics.
/// An absent window yields absent statistics for both regions.
pub fn aggregate(window: Option<&PixelWindow>) -> Result<WindowStats> {
    let Some(window) = window else {
        return Ok(WindowStats::default());
    };

    let flat = window.to_flat();
    if flat.len() != WINDOW_LEN {
        return Err(PixelWindowError::WindowSizeMismatch {
            expected: WINDOW_LEN,
            actual: flat.len(),
        });
    }

    Ok(WindowStats {
        north: Some(region_stats(flat.slice(s![0..9]))),
        center: Some(region_stats(flat.slice(s![3..12]))),
    })
}
