use serde::{Deserialize, Serialize};

/// Spectral bands in output column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    CoastalAerosol,
    Blue,
    Green,
    Red,
    RedEdge1,
    RedEdge2,
    RedEdge3,
    NirBroad,
    NirNarrow,
    Swir1,
    Swir2,
    WaterVapor,
    Cirrus,
    Tir1,
    Tir2,
}

impl Band {
    pub const ALL: [Band; 15] = [
        Band::CoastalAerosol,
        Band::Blue,
        Band::Green,
        Band::Red,
        Band::RedEdge1,
        Band::RedEdge2,
        Band::RedEdge3,
        Band::NirBroad,
        Band::NirNarrow,
        Band::Swir1,
        Band::Swir2,
        Band::WaterVapor,
        Band::Cirrus,
        Band::Tir1,
        Band::Tir2,
    ];

    /// Column name used in the output tables
    pub fn column_name(self) -> &'static str {
        match self {
            Band::CoastalAerosol => "CoastalAerosol",
            Band::Blue => "Blue",
            Band::Green => "Green",
            Band::Red => "Red",
            Band::RedEdge1 => "RedEdge1",
            Band::RedEdge2 => "RedEdge2",
            Band::RedEdge3 => "RedEdge3",
            Band::NirBroad => "NIRBroad",
            Band::NirNarrow => "NIRNarrow",
            Band::Swir1 => "SWIR1",
            Band::Swir2 => "SWIR2",
            Band::WaterVapor => "WaterVapor",
            Band::Cirrus => "Cirrus",
            Band::Tir1 => "TIR1",
            Band::Tir2 => "TIR2",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// HLS product family: Landsat 8/9 (L30) or Sentinel-2 (S30)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorFamily {
    L30,
    S30,
}

impl SensorFamily {
    pub const ALL: [SensorFamily; 2] = [SensorFamily::L30, SensorFamily::S30];

    pub fn tag(self) -> &'static str {
        match self {
            SensorFamily::L30 => "L30",
            SensorFamily::S30 => "S30",
        }
    }

    /// Band file suffix for this family, or None if the instrument has no such band
    pub fn band_suffix(self, band: Band) -> Option<&'static str> {
        match self {
            SensorFamily::L30 => match band {
                Band::CoastalAerosol => Some("B01"),
                Band::Blue => Some("B02"),
                Band::Green => Some("B03"),
                Band::Red => Some("B04"),
                Band::NirNarrow => Some("B05"),
                Band::Swir1 => Some("B06"),
                Band::Swir2 => Some("B07"),
                Band::Cirrus => Some("B09"),
                Band::Tir1 => Some("B10"),
                Band::Tir2 => Some("B11"),
                Band::RedEdge1
                | Band::RedEdge2
                | Band::RedEdge3
                | Band::NirBroad
                | Band::WaterVapor => None,
            },
            SensorFamily::S30 => match band {
                Band::CoastalAerosol => Some("B01"),
                Band::Blue => Some("B02"),
                Band::Green => Some("B03"),
                Band::Red => Some("B04"),
                Band::RedEdge1 => Some("B05"),
                Band::RedEdge2 => Some("B06"),
                Band::RedEdge3 => Some("B07"),
                Band::NirBroad => Some("B08"),
                Band::NirNarrow => Some("B8A"),
                Band::Swir1 => Some("B11"),
                Band::Swir2 => Some("B12"),
                Band::WaterVapor => Some("B09"),
                Band::Cirrus => Some("B10"),
                Band::Tir1 | Band::Tir2 => None,
            },
        }
    }

    /// Bands this family actually provides, in column order
    pub fn bands(self) -> impl Iterator<Item = (Band, &'static str)> {
        Band::ALL
            .into_iter()
            .filter_map(move |band| self.band_suffix(band).map(|suffix| (band, suffix)))
    }
}

impl std::fmt::Display for SensorFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Suffix of the Fmask quality raster shared by both families
pub const QUALITY_SUFFIX: &str = "Fmask";

/// One optional value per band. Bands a sensor lacks stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandValues<T> {
    pub coastal_aerosol: Option<T>,
    pub blue: Option<T>,
    pub green: Option<T>,
    pub red: Option<T>,
    pub red_edge1: Option<T>,
    pub red_edge2: Option<T>,
    pub red_edge3: Option<T>,
    pub nir_broad: Option<T>,
    pub nir_narrow: Option<T>,
    pub swir1: Option<T>,
    pub swir2: Option<T>,
    pub water_vapor: Option<T>,
    pub cirrus: Option<T>,
    pub tir1: Option<T>,
    pub tir2: Option<T>,
}

impl<T> Default for BandValues<T> {
    fn default() -> Self {
        Self {
            coastal_aerosol: None,
            blue: None,
            green: None,
            red: None,
            red_edge1: None,
            red_edge2: None,
            red_edge3: None,
            nir_broad: None,
            nir_narrow: None,
            swir1: None,
            swir2: None,
            water_vapor: None,
            cirrus: None,
            tir1: None,
            tir2: None,
        }
    }
}

impl<T> BandValues<T> {
    pub fn get(&self, band: Band) -> Option<&T> {
        self.slot(band).as_ref()
    }

    pub fn set(&mut self, band: Band, value: Option<T>) {
        *self.slot_mut(band) = value;
    }

    /// Apply `f` to every band, keeping absent bands absent
    pub fn map<U, F>(&self, mut f: F) -> BandValues<U>
    where
        F: FnMut(Band, &T) -> U,
    {
        let mut out = BandValues::default();
        for band in Band::ALL {
            out.set(band, self.get(band).map(|value| f(band, value)));
        }
        out
    }

    fn slot(&self, band: Band) -> &Option<T> {
        match band {
            Band::CoastalAerosol => &self.coastal_aerosol,
            Band::Blue => &self.blue,
            Band::Green => &self.green,
            Band::Red => &self.red,
            Band::RedEdge1 => &self.red_edge1,
            Band::RedEdge2 => &self.red_edge2,
            Band::RedEdge3 => &self.red_edge3,
            Band::NirBroad => &self.nir_broad,
            Band::NirNarrow => &self.nir_narrow,
            Band::Swir1 => &self.swir1,
            Band::Swir2 => &self.swir2,
            Band::WaterVapor => &self.water_vapor,
            Band::Cirrus => &self.cirrus,
            Band::Tir1 => &self.tir1,
            Band::Tir2 => &self.tir2,
        }
    }

    fn slot_mut(&mut self, band: Band) -> &mut Option<T> {
        match band {
            Band::CoastalAerosol => &mut self.coastal_aerosol,
            Band::Blue => &mut self.blue,
            Band::Green => &mut self.green,
            Band::Red => &mut self.red,
            Band::RedEdge1 => &mut self.red_edge1,
            Band::RedEdge2 => &mut self.red_edge2,
            Band::RedEdge3 => &mut self.red_edge3,
            Band::NirBroad => &mut self.nir_broad,
            Band::NirNarrow => &mut self.nir_narrow,
            Band::Swir1 => &mut self.swir1,
            Band::Swir2 => &mut self.swir2,
            Band::WaterVapor => &mut self.water_vapor,
            Band::Cirrus => &mut self.cirrus,
            Band::Tir1 => &mut self.tir1,
            Band::Tir2 => &mut self.tir2,
        }
    }
}
