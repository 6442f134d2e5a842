//! Land-cover segmentation models
//!
//! The segmentation service classifies every pixel of a satellite scene
//! into one of four display classes and reports the class distribution
//! as percentages of the scene.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shadow coverage (percent) above which de-shadow mitigation is recommended
pub const SHADOW_ALERT_THRESHOLD: f64 = 1.0;

/// Four-class land-cover distribution for one analyzed scene
///
/// Serde keys match the segmentation service's response verbatim,
/// including the space in the two-word class names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PercentageVector {
    #[serde(rename = "Clear")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub clear: f64,
    #[serde(rename = "Shadow")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub shadow: f64,
    #[serde(rename = "Thin Cloud")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub thin_cloud: f64,
    #[serde(rename = "Thick Cloud")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub thick_cloud: f64,
}

impl PercentageVector {
    pub fn new(clear: f64, shadow: f64, thin_cloud: f64, thick_cloud: f64) -> Self {
        Self {
            clear,
            shadow,
            thin_cloud,
            thick_cloud,
        }
    }

    /// Combined thin + thick cloud coverage
    pub fn total_cloud(&self) -> f64 {
        self.thin_cloud + self.thick_cloud
    }

    /// Whether shadow coverage exceeds the mitigation alert threshold
    pub fn has_significant_shadow(&self) -> bool {
        self.shadow > SHADOW_ALERT_THRESHOLD
    }
}

/// Display classes of the segmentation mask
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoverClass {
    Clear,
    Shadow,
    ThinCloud,
    ThickCloud,
}

impl CoverClass {
    /// Map a raw model class onto a display class
    ///
    /// The model emits six classes: 0 fill, 1 clear, 2 shadow, 3 thin
    /// cloud, 4 thick cloud, 5 other. Fill, clear and other all render
    /// as clear ground.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            2 => CoverClass::Shadow,
            3 => CoverClass::ThinCloud,
            4 => CoverClass::ThickCloud,
            _ => CoverClass::Clear,
        }
    }

    /// Grayscale level of this class in the exported segmentation mask
    pub fn mask_intensity(&self) -> u8 {
        match self {
            CoverClass::Clear => 0,
            CoverClass::Shadow => 85,
            CoverClass::ThinCloud => 170,
            CoverClass::ThickCloud => 255,
        }
    }

    /// Intensity of this class in the solar-potential heatmap
    ///
    /// Clear ground harvests at full potential, thin cloud at roughly
    /// half, shadowed and thickly clouded ground barely at all.
    pub fn solar_intensity(&self) -> u8 {
        match self {
            CoverClass::Clear => 255,
            CoverClass::Shadow => 25,
            CoverClass::ThinCloud => 127,
            CoverClass::ThickCloud => 25,
        }
    }
}

impl std::fmt::Display for CoverClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverClass::Clear => write!(f, "Clear"),
            CoverClass::Shadow => write!(f, "Shadow"),
            CoverClass::ThinCloud => write!(f, "Thin Cloud"),
            CoverClass::ThickCloud => write!(f, "Thick Cloud"),
        }
    }
}
