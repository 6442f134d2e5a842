//! AI nowcast models
//!
//! A nowcast is a short-term condition estimate derived purely from the
//! land-cover distribution of the analyzed scene, independent of any
//! live weather observation.

use serde::{Deserialize, Serialize};

/// Sky condition estimated from the analyzed scene
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    /// Sentinel for "no percentages yet"
    Analyzing,
    HeavyOvercast,
    Overcast,
    MostlyCloudy,
    PartlyCloudy,
    ClearSky,
}

impl SkyCondition {
    /// Fixed one-line description shown under the condition label
    pub fn description(&self) -> &'static str {
        match self {
            SkyCondition::Analyzing => "Awaiting image analysis",
            SkyCondition::HeavyOvercast => "High probability of precipitation",
            SkyCondition::Overcast => "Cloudy with possible showers",
            SkyCondition::MostlyCloudy => "Variable cloud cover",
            SkyCondition::PartlyCloudy => "Good visibility with scattered clouds",
            SkyCondition::ClearSky => "Excellent visibility and solar potential",
        }
    }

    /// Style token the front-end uses to color the condition label.
    /// Not semantically load-bearing.
    pub fn severity_tag(&self) -> &'static str {
        match self {
            SkyCondition::Analyzing => "text-gray-400",
            SkyCondition::HeavyOvercast => "text-blue-400",
            SkyCondition::Overcast => "text-gray-300",
            SkyCondition::MostlyCloudy => "text-gray-400",
            SkyCondition::PartlyCloudy => "text-yellow-300",
            SkyCondition::ClearSky => "text-yellow-400",
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkyCondition::Analyzing => write!(f, "Analyzing..."),
            SkyCondition::HeavyOvercast => write!(f, "Heavy Overcast"),
            SkyCondition::Overcast => write!(f, "Overcast"),
            SkyCondition::MostlyCloudy => write!(f, "Mostly Cloudy"),
            SkyCondition::PartlyCloudy => write!(f, "Partly Cloudy"),
            SkyCondition::ClearSky => write!(f, "Clear Sky"),
        }
    }
}

/// Result of deriving a nowcast from a percentage vector
///
/// Serialized camelCase for the front-end. Recomputed whenever the
/// vector changes, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowcastResult {
    pub condition: SkyCondition,
    pub description: String,
    /// 0-100
    pub precipitation_probability: u8,
    /// 0-100, clamped
    pub solar_potential: f64,
    pub severity_tag: String,
}

impl NowcastResult {
    /// Sentinel returned while no percentage vector is available.
    /// A deliberate default state, not an error.
    pub fn analyzing() -> Self {
        Self::from_condition(SkyCondition::Analyzing, 0, 0.0)
    }

    /// Build a result carrying the condition's fixed description and
    /// severity tag
    pub fn from_condition(
        condition: SkyCondition,
        precipitation_probability: u8,
        solar_potential: f64,
    ) -> Self {
        Self {
            condition,
            description: condition.description().to_string(),
            precipitation_probability,
            solar_potential,
            severity_tag: condition.severity_tag().to_string(),
        }
    }
}
