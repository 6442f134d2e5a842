//! Live weather models
//!
//! A live observation is fetched once per session from the external
//! weather API after coordinates resolve. It is independent of the
//! analyzed scene and is never refreshed automatically.

use serde::{Deserialize, Serialize};

/// Current conditions at the viewer's location
///
/// Field names match the weather API's `current` block verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveWeatherObservation {
    /// Air temperature at 2m, °C
    pub temperature_2m: f64,
    /// Relative humidity at 2m, percent
    pub relative_humidity_2m: f64,
    /// WMO present-weather code
    pub weather_code: u16,
    /// Wind speed at 10m, km/h
    pub wind_speed_10m: f64,
    /// Precipitation, mm
    pub precipitation: f64,
}

/// Human-readable weather classes for WMO code ranges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    Clear,
    PartlyCloudy,
    Foggy,
    Drizzle,
    Rain,
    Snow,
    Storm,
    Unknown,
}

impl std::fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherKind::Clear => write!(f, "Clear"),
            WeatherKind::PartlyCloudy => write!(f, "Partly Cloudy"),
            WeatherKind::Foggy => write!(f, "Foggy"),
            WeatherKind::Drizzle => write!(f, "Drizzle"),
            WeatherKind::Rain => write!(f, "Rain"),
            WeatherKind::Snow => write!(f, "Snow"),
            WeatherKind::Storm => write!(f, "Storm"),
            WeatherKind::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Interpreted live condition: label plus the icon token the front-end
/// maps to its icon set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveCondition {
    pub label: WeatherKind,
    pub icon_tag: String,
}
