//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Geographic coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Fallback location used when geolocation is unavailable or denied
    /// (central London)
    pub fn fallback() -> Self {
        Self::new(51.5074, -0.1278)
    }
}

/// Opaque handle to an image already resident in memory
///
/// The inference service returns masks and derived images as bare
/// base64 strings, while the front-end holds the uploaded original as a
/// `data:` URL. The handle carries either form unchanged; decoding
/// happens only when a report export actually needs the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "encoding", content = "data")]
pub enum ImageHandle {
    /// `data:image/png;base64,...` URL
    DataUrl(String),
    /// Bare base64-encoded PNG
    Base64(String),
    /// Raw PNG bytes
    Bytes(Vec<u8>),
}
