//! WebAssembly module for the CloudVision analysis platform
//!
//! Provides client-side computation for:
//! - AI nowcast derivation
//! - Live weather code interpretation
//! - Fusion insight generation
//! - Chat context packaging
//! - Percentage vector validation

use wasm_bindgen::prelude::*;

use cloudvision_engine::services::{context, fusion, live_condition, nowcast};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Derive the AI nowcast from a percentages JSON object
///
/// Pass `null` while no vector is available; the sentinel result comes
/// back instead of an error.
#[wasm_bindgen]
pub fn derive_nowcast(percentages_json: &str) -> Result<String, JsValue> {
    let percentages: Option<PercentageVector> = serde_json::from_str(percentages_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid percentages JSON: {}", e)))?;

    let result = nowcast::derive(percentages.as_ref());
    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Interpret a WMO weather code; pass `undefined` while no observation
/// has arrived
#[wasm_bindgen]
pub fn interpret_weather_code(code: Option<u16>) -> Result<String, JsValue> {
    let condition = live_condition::interpret(code);
    serde_json::to_string(&condition)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Fuse a nowcast with a live observation into one insight sentence
///
/// Returns `undefined` while the observation JSON is `null`.
#[wasm_bindgen]
pub fn fusion_insight(nowcast_json: &str, weather_json: &str) -> Result<Option<String>, JsValue> {
    let nowcast: NowcastResult = serde_json::from_str(nowcast_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid nowcast JSON: {}", e)))?;
    let live: Option<LiveWeatherObservation> = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;

    Ok(fusion::fuse(&nowcast, live.as_ref()))
}

/// Package a chat message with the current image metrics
#[wasm_bindgen]
pub fn bind_chat_context(message: &str, metrics_json: &str) -> Result<String, JsValue> {
    let metrics: PercentageVector = serde_json::from_str(metrics_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid metrics JSON: {}", e)))?;

    let payload = context::bind_context(message, &metrics);
    serde_json::to_string(&payload)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Build the narrative request prompt for the generative-AI service
#[wasm_bindgen]
pub fn narrative_prompt(metrics_json: &str) -> Result<String, JsValue> {
    let metrics: PercentageVector = serde_json::from_str(metrics_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid metrics JSON: {}", e)))?;

    Ok(context::narrative_prompt(&metrics))
}

/// Whether shadow coverage warrants recommending de-shadow mitigation
#[wasm_bindgen]
pub fn has_significant_shadow(shadow_percent: f64) -> bool {
    shadow_percent > SHADOW_ALERT_THRESHOLD
}

/// Validate a percentages JSON object at the boundary
#[wasm_bindgen]
pub fn validate_percentages(metrics_json: &str) -> bool {
    serde_json::from_str::<PercentageVector>(metrics_json)
        .map(|pv| validate_percentage_vector(&pv).is_ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: &str = r#"{"Clear":10,"Shadow":5,"Thin Cloud":25,"Thick Cloud":60}"#;

    #[test]
    fn test_derive_nowcast() {
        let out = derive_nowcast(METRICS).unwrap();
        assert!(out.contains("\"condition\":\"overcast\""));
        assert!(out.contains("\"precipitationProbability\":60"));
        assert!(out.contains("\"solarPotential\":12.5"));
    }

    #[test]
    fn test_derive_nowcast_null_is_sentinel() {
        let out = derive_nowcast("null").unwrap();
        assert!(out.contains("\"condition\":\"analyzing\""));
        assert!(out.contains("\"precipitationProbability\":0"));
    }

    #[test]
    fn test_interpret_weather_code() {
        let out = interpret_weather_code(Some(65)).unwrap();
        assert!(out.contains("\"label\":\"rain\""));
        let out = interpret_weather_code(None).unwrap();
        assert!(out.contains("\"label\":\"unknown\""));
    }

    #[test]
    fn test_fusion_insight() {
        let nowcast = derive_nowcast(METRICS).unwrap();
        let weather = r#"{"temperature_2m":18.0,"relative_humidity_2m":70.0,"weather_code":65,"wind_speed_10m":8.0,"precipitation":0.4}"#;
        let insight = fusion_insight(&nowcast, weather).unwrap();
        assert_eq!(
            insight.as_deref(),
            Some("AI and Live data both indicate precipitation likely.")
        );

        assert!(fusion_insight(&nowcast, "null").unwrap().is_none());
    }

    #[test]
    fn test_bind_chat_context() {
        let out = bind_chat_context("Will it rain?", METRICS).unwrap();
        assert!(out.contains("\"message\":\"Will it rain?\""));
        assert!(out.contains("\"image_metrics\""));
    }

    #[test]
    fn test_has_significant_shadow() {
        assert!(has_significant_shadow(1.5));
        assert!(!has_significant_shadow(1.0));
        assert!(!has_significant_shadow(0.0));
    }

    #[test]
    fn test_validate_percentages() {
        assert!(validate_percentages(METRICS));
        assert!(!validate_percentages(
            r#"{"Clear":-10,"Shadow":5,"Thin Cloud":25,"Thick Cloud":60}"#
        ));
        assert!(!validate_percentages("not json"));
    }
}
