//! Fusion insight generation
//!
//! Reconciles the image-derived nowcast with the independently sourced
//! live observation into one sentence. The two signals are imperfect
//! and not mutually exclusive, so rule order is the contract: agreement
//! and disagreement on precipitation are checked before solar
//! conditions.

use shared::{LiveWeatherObservation, NowcastResult};

/// Nowcast precipitation probability (percent) above which the AI side
/// counts as "precipitation likely"
const PRECIP_PROBABILITY_THRESHOLD: u8 = 50;

/// WMO code above which the live side reports precipitation
/// (50+ covers drizzle, rain, snow and storm)
const PRECIP_CODE_THRESHOLD: u16 = 50;

/// Solar potential (percent) above which harvesting conditions are
/// called excellent
const SOLAR_EXCELLENT_THRESHOLD: f64 = 70.0;

/// Fuse the nowcast with a live observation
///
/// Returns `None` while no observation is available; the caller renders
/// nothing in that case. Rules are evaluated top-down, first match
/// wins.
pub fn fuse(nowcast: &NowcastResult, live: Option<&LiveWeatherObservation>) -> Option<String> {
    let live = live?;

    let ai_precip = nowcast.precipitation_probability > PRECIP_PROBABILITY_THRESHOLD;
    let live_precip = live.weather_code > PRECIP_CODE_THRESHOLD;

    let insight = if ai_precip && live_precip {
        "AI and Live data both indicate precipitation likely."
    } else if ai_precip {
        "AI detects heavy clouds, but live data shows different conditions."
    } else if nowcast.solar_potential > SOLAR_EXCELLENT_THRESHOLD {
        "Excellent solar energy harvesting conditions."
    } else {
        "Moderate conditions for outdoor activities."
    };

    Some(insight.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SkyCondition;

    fn observation(weather_code: u16) -> LiveWeatherObservation {
        LiveWeatherObservation {
            temperature_2m: 18.0,
            relative_humidity_2m: 70.0,
            weather_code,
            wind_speed_10m: 8.0,
            precipitation: 0.0,
        }
    }

    #[test]
    fn test_no_observation_yields_no_insight() {
        let nowcast = NowcastResult::from_condition(SkyCondition::ClearSky, 5, 95.0);
        assert_eq!(fuse(&nowcast, None), None);
    }

    #[test]
    fn test_agreement_rule() {
        let nowcast = NowcastResult::from_condition(SkyCondition::HeavyOvercast, 85, 5.0);
        let insight = fuse(&nowcast, Some(&observation(65))).unwrap();
        assert_eq!(insight, "AI and Live data both indicate precipitation likely.");
    }

    #[test]
    fn test_disagreement_rule() {
        let nowcast = NowcastResult::from_condition(SkyCondition::HeavyOvercast, 85, 5.0);
        let insight = fuse(&nowcast, Some(&observation(2))).unwrap();
        assert_eq!(
            insight,
            "AI detects heavy clouds, but live data shows different conditions."
        );
    }

    #[test]
    fn test_solar_rule() {
        let nowcast = NowcastResult::from_condition(SkyCondition::ClearSky, 5, 92.0);
        let insight = fuse(&nowcast, Some(&observation(0))).unwrap();
        assert_eq!(insight, "Excellent solar energy harvesting conditions.");
    }

    #[test]
    fn test_default_rule() {
        let nowcast = NowcastResult::from_condition(SkyCondition::MostlyCloudy, 20, 40.0);
        let insight = fuse(&nowcast, Some(&observation(3))).unwrap();
        assert_eq!(insight, "Moderate conditions for outdoor activities.");
    }

    #[test]
    fn test_agreement_dominates_solar() {
        // Both precip > 50 and solar > 70 hold; the precipitation rules
        // must win over the solar rule.
        let nowcast = NowcastResult::from_condition(SkyCondition::HeavyOvercast, 85, 80.0);
        let insight = fuse(&nowcast, Some(&observation(65))).unwrap();
        assert_eq!(insight, "AI and Live data both indicate precipitation likely.");

        let insight = fuse(&nowcast, Some(&observation(1))).unwrap();
        assert_eq!(
            insight,
            "AI detects heavy clouds, but live data shows different conditions."
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        // exactly 50/50 sits below both precipitation triggers
        let nowcast = NowcastResult::from_condition(SkyCondition::MostlyCloudy, 50, 72.0);
        let insight = fuse(&nowcast, Some(&observation(50))).unwrap();
        assert_eq!(insight, "Excellent solar energy harvesting conditions.");
    }
}
