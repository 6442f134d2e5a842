//! Nowcast derivation
//!
//! Classifies the analyzed scene into a short-term condition estimate
//! from two derived scalars (thick-cloud and total-cloud coverage) and
//! the shadow share. The thresholds are ordered tables evaluated
//! top-down; the first matching row wins.

use shared::{NowcastResult, PercentageVector, SkyCondition};

/// Which coverage scalar a ladder row thresholds on
#[derive(Debug, Clone, Copy)]
enum CloudBasis {
    Thick,
    Total,
}

/// One row of the precipitation ladder
struct PrecipTier {
    basis: CloudBasis,
    above: f64,
    probability: u8,
}

/// Precipitation probability by coverage, top-down
const PRECIP_LADDER: &[PrecipTier] = &[
    PrecipTier { basis: CloudBasis::Thick, above: 70.0, probability: 85 },
    PrecipTier { basis: CloudBasis::Thick, above: 50.0, probability: 60 },
    PrecipTier { basis: CloudBasis::Thick, above: 30.0, probability: 35 },
    PrecipTier { basis: CloudBasis::Total, above: 50.0, probability: 20 },
];

/// Probability when no ladder row matches
const PRECIP_FLOOR: u8 = 5;

/// One row of the condition ladder
struct ConditionRule {
    basis: CloudBasis,
    above: f64,
    condition: SkyCondition,
}

/// Sky condition by coverage, top-down
const CONDITION_LADDER: &[ConditionRule] = &[
    ConditionRule { basis: CloudBasis::Thick, above: 70.0, condition: SkyCondition::HeavyOvercast },
    ConditionRule { basis: CloudBasis::Thick, above: 40.0, condition: SkyCondition::Overcast },
    ConditionRule { basis: CloudBasis::Total, above: 50.0, condition: SkyCondition::MostlyCloudy },
    ConditionRule { basis: CloudBasis::Total, above: 20.0, condition: SkyCondition::PartlyCloudy },
];

/// Shadowed ground costs half its share of solar potential
const SHADOW_SOLAR_WEIGHT: f64 = 0.5;

/// Derive the AI nowcast for a scene
///
/// Total over its input domain: an absent vector yields the
/// "Analyzing..." sentinel with zero probability and potential.
pub fn derive(percentages: Option<&PercentageVector>) -> NowcastResult {
    let Some(pv) = percentages else {
        return NowcastResult::analyzing();
    };

    let thick = pv.thick_cloud;
    let total = pv.total_cloud();
    let coverage = |basis: CloudBasis| match basis {
        CloudBasis::Thick => thick,
        CloudBasis::Total => total,
    };

    let probability = PRECIP_LADDER
        .iter()
        .find(|tier| coverage(tier.basis) > tier.above)
        .map(|tier| tier.probability)
        .unwrap_or(PRECIP_FLOOR);

    let condition = CONDITION_LADDER
        .iter()
        .find(|rule| coverage(rule.basis) > rule.above)
        .map(|rule| rule.condition)
        .unwrap_or(SkyCondition::ClearSky);

    let solar_potential = (100.0 - total - pv.shadow * SHADOW_SOLAR_WEIGHT).clamp(0.0, 100.0);

    NowcastResult::from_condition(condition, probability, solar_potential)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_vector_yields_sentinel() {
        let result = derive(None);
        assert_eq!(result.condition, SkyCondition::Analyzing);
        assert_eq!(result.precipitation_probability, 0);
        assert_eq!(result.solar_potential, 0.0);
    }

    #[test]
    fn test_heavy_overcast_tier() {
        let pv = PercentageVector::new(5.0, 5.0, 15.0, 75.0);
        let result = derive(Some(&pv));
        assert_eq!(result.condition, SkyCondition::HeavyOvercast);
        assert_eq!(result.precipitation_probability, 85);
    }

    #[test]
    fn test_thick_cloud_tiers_checked_before_total() {
        // total cloud is 85 but thick alone decides the tier
        let pv = PercentageVector::new(10.0, 5.0, 25.0, 60.0);
        let result = derive(Some(&pv));
        assert_eq!(result.condition, SkyCondition::Overcast);
        assert_eq!(result.precipitation_probability, 60);
    }

    #[test]
    fn test_total_cloud_fallthrough_tier() {
        // thick below every thick tier, total above 50
        let pv = PercentageVector::new(40.0, 5.0, 35.0, 20.0);
        let result = derive(Some(&pv));
        assert_eq!(result.precipitation_probability, 20);
        assert_eq!(result.condition, SkyCondition::MostlyCloudy);
    }

    #[test]
    fn test_probability_floor() {
        let pv = PercentageVector::new(80.0, 5.0, 10.0, 5.0);
        let result = derive(Some(&pv));
        assert_eq!(result.precipitation_probability, 5);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // exactly 70 thick is not > 70 and falls through to the >50 tier
        let pv = PercentageVector::new(20.0, 0.0, 10.0, 70.0);
        let result = derive(Some(&pv));
        assert_eq!(result.precipitation_probability, 60);
        assert_eq!(result.condition, SkyCondition::Overcast);
    }

    #[test]
    fn test_partly_cloudy_and_clear() {
        let partly = PercentageVector::new(70.0, 5.0, 15.0, 10.0);
        assert_eq!(derive(Some(&partly)).condition, SkyCondition::PartlyCloudy);

        let clear = PercentageVector::new(90.0, 2.0, 5.0, 3.0);
        assert_eq!(derive(Some(&clear)).condition, SkyCondition::ClearSky);
    }

    #[test]
    fn test_solar_potential_formula() {
        // 100 - (25 + 60) - 5 * 0.5 = 12.5
        let pv = PercentageVector::new(10.0, 5.0, 25.0, 60.0);
        assert_eq!(derive(Some(&pv)).solar_potential, 12.5);
    }

    #[test]
    fn test_solar_potential_clamped_at_zero() {
        let pv = PercentageVector::new(0.0, 10.0, 30.0, 70.0);
        assert_eq!(derive(Some(&pv)).solar_potential, 0.0);
    }
}
