//! Live weather code interpretation
//!
//! Maps a WMO present-weather code from the external weather API onto a
//! display label and icon token. The ranges are non-overlapping and
//! ascending.

use shared::{LiveCondition, WeatherKind};

/// One WMO code range and its display class
struct CodeRange {
    lo: u16,
    hi: u16,
    kind: WeatherKind,
    icon_tag: &'static str,
}

const WMO_RANGES: &[CodeRange] = &[
    CodeRange { lo: 0, hi: 0, kind: WeatherKind::Clear, icon_tag: "sun" },
    CodeRange { lo: 1, hi: 3, kind: WeatherKind::PartlyCloudy, icon_tag: "cloud-sun" },
    CodeRange { lo: 4, hi: 49, kind: WeatherKind::Foggy, icon_tag: "cloud" },
    CodeRange { lo: 50, hi: 59, kind: WeatherKind::Drizzle, icon_tag: "droplets" },
    CodeRange { lo: 60, hi: 69, kind: WeatherKind::Rain, icon_tag: "cloud-rain" },
    CodeRange { lo: 70, hi: 79, kind: WeatherKind::Snow, icon_tag: "snowflake" },
    CodeRange { lo: 80, hi: 99, kind: WeatherKind::Storm, icon_tag: "cloud-lightning" },
];

const UNKNOWN_ICON: &str = "cloud";

/// Interpret a WMO weather code
///
/// `None` means "no observation yet" and is distinct from code 0, which
/// is a valid Clear reading. Codes outside the table map to Unknown.
pub fn interpret(code: Option<u16>) -> LiveCondition {
    let Some(code) = code else {
        return unknown();
    };

    WMO_RANGES
        .iter()
        .find(|range| (range.lo..=range.hi).contains(&code))
        .map(|range| LiveCondition {
            label: range.kind,
            icon_tag: range.icon_tag.to_string(),
        })
        .unwrap_or_else(unknown)
}

fn unknown() -> LiveCondition {
    LiveCondition {
        label: WeatherKind::Unknown,
        icon_tag: UNKNOWN_ICON.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_zero_is_clear_not_missing() {
        assert_eq!(interpret(Some(0)).label, WeatherKind::Clear);
        assert_eq!(interpret(None).label, WeatherKind::Unknown);
    }

    #[test]
    fn test_range_table() {
        assert_eq!(interpret(Some(2)).label, WeatherKind::PartlyCloudy);
        assert_eq!(interpret(Some(45)).label, WeatherKind::Foggy);
        assert_eq!(interpret(Some(53)).label, WeatherKind::Drizzle);
        assert_eq!(interpret(Some(65)).label, WeatherKind::Rain);
        assert_eq!(interpret(Some(73)).label, WeatherKind::Snow);
        assert_eq!(interpret(Some(95)).label, WeatherKind::Storm);
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(interpret(Some(3)).label, WeatherKind::PartlyCloudy);
        assert_eq!(interpret(Some(4)).label, WeatherKind::Foggy);
        assert_eq!(interpret(Some(49)).label, WeatherKind::Foggy);
        assert_eq!(interpret(Some(50)).label, WeatherKind::Drizzle);
        assert_eq!(interpret(Some(99)).label, WeatherKind::Storm);
    }

    #[test]
    fn test_out_of_table_codes_are_unknown() {
        assert_eq!(interpret(Some(100)).label, WeatherKind::Unknown);
        assert_eq!(interpret(Some(u16::MAX)).label, WeatherKind::Unknown);
    }

    #[test]
    fn test_icon_tags() {
        assert_eq!(interpret(Some(0)).icon_tag, "sun");
        assert_eq!(interpret(Some(65)).icon_tag, "cloud-rain");
        assert_eq!(interpret(None).icon_tag, "cloud");
    }
}
