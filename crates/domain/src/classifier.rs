//! Weather classifier
//!
//! Maps WMO weather codes to an icon bucket and a display description.
//! The two mappings are independent: icons come from a coarse
//! threshold ladder, descriptions from an exact-match table. A code can land in
//! a specific icon bucket while still falling back to the generic description
//! (code 4 is "fog" with an unknown description).
//!
//! See: <https://open-meteo.com/en/docs> for the WMO code reference

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual category used to pick a weather glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    /// Clear sky
    Clear,
    /// Mainly clear or partly cloudy
    PartlyCloudy,
    /// Overcast, also the fallback for codes outside the ladder
    Cloudy,
    /// Fog and other low-visibility codes up to 49
    Fog,
    /// Drizzle
    LightRain,
    /// Rain, freezing rain and rain showers
    HeavyRain,
    /// Snow fall, snow grains and snow showers
    Snow,
    /// Thunderstorm with or without hail
    Thunderstorm,
}

impl IconCategory {
    /// Every category, in ladder order
    pub const ALL: [Self; 8] = [
        Self::Clear,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Fog,
        Self::LightRain,
        Self::HeavyRain,
        Self::Snow,
        Self::Thunderstorm,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Fog => "fog",
            Self::LightRain => "light-rain",
            Self::HeavyRain => "heavy-rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
        }
    }

    /// Glyph name in the Material Design icon set
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Clear => "weather-sunny",
            Self::PartlyCloudy => "weather-partly-cloudy",
            Self::Cloudy => "weather-cloudy",
            Self::Fog => "weather-fog",
            Self::LightRain => "weather-rainy",
            Self::HeavyRain => "weather-pouring",
            Self::Snow => "weather-snowy",
            Self::Thunderstorm => "weather-lightning",
        }
    }

    /// Emoji representation for text terminals
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁️",
            Self::Fog => "🌫️",
            Self::LightRain => "🌦️",
            Self::HeavyRain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Predicate for one rung of the icon ladder
///
/// Upper bounds only apply inside the WMO range, so negative codes match no
/// rung and take the default icon.
#[derive(Debug, Clone, Copy)]
enum Threshold {
    Exactly(i32),
    AtMost(i32),
}

impl Threshold {
    const fn matches(self, code: i32) -> bool {
        match self {
            Self::Exactly(value) => code == value,
            Self::AtMost(value) => code >= 0 && code <= value,
        }
    }
}

/// Evaluated top to bottom, first match wins
const ICON_LADDER: [(Threshold, IconCategory); 10] = [
    (Threshold::Exactly(0), IconCategory::Clear),
    (Threshold::AtMost(2), IconCategory::PartlyCloudy),
    (Threshold::Exactly(3), IconCategory::Cloudy),
    (Threshold::AtMost(49), IconCategory::Fog),
    (Threshold::AtMost(59), IconCategory::LightRain),
    (Threshold::AtMost(69), IconCategory::HeavyRain),
    (Threshold::AtMost(79), IconCategory::Snow),
    // rain with snow
    (Threshold::AtMost(84), IconCategory::HeavyRain),
    (Threshold::AtMost(86), IconCategory::Snow),
    (Threshold::AtMost(99), IconCategory::Thunderstorm),
];

const DEFAULT_ICON: IconCategory = IconCategory::Cloudy;

/// Exact-match description table (pt)
const DESCRIPTIONS: [(i32, &str); 28] = [
    (0, "céu limpo"),
    (1, "principalmente limpo"),
    (2, "parcialmente nublado"),
    (3, "nublado"),
    (45, "névoa"),
    (48, "névoa depositada"),
    (51, "chuvisco leve"),
    (53, "chuvisco moderado"),
    (55, "chuvisco denso"),
    (56, "chuvisco congelante leve"),
    (57, "chuvisco congelante denso"),
    (61, "chuva leve"),
    (63, "chuva moderada"),
    (65, "chuva forte"),
    (66, "chuva congelante leve"),
    (67, "chuva congelante forte"),
    (71, "neve leve"),
    (73, "neve moderada"),
    (75, "neve forte"),
    (77, "grãos de neve"),
    (80, "chuva leve"),
    (81, "chuva moderada"),
    (82, "chuva forte"),
    (85, "neve leve"),
    (86, "neve forte"),
    (95, "trovoada"),
    (96, "trovoada com granizo leve"),
    (99, "trovoada com granizo forte"),
];

/// Description for codes missing from [`DESCRIPTIONS`]
pub const UNKNOWN_DESCRIPTION: &str = "condições desconhecidas";

/// Icon bucket for a WMO code. Total over all integers.
#[must_use]
pub fn icon_for(code: i32) -> IconCategory {
    ICON_LADDER
        .iter()
        .find(|(threshold, _)| threshold.matches(code))
        .map_or(DEFAULT_ICON, |(_, icon)| *icon)
}

/// Description for a WMO code. Total over all integers.
#[must_use]
pub fn description_for(code: i32) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(UNKNOWN_DESCRIPTION, |(_, description)| description)
}

/// Result of classifying one WMO code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// WMO code that was classified
    pub code: i32,
    /// Icon bucket
    pub icon: IconCategory,
    /// Display description
    pub description: &'static str,
}

/// Classify a WMO code into icon and description
#[must_use]
pub fn classify(code: i32) -> Classification {
    Classification {
        code,
        icon: icon_for(code),
        description: description_for(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_boundaries() {
        assert_eq!(icon_for(0), IconCategory::Clear);
        assert_eq!(icon_for(1), IconCategory::PartlyCloudy);
        assert_eq!(icon_for(2), IconCategory::PartlyCloudy);
        assert_eq!(icon_for(3), IconCategory::Cloudy);
        assert_eq!(icon_for(4), IconCategory::Fog);
        assert_eq!(icon_for(49), IconCategory::Fog);
        assert_eq!(icon_for(50), IconCategory::LightRain);
        assert_eq!(icon_for(59), IconCategory::LightRain);
        assert_eq!(icon_for(60), IconCategory::HeavyRain);
        assert_eq!(icon_for(69), IconCategory::HeavyRain);
        assert_eq!(icon_for(70), IconCategory::Snow);
        assert_eq!(icon_for(79), IconCategory::Snow);
        assert_eq!(icon_for(80), IconCategory::HeavyRain);
        assert_eq!(icon_for(84), IconCategory::HeavyRain);
        assert_eq!(icon_for(85), IconCategory::Snow);
        assert_eq!(icon_for(86), IconCategory::Snow);
        assert_eq!(icon_for(87), IconCategory::Thunderstorm);
        assert_eq!(icon_for(99), IconCategory::Thunderstorm);
    }

    #[test]
    fn test_out_of_range_defaults_to_cloudy() {
        assert_eq!(icon_for(100), IconCategory::Cloudy);
        assert_eq!(icon_for(150), IconCategory::Cloudy);
        assert_eq!(icon_for(i32::MAX), IconCategory::Cloudy);
    }

    #[test]
    fn test_negative_codes_default_to_cloudy() {
        assert_eq!(icon_for(-1), IconCategory::Cloudy);
        assert_eq!(icon_for(-5), IconCategory::Cloudy);
        assert_eq!(icon_for(i32::MIN), IconCategory::Cloudy);
    }

    #[test]
    fn test_exact_descriptions() {
        assert_eq!(description_for(0), "céu limpo");
        assert_eq!(description_for(48), "névoa depositada");
        assert_eq!(description_for(61), "chuva leve");
        assert_eq!(description_for(80), "chuva leve");
        assert_eq!(description_for(99), "trovoada com granizo forte");
    }

    #[test]
    fn test_unknown_description() {
        assert_eq!(description_for(4), UNKNOWN_DESCRIPTION);
        assert_eq!(description_for(50), UNKNOWN_DESCRIPTION);
        assert_eq!(description_for(-1), UNKNOWN_DESCRIPTION);
        assert_eq!(description_for(100), UNKNOWN_DESCRIPTION);
    }

    #[test]
    fn test_icon_and_description_diverge() {
        let c = classify(4);
        assert_eq!(c.icon, IconCategory::Fog);
        assert_eq!(c.description, UNKNOWN_DESCRIPTION);
    }

    #[test]
    fn test_classify_light_rain() {
        let c = classify(61);
        assert_eq!(c.code, 61);
        assert_eq!(c.icon, IconCategory::HeavyRain);
        assert_eq!(c.description, "chuva leve");

        let c = classify(51);
        assert_eq!(c.icon, IconCategory::LightRain);
        assert_eq!(c.description, "chuvisco leve");
    }

    #[test]
    fn test_every_described_code_has_an_icon_in_range() {
        for (code, _) in DESCRIPTIONS {
            assert!(IconCategory::ALL.contains(&icon_for(code)));
        }
    }

    #[test]
    fn test_icon_ids_and_glyphs() {
        assert_eq!(IconCategory::Clear.id(), "clear");
        assert_eq!(IconCategory::PartlyCloudy.to_string(), "partly-cloudy");
        assert_eq!(IconCategory::LightRain.glyph(), "weather-rainy");
        assert_eq!(IconCategory::HeavyRain.glyph(), "weather-pouring");
        assert_eq!(IconCategory::Thunderstorm.glyph(), "weather-lightning");
    }

    #[test]
    fn test_icon_serialization_matches_id() {
        for icon in IconCategory::ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.id()));
        }
    }
}
