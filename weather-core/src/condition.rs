use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad weather category derived from an OpenWeather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Fog,
    VolcanicAsh,
    HighWind,
    Tornado,
    Clear,
    Clouds,
    Unknown,
}

/// Inclusive code ranges, checked in order.
const CODE_TABLE: &[(i32, i32, ConditionCategory)] = &[
    (200, 232, ConditionCategory::Thunderstorm),
    (300, 321, ConditionCategory::Drizzle),
    (500, 531, ConditionCategory::Rain),
    (600, 622, ConditionCategory::Snow),
    (701, 741, ConditionCategory::Fog),
    (762, 762, ConditionCategory::VolcanicAsh),
    (771, 771, ConditionCategory::HighWind),
    (781, 781, ConditionCategory::Tornado),
    (800, 800, ConditionCategory::Clear),
    (801, 804, ConditionCategory::Clouds),
];

/// Map a condition code to its category. Codes outside every known range
/// fall back to [`ConditionCategory::Unknown`].
pub fn classify(code: i32) -> ConditionCategory {
    CODE_TABLE
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&code))
        .map(|(_, _, category)| *category)
        .unwrap_or(ConditionCategory::Unknown)
}

impl ConditionCategory {
    pub const fn all() -> &'static [ConditionCategory] {
        &[
            ConditionCategory::Thunderstorm,
            ConditionCategory::Drizzle,
            ConditionCategory::Rain,
            ConditionCategory::Snow,
            ConditionCategory::Fog,
            ConditionCategory::VolcanicAsh,
            ConditionCategory::HighWind,
            ConditionCategory::Tornado,
            ConditionCategory::Clear,
            ConditionCategory::Clouds,
            ConditionCategory::Unknown,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::Thunderstorm => "thunderstorm",
            ConditionCategory::Drizzle => "drizzle",
            ConditionCategory::Rain => "rain",
            ConditionCategory::Snow => "snow",
            ConditionCategory::Fog => "fog",
            ConditionCategory::VolcanicAsh => "volcanic-ash",
            ConditionCategory::HighWind => "high-wind",
            ConditionCategory::Tornado => "tornado",
            ConditionCategory::Clear => "clear",
            ConditionCategory::Clouds => "clouds",
            ConditionCategory::Unknown => "unknown",
        }
    }

    /// Stem of the icon asset used to render this category, e.g. `volcano`
    /// for `volcano.png`. Unknown conditions have no icon.
    pub fn icon_name(&self) -> Option<&'static str> {
        match self {
            ConditionCategory::Thunderstorm => Some("thunderstorm"),
            ConditionCategory::Drizzle => Some("drizzle"),
            ConditionCategory::Rain => Some("rain"),
            ConditionCategory::Snow => Some("snow"),
            ConditionCategory::Fog => Some("fog"),
            ConditionCategory::VolcanicAsh => Some("volcano"),
            ConditionCategory::HighWind => Some("wind"),
            ConditionCategory::Tornado => Some("tornado"),
            ConditionCategory::Clear => Some("clear"),
            ConditionCategory::Clouds => Some("clouds"),
            ConditionCategory::Unknown => None,
        }
    }

    /// Glyph used in terminal output.
    pub fn emoji(&self) -> &'static str {
        match self {
            ConditionCategory::Thunderstorm => "⛈",
            ConditionCategory::Drizzle => "🌦",
            ConditionCategory::Rain => "🌧",
            ConditionCategory::Snow => "❄",
            ConditionCategory::Fog => "🌫",
            ConditionCategory::VolcanicAsh => "🌋",
            ConditionCategory::HighWind => "💨",
            ConditionCategory::Tornado => "🌪",
            ConditionCategory::Clear => "☀",
            ConditionCategory::Clouds => "☁",
            ConditionCategory::Unknown => "?",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_map_to_their_category() {
        let cases = [
            (200..=232, ConditionCategory::Thunderstorm),
            (300..=321, ConditionCategory::Drizzle),
            (500..=531, ConditionCategory::Rain),
            (600..=622, ConditionCategory::Snow),
            (701..=741, ConditionCategory::Fog),
            (801..=804, ConditionCategory::Clouds),
        ];

        for (range, expected) in cases {
            for code in range {
                assert_eq!(classify(code), expected, "code {code}");
            }
        }
    }

    #[test]
    fn single_codes() {
        assert_eq!(classify(762), ConditionCategory::VolcanicAsh);
        assert_eq!(classify(771), ConditionCategory::HighWind);
        assert_eq!(classify(781), ConditionCategory::Tornado);
        assert_eq!(classify(800), ConditionCategory::Clear);
    }

    #[test]
    fn codes_just_outside_ranges_are_unknown() {
        let codes = [
            199, 233, 299, 322, 499, 532, 599, 623, 700, 742, 761, 763, 770, 772, 780, 782, 799,
            805,
        ];
        for code in codes {
            assert_eq!(classify(code), ConditionCategory::Unknown, "code {code}");
        }
    }

    #[test]
    fn extreme_codes_are_unknown() {
        assert_eq!(classify(i32::MIN), ConditionCategory::Unknown);
        assert_eq!(classify(-1), ConditionCategory::Unknown);
        assert_eq!(classify(0), ConditionCategory::Unknown);
        assert_eq!(classify(i32::MAX), ConditionCategory::Unknown);
    }

    #[test]
    fn classify_is_repeatable() {
        for code in [211, 500, 762, 804, 999] {
            assert_eq!(classify(code), classify(code));
        }
    }

    #[test]
    fn only_unknown_lacks_an_icon() {
        for category in ConditionCategory::all() {
            assert_eq!(
                category.icon_name().is_none(),
                *category == ConditionCategory::Unknown,
                "{category}"
            );
        }
        assert_eq!(ConditionCategory::VolcanicAsh.icon_name(), Some("volcano"));
        assert_eq!(ConditionCategory::HighWind.icon_name(), Some("wind"));
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&ConditionCategory::VolcanicAsh).unwrap();
        assert_eq!(json, "\"volcanic-ash\"");
        assert_eq!(ConditionCategory::HighWind.to_string(), "high-wind");
    }
}
