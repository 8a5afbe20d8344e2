use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Four-way semantic bucket derived from the provider's icon code.
///
/// Never provider-native: the OpenWeather code is mapped once at snapshot
/// construction and only the category is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
}

impl IconCategory {
    /// Map an OpenWeather icon code (e.g. "04d") to a category.
    ///
    /// First-match-wins substring policy. Codes with no bucket of their own
    /// ("11" thunderstorm, "50" mist, unknown or empty codes) fall back to
    /// `Clear`; callers must not assume those conditions render distinctly.
    pub fn from_provider_code(code: &str) -> Self {
        if code.contains("01") {
            IconCategory::Clear
        } else if code.contains("02") || code.contains("03") || code.contains("04") {
            IconCategory::Cloudy
        } else if code.contains("09") || code.contains("10") {
            IconCategory::Rain
        } else if code.contains("13") {
            IconCategory::Snow
        } else {
            IconCategory::Clear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Clear => "clear",
            IconCategory::Cloudy => "cloudy",
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
        }
    }
}

impl std::fmt::Display for IconCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The immutable weather result displayed for one resolved city.
///
/// Constructed atomically from a single fully-parsed provider response;
/// partial snapshots never exist. Replaced wholesale on the next successful
/// fetch, kept stale while a refresh is in flight, dropped on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Resolved location name as returned by the provider; spelling and
    /// casing may differ from the query.
    pub city: String,
    pub temperature_c: i32,
    /// Provider-supplied condition text, copied verbatim (lowercase).
    pub description: String,
    pub high_c: i32,
    pub low_c: i32,
    pub icon: IconCategory,
    /// Observation time reported by the provider.
    pub observed_at: DateTime<Utc>,
}

/// Round a provider temperature to the nearest whole degree.
///
/// `f64::round` is round-half-away-from-zero: 24.6 → 25, 24.5 → 25,
/// -24.5 → -25.
pub(crate) fn round_degrees(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_codes_map_to_documented_buckets() {
        let cases = [
            ("01d", IconCategory::Clear),
            ("01n", IconCategory::Clear),
            ("02d", IconCategory::Cloudy),
            ("03n", IconCategory::Cloudy),
            ("04d", IconCategory::Cloudy),
            ("09n", IconCategory::Rain),
            ("10d", IconCategory::Rain),
            ("13n", IconCategory::Snow),
        ];

        for (code, expected) in cases {
            assert_eq!(IconCategory::from_provider_code(code), expected, "code {code}");
        }
    }

    #[test]
    fn unbucketed_codes_default_to_clear() {
        // Thunderstorm and mist have no bucket of their own.
        assert_eq!(IconCategory::from_provider_code("11d"), IconCategory::Clear);
        assert_eq!(IconCategory::from_provider_code("50n"), IconCategory::Clear);
        assert_eq!(IconCategory::from_provider_code("weird"), IconCategory::Clear);
        assert_eq!(IconCategory::from_provider_code(""), IconCategory::Clear);
    }

    #[test]
    fn first_match_wins_on_ambiguous_codes() {
        // "0113" contains both the clear and snow patterns; clear is checked first.
        assert_eq!(IconCategory::from_provider_code("0113"), IconCategory::Clear);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_degrees(24.6), 25);
        assert_eq!(round_degrees(24.5), 25);
        assert_eq!(round_degrees(24.4), 24);
        assert_eq!(round_degrees(-0.5), -1);
        assert_eq!(round_degrees(0.0), 0);
    }
}
