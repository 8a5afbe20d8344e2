use skycast_core::{IconCategory, ViewState, WeatherSnapshot};

/// Render the widget state to terminal text.
///
/// Exactly one of the three views is produced, by strict precedence:
/// loading (even when a stale snapshot is carried), then error, then the
/// weather card. The tagged state makes any other combination impossible.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading { .. } => "Fetching weather...".to_string(),
        ViewState::Failed(message) => format!("Error: {message}"),
        ViewState::Ready(snapshot) => card(snapshot),
    }
}

fn glyph(icon: IconCategory) -> &'static str {
    match icon {
        IconCategory::Clear => "\u{2600}",  // ☀
        IconCategory::Cloudy => "\u{2601}", // ☁
        IconCategory::Rain => "\u{1f327}",  // 🌧
        IconCategory::Snow => "\u{2744}",   // ❄
    }
}

/// Fixed card layout: icon, temperature, description, city, high/low, age.
fn card(snapshot: &WeatherSnapshot) -> String {
    format!(
        "{} {}°C\n{}\n{}\nHigh {}° / Low {}°\nas of {} UTC",
        glyph(snapshot.icon),
        snapshot.temperature_c,
        snapshot.description,
        snapshot.city,
        snapshot.high_c,
        snapshot.low_c,
        snapshot.observed_at.format("%H:%M"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn cairo() -> WeatherSnapshot {
        WeatherSnapshot {
            city: "Cairo".to_string(),
            temperature_c: 25,
            description: "clear sky".to_string(),
            high_c: 31,
            low_c: 20,
            icon: IconCategory::Clear,
            observed_at: Utc.with_ymd_and_hms(2026, 8, 25, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn loading_takes_precedence_over_a_stale_snapshot() {
        let state = ViewState::Loading {
            previous: Some(cairo()),
        };

        assert_eq!(render(&state), "Fetching weather...");
    }

    #[test]
    fn error_view_shows_the_message() {
        let state = ViewState::Failed("City not found or API error".to_string());
        assert_eq!(render(&state), "Error: City not found or API error");
    }

    #[test]
    fn card_lists_icon_temperature_description_city_then_extremes() {
        let out = render(&ViewState::Ready(cairo()));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "\u{2600} 25°C");
        assert_eq!(lines[1], "clear sky");
        assert_eq!(lines[2], "Cairo");
        assert_eq!(lines[3], "High 31° / Low 20°");
        assert_eq!(lines[4], "as of 12:30 UTC");
    }
}
