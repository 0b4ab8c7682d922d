// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use base::PLACEHOLDER;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
  pub condition: String,
  pub temperature: String,
  pub wind: String,
}

impl WeatherReport {
  /// Splits the trimmed body on single spaces and takes the first three tokens.
  ///
  /// Multi-word conditions are not recognised: `"Partly cloudy +10°C"` gives a
  /// condition of `"Partly"` and a temperature of `"cloudy"`. Absent or empty
  /// tokens become [`PLACEHOLDER`].
  pub fn parse(raw: &str) -> Self {
    let mut tokens = raw
      .trim()
      .split(' ')
      .map(|token| if token.is_empty() { PLACEHOLDER } else { token });
    let mut next = || tokens.next().unwrap_or(PLACEHOLDER).to_string();

    Self {
      condition: next(),
      temperature: next(),
      wind: next(),
    }
  }

  pub fn format_lines(&self) -> String {
    [
      format!("📌 **Weather:** {}", self.condition),
      format!("🔥 **Temperature:** {}", self.temperature),
      format!("💨 **Wind:** {}", self.wind),
      "👔 **What to wear:** No tailored advice from the script, judge by the temperature.".into(),
      "💧 **Precipitation:** Check the chance of rain manually.".into(),
    ]
    .join("\n")
  }
}

/// The report text that ends up in every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
  Parsed(WeatherReport),
  /// Fetch failed; the error line is delivered in place of the weather.
  Degraded(String),
  /// Text handed in on the command line, sent as is.
  Supplied(String),
}

impl Report {
  pub fn degraded(city: &str, cause: impl fmt::Display) -> Self {
    Self::Degraded(format!(
      "[Weather unavailable] Could not fetch the weather for {}: {}",
      city, cause
    ))
  }

  pub fn is_degraded(&self) -> bool {
    matches!(self, Self::Degraded(_))
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Parsed(report) => f.write_str(&report.format_lines()),
      Self::Degraded(text) | Self::Supplied(text) => f.write_str(text),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn three_tokens_map_in_order() {
    let report = WeatherReport::parse("Sunny +21°C ↗9km/h");
    assert_eq!(report.condition, "Sunny");
    assert_eq!(report.temperature, "+21°C");
    assert_eq!(report.wind, "↗9km/h");
  }

  #[test]
  fn extra_tokens_are_ignored() {
    let report = WeatherReport::parse("  Clear +5°C ←3km/h 🌖\n");
    assert_eq!(report.wind, "←3km/h");
  }

  #[test]
  fn missing_tokens_become_placeholder() {
    assert_eq!(
      WeatherReport::parse("Rain"),
      WeatherReport {
        condition: "Rain".into(),
        temperature: "N/A".into(),
        wind: "N/A".into(),
      }
    );

    let empty = WeatherReport::parse("");
    assert_eq!(empty.condition, "N/A");
    assert_eq!(empty.temperature, "N/A");
    assert_eq!(empty.wind, "N/A");
  }

  #[test]
  fn double_spaces_leave_a_gap() {
    let report = WeatherReport::parse("Fog  +3°C");
    assert_eq!(report.condition, "Fog");
    assert_eq!(report.temperature, "N/A");
    assert_eq!(report.wind, "+3°C");
  }

  #[test]
  fn multi_word_condition_is_split_naively() {
    let report = WeatherReport::parse("Partly cloudy +10°C Wind: 10km/h");
    assert_eq!(report.condition, "Partly");
    assert_eq!(report.temperature, "cloudy");
    assert_eq!(report.wind, "+10°C");
  }

  #[test]
  fn parsed_report_renders_five_lines() {
    let text = Report::Parsed(WeatherReport::parse("Sunny +21°C 9km/h")).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "📌 **Weather:** Sunny");
    assert_eq!(lines[1], "🔥 **Temperature:** +21°C");
    assert_eq!(lines[2], "💨 **Wind:** 9km/h");
  }

  #[test]
  fn degraded_and_supplied_render_verbatim() {
    let degraded = Report::degraded("Tokyo", "connection refused");
    assert!(degraded.is_degraded());
    assert_eq!(
      degraded.to_string(),
      "[Weather unavailable] Could not fetch the weather for Tokyo: connection refused"
    );
    assert_eq!(Report::Supplied("hand written".into()).to_string(), "hand written");
  }
}
