//! Strict weather schema and its display labels

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde_json::Value;

/// Forecast entries kept after normalization
pub const MAX_FORECAST_DAYS: usize = 3;

/// Placeholder shown for any absent field
const PLACEHOLDER: &str = "—";

/// Normalized weather document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub feels_like: Option<f64>,
    pub location: Option<String>,
    pub condition: Option<String>,
    pub icon: Option<String>,
    pub forecast: Vec<ForecastDay>,
}

/// One normalized forecast day
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    /// Display label for the day: "Mon", "N/A", or a clipped raw value
    pub label: String,
    pub icon: Option<String>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub condition: Option<String>,
}

impl WeatherSnapshot {
    /// Normalize a loosely-typed weather document.
    ///
    /// Never fails: fields with missing keys or unusable values are simply
    /// left absent.
    pub fn normalize(doc: &Value) -> Self {
        let forecast = doc
            .get("forecast")
            .and_then(Value::as_array)
            .map(|days| {
                days.iter()
                    .take(MAX_FORECAST_DAYS)
                    .map(ForecastDay::normalize)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            temperature: number_field(doc, &["temperature"]),
            humidity: number_field(doc, &["humidity"]),
            wind_speed: number_field(doc, &["windSpeed"]),
            feels_like: number_field(doc, &["feelsLike"]),
            location: string_field(doc, &["location", "city"]),
            condition: string_field(doc, &["condition"]),
            icon: string_field(doc, &["icon"]),
            forecast,
        }
    }

    /// "72°F", or the placeholder
    pub fn temperature_label(&self) -> String {
        unit_label(self.temperature, "°F")
    }

    /// "45%", or the placeholder
    pub fn humidity_label(&self) -> String {
        unit_label(self.humidity, "%")
    }

    /// "12 mph", or the placeholder
    pub fn wind_label(&self) -> String {
        match self.wind_speed {
            Some(v) => format!("{} mph", trim_float(v)),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// "68°F", or the placeholder
    pub fn feels_like_label(&self) -> String {
        unit_label(self.feels_like, "°F")
    }

    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn condition_label(&self) -> &str {
        self.condition.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn icon_label(&self) -> &str {
        self.icon.as_deref().unwrap_or(PLACEHOLDER)
    }
}

impl ForecastDay {
    /// Normalize one forecast entry, resolving its alternate key names
    pub fn normalize(day: &Value) -> Self {
        Self {
            label: day_label(first_present(day, &["date", "day", "dt"])),
            icon: string_field(day, &["icon", "weatherIcon"]),
            high: number_field(day, &["high", "tempHigh"]),
            low: number_field(day, &["low", "tempLow"]),
            condition: string_field(day, &["condition", "summary"]),
        }
    }

    /// "80°H", or the placeholder
    pub fn high_label(&self) -> String {
        match self.high {
            Some(v) => format!("{}°H", trim_float(v)),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// "60°L", or the placeholder
    pub fn low_label(&self) -> String {
        match self.low {
            Some(v) => format!("{}°L", trim_float(v)),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn icon_label(&self) -> &str {
        self.icon.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn condition_label(&self) -> &str {
        self.condition.as_deref().unwrap_or(PLACEHOLDER)
    }
}

/// First value present and non-null under any of `keys`
fn first_present<'a>(doc: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| doc.get(*key))
        .find(|value| !value.is_null())
}

/// Numeric field: accepts JSON numbers and numeric strings
fn number_field(doc: &Value, keys: &[&str]) -> Option<f64> {
    first_present(doc, keys).and_then(|value| match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// String field: non-empty strings only
fn string_field(doc: &Value, keys: &[&str]) -> Option<String> {
    first_present(doc, keys)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Turn a forecast day's date value into a short display label.
///
/// Day names pass through, timestamps and parseable dates become the short
/// weekday in local time, anything else is clipped to 10 characters.
fn day_label(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "N/A".to_string();
    };
    match value {
        Value::String(s) if s.is_empty() => "N/A".to_string(),
        Value::String(s) if is_day_name(s) => s.clone(),
        Value::String(s) => parse_date_weekday(s).unwrap_or_else(|| clipped(value)),
        Value::Number(n) => match n.as_f64() {
            Some(ts) if ts == 0.0 => "N/A".to_string(),
            Some(ts) => timestamp_weekday(ts).unwrap_or_else(|| clipped(value)),
            None => clipped(value),
        },
        _ => clipped(value),
    }
}

/// Strings that already look like a day label ("Mon", "Tuesday")
fn is_day_name(s: &str) -> bool {
    s.len() >= 3 && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Short weekday for a Unix timestamp: values below 10^12 are seconds,
/// larger ones are milliseconds
fn timestamp_weekday(ts: f64) -> Option<String> {
    let millis = if ts.abs() < 1e12 { ts * 1000.0 } else { ts };
    if !millis.is_finite() {
        return None;
    }
    Local
        .timestamp_millis_opt(millis as i64)
        .single()
        .map(|dt| dt.format("%a").to_string())
}

/// Short weekday for a date string, trying the common encodings
fn parse_date_weekday(s: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).format("%a").to_string());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.format("%a").to_string());
        }
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date.format("%a").to_string());
        }
    }
    None
}

/// Value with its unit, or the placeholder
fn unit_label(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", trim_float(v), unit),
        None => PLACEHOLDER.to_string(),
    }
}

/// First 10 characters of the stringified value
fn clipped(value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    raw.chars().take(10).collect()
}

/// Formats 72.0 as "72" and 72.5 as "72.5"
fn trim_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_full_document() {
        let doc = json!({
            "temperature": 72,
            "humidity": 45,
            "windSpeed": 12,
            "feelsLike": 68,
            "location": "Austin",
            "condition": "Sunny",
            "icon": "☀️"
        });
        let snapshot = WeatherSnapshot::normalize(&doc);

        assert_eq!(snapshot.temperature_label(), "72°F");
        assert_eq!(snapshot.humidity_label(), "45%");
        assert_eq!(snapshot.wind_label(), "12 mph");
        assert_eq!(snapshot.feels_like_label(), "68°F");
        assert_eq!(snapshot.location_label(), "Austin");
        assert_eq!(snapshot.condition_label(), "Sunny");
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let snapshot = WeatherSnapshot::normalize(&json!({}));

        assert_eq!(snapshot.temperature_label(), "—");
        assert_eq!(snapshot.humidity_label(), "—");
        assert_eq!(snapshot.wind_label(), "—");
        assert_eq!(snapshot.feels_like_label(), "—");
        assert_eq!(snapshot.location_label(), "—");
        assert_eq!(snapshot.condition_label(), "—");
        assert_eq!(snapshot.icon_label(), "—");
        assert!(snapshot.forecast.is_empty());
    }

    #[test]
    fn test_normalize_never_panics_on_odd_shapes() {
        for doc in [
            json!(null),
            json!(42),
            json!("just a string"),
            json!([1, 2, 3]),
            json!({"forecast": "not an array"}),
            json!({"forecast": [null, 17, "x"]}),
            json!({"temperature": {"nested": true}}),
        ] {
            let _ = WeatherSnapshot::normalize(&doc);
        }
    }

    #[test]
    fn test_city_fallback_for_location() {
        let snapshot = WeatherSnapshot::normalize(&json!({"city": "Oslo"}));
        assert_eq!(snapshot.location_label(), "Oslo");

        let snapshot =
            WeatherSnapshot::normalize(&json!({"location": "Austin", "city": "Oslo"}));
        assert_eq!(snapshot.location_label(), "Austin");
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let snapshot = WeatherSnapshot::normalize(&json!({"temperature": "72.5"}));
        assert_eq!(snapshot.temperature_label(), "72.5°F");
    }

    #[test]
    fn test_forecast_truncated_to_three_in_order() {
        let doc = json!({
            "forecast": [
                {"date": "Mon"}, {"date": "Tue"}, {"date": "Wed"},
                {"date": "Thu"}, {"date": "Fri"}
            ]
        });
        let snapshot = WeatherSnapshot::normalize(&doc);

        let labels: Vec<&str> = snapshot.forecast.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed"]);
    }

    #[test]
    fn test_forecast_alternate_keys() {
        let doc = json!({
            "forecast": [{
                "day": "Sat",
                "tempHigh": 81,
                "tempLow": 59,
                "summary": "Breezy",
                "weatherIcon": "🌬️"
            }]
        });
        let snapshot = WeatherSnapshot::normalize(&doc);
        let day = &snapshot.forecast[0];

        assert_eq!(day.label, "Sat");
        assert_eq!(day.high_label(), "81°H");
        assert_eq!(day.low_label(), "59°L");
        assert_eq!(day.condition_label(), "Breezy");
        assert_eq!(day.icon_label(), "🌬️");
    }

    #[test]
    fn test_forecast_day_missing_fields() {
        let snapshot = WeatherSnapshot::normalize(&json!({"forecast": [{}]}));
        let day = &snapshot.forecast[0];

        assert_eq!(day.label, "N/A");
        assert_eq!(day.high_label(), "—");
        assert_eq!(day.low_label(), "—");
        assert_eq!(day.condition_label(), "—");
        assert_eq!(day.icon_label(), "—");
    }

    #[test]
    fn test_scenario_austin_snapshot() {
        let doc = json!({
            "temperature": 72,
            "location": "Austin",
            "forecast": [{"date": "Mon", "high": 80, "low": 60, "condition": "Sunny"}]
        });
        let snapshot = WeatherSnapshot::normalize(&doc);

        assert_eq!(snapshot.temperature_label(), "72°F");
        assert_eq!(snapshot.location_label(), "Austin");
        assert_eq!(snapshot.forecast.len(), 1);
        assert_eq!(snapshot.forecast[0].label, "Mon");
        assert_eq!(snapshot.forecast[0].high_label(), "80°H");
        assert_eq!(snapshot.forecast[0].low_label(), "60°L");
    }

    #[test]
    fn test_day_label_passes_through_day_names() {
        assert_eq!(day_label(Some(&json!("Mon"))), "Mon");
        assert_eq!(day_label(Some(&json!("Tuesday"))), "Tuesday");
    }

    #[test]
    fn test_day_label_absent_value() {
        assert_eq!(day_label(None), "N/A");
        assert_eq!(day_label(Some(&json!(""))), "N/A");
        assert_eq!(day_label(Some(&json!(0))), "N/A");
    }

    #[test]
    fn test_day_label_seconds_and_millis_agree() {
        let secs: i64 = 1_754_000_000;
        let as_secs = day_label(Some(&json!(secs)));
        let as_millis = day_label(Some(&json!(secs * 1000)));

        assert_eq!(as_secs, as_millis);
        assert_eq!(as_secs.len(), 3);
        assert!(as_secs.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_day_label_parses_iso_date() {
        // 2026-08-24 is a Monday regardless of time zone
        assert_eq!(day_label(Some(&json!("2026-08-24"))), "Mon");
        assert_eq!(day_label(Some(&json!("08/24/2026"))), "Mon");
        assert_eq!(day_label(Some(&json!("2026-08-24 09:30:00"))), "Mon");
    }

    #[test]
    fn test_day_label_clips_unparseable_values() {
        assert_eq!(day_label(Some(&json!("@@not-a-date-at-all"))), "@@not-a-da");
        assert_eq!(day_label(Some(&json!(true))), "true");
    }

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(72.0), "72");
        assert_eq!(trim_float(72.5), "72.5");
        assert_eq!(trim_float(-3.0), "-3");
    }
}
