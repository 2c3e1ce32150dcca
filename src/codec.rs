//! Field decoders for the backend's JSON.
//!
//! The backend serialises SQL decimals as strings and dates in whatever form
//! its JSON encoder picks, so money and date fields go through these instead
//! of the plain serde impls. Anything unrecognised is an error, never a default.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts `YYYY-MM-DD`, an ISO datetime, or an RFC 2822 datetime.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Some(prefix) = raw.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            let rest = &raw[10..];
            if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
                return Some(date);
            }
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(raw, "%a, %d %b %Y %H:%M:%S GMT")
        .ok()
        .map(|dt| dt.date())
}

pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(v) => Ok(v),
        NumberOrText::Text(s) => parse_amount(&s)
            .ok_or_else(|| de::Error::custom(format!("`{}` is not an amount", s))),
    }
}

pub fn amounts<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<NumberOrText>::deserialize(deserializer)?
        .into_iter()
        .map(|item| match item {
            NumberOrText::Number(v) => Ok(v),
            NumberOrText::Text(s) => parse_amount(&s)
                .ok_or_else(|| de::Error::custom(format!("`{}` is not an amount", s))),
        })
        .collect()
}

pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("`{}` is not a date", raw)))
}

pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("`{}` is not a date", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_date_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 12, 1);
        assert_eq!(parse_date("2025-12-01"), expected);
        assert_eq!(parse_date("2025-12-01T10:15:00"), expected);
        assert_eq!(parse_date("2025-12-01 10:15:00"), expected);
        assert_eq!(parse_date("Mon, 01 Dec 2025 00:00:00 GMT"), expected);
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("2025-12-01x"), None);
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn amounts_accept_decimal_strings() {
        assert_eq!(parse_amount(" 1250.50 "), Some(1250.5));
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("12abc"), None);
    }
}
