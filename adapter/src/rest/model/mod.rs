use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod event;
pub mod user;

/// The store hands ids back as strings or numbers depending on how the row
/// was seeded; either way they are opaque on this side.
pub(crate) fn de_opaque_id<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(de)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "unsupported id value: {other}"
        ))),
    }
}

/// Id lists share the string-or-number looseness; entries of any other
/// shape are dropped, the same way dangling references are.
pub(crate) fn de_opaque_id_list<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(de)?;
    Ok(values
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}

/// Price may arrive as a number or a numeric string; anything else counts
/// as free (0).
pub(crate) fn de_price<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

pub(crate) fn de_participants<'de, D>(de: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(1),
        Value::String(s) => s.trim().parse().unwrap_or(1),
        _ => 1,
    })
}

/// Dates in the store range from full RFC 3339 timestamps to the bare
/// `datetime-local` and date-only strings older rows were written with.
/// Unparseable values are treated as "no date".
pub(crate) fn de_flexible_date<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(parse_flexible_date))
}

pub(crate) fn parse_flexible_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flexible_dates_accept_the_legacy_forms() {
        assert!(parse_flexible_date("2024-03-01T18:00:00Z").is_some());
        assert!(parse_flexible_date("2024-03-01T18:00").is_some());
        assert!(parse_flexible_date("2024-03-01").is_some());
        assert!(parse_flexible_date("next friday").is_none());
    }
}
