//! Backend timestamp parsing.
//!
//! Records carry timestamps as strings (`createTime`, `releaseTime`, ...).
//! They stay strings on the DTOs; callers that need a value parse on demand.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{ModelError, ModelResult};

const BACKEND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a backend timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, RFC 3339 (converted to its naive UTC time)
/// and a bare `YYYY-MM-DD` (midnight).
pub fn parse_timestamp(raw: &str) -> ModelResult<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, BACKEND_FORMAT) {
        return Ok(ts);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.naive_utc());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ModelError::invalid_timestamp(raw.to_string()))
}
