//! Time utilities for openproficiency.
//!
//! Timestamps are `chrono::DateTime<Utc>`; the wire form is ISO 8601
//! with timezone (RFC 3339), trailing `Z` accepted.

use chrono::{DateTime, Utc};

use crate::error::{ProficiencyError, Result};

/// Return the current time in UTC.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an ISO 8601 timestamp with timezone into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ProficiencyError::InvalidTimestamp(value.to_string()))
}
