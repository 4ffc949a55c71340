use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime};

pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DUE_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueSource {
    Timestamp,
    DateOnly,
    /// Input was absent, empty or unparseable.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueResolution {
    pub due: DateTime<FixedOffset>,
    pub source: DueSource,
}

/// Turns a user-supplied due date into a timestamp.
///
/// RFC3339 is tried first and keeps its offset. A bare `YYYY-MM-DD` becomes
/// midnight UTC of that day. Anything else falls back to `now` plus
/// [`DEFAULT_DUE_HOURS`]; this never fails.
pub fn resolve_due(input: Option<&str>, now: DateTime<FixedOffset>) -> DueResolution {
    let input = input.map(str::trim).unwrap_or_default();

    if !input.is_empty() {
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return DueResolution {
                due: dt,
                source: DueSource::Timestamp,
            };
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, DATE_ONLY_FORMAT) {
            return DueResolution {
                due: date.and_time(NaiveTime::MIN).and_utc().fixed_offset(),
                source: DueSource::DateOnly,
            };
        }
    }

    DueResolution {
        due: default_due(now),
        source: DueSource::Fallback,
    }
}

pub fn resolve_due_now(input: Option<&str>) -> DueResolution {
    resolve_due(input, Local::now().fixed_offset())
}

pub fn default_due(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    now + Duration::hours(DEFAULT_DUE_HOURS)
}
