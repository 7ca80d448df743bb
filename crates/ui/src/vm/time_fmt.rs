use chrono::{DateTime, Utc};

/// Short calendar date, e.g. `14 Nov 2023`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%-d %b %Y").to_string()
}
