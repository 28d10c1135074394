use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Format a calendar date the way en-US locales print it (e.g. "1/2/1990")
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Format a timestamp in the given zone (e.g. "3/1/2024, 10:00:00 AM")
pub fn format_datetime_in<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
