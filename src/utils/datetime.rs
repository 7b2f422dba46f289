use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Formats a date the way it appears in chat messages: dd.mm.yyyy.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Weekday index, 0=Monday through 6=Sunday. Used for log output.
pub fn weekday_index(dt: NaiveDateTime) -> u32 {
    dt.weekday().num_days_from_monday()
}
