use chrono::NaiveDate;

/// Dates in post headers are plain calendar dates, e.g. 2026-01-08
pub fn parse_pub_date(buf: &str) -> Result<NaiveDate, String> {
    match NaiveDate::parse_from_str(buf, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => Err(format!("Unable to parse date {}", buf)),
    }
}

/// Formats a date the way the README list shows it, e.g. "Jan 8, 2026"
pub fn format_short_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
