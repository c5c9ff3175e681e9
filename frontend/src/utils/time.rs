use chrono::{Local, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// Calendar date in the browser's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD`, the format used by `<input type="date">` and the API.
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Blank input is `Ok(None)`; anything else must be an ISO date.
pub fn parse_date_input(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, ISO_DATE).map(Some)
}

pub fn format_percentage(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}%", rounded)
}
