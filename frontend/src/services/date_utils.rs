use chrono::NaiveDate;
use shared::Event;

/// Today's date in the browser's local time zone.
///
/// Built from the local year/month/day components so the date never shifts
/// through UTC.
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// e.g. "Friday, March 15, 2024"
pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// e.g. "Mar 15"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Date part of an event line: "Mar 10" or "Mar 10 - Mar 12"
pub fn format_event_dates(event: &Event) -> String {
    if event.is_multi_day() {
        format!(
            "{} - {}",
            format_short_date(event.start_date),
            format_short_date(event.last_day())
        )
    } else {
        format_short_date(event.start_date)
    }
}
