//! Month grid, date matching and navigation for the mini calendar.
//!
//! Everything here is pure date math over [`chrono::NaiveDate`]; the UI only
//! renders what these functions return.

use chrono::{Datelike, NaiveDate};

use crate::Event;

/// A month/year pair the calendar is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Returns `None` unless `month` is in 1..=12 and the month lies inside
    /// the range of dates chrono can represent
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Cursor for the current month, given today's local date
    pub fn today(today: NaiveDate) -> Self {
        Self::containing(today)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month before this one; stays put at the earliest supported month
    pub fn previous(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).unwrap_or(*self)
    }

    /// The month after this one; stays put at the latest supported month
    pub fn next(&self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).unwrap_or(*self)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the 1st (0 = Sunday, 1 = Monday, ...)
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// e.g. "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// One slot of the 7-column month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    /// `None` for the blank cells before the 1st
    pub date: Option<NaiveDate>,
}

impl CalendarCell {
    pub fn blank() -> Self {
        Self { date: None }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self { date: Some(date) }
    }

    pub fn is_blank(&self) -> bool {
        self.date.is_none()
    }

    pub fn day_number(&self) -> Option<u32> {
        self.date.map(|date| date.day())
    }
}

/// Build the cells for a month: leading blanks up to the weekday of the 1st,
/// then one cell per day. The last week is left short rather than padded.
pub fn month_grid(cursor: MonthCursor) -> Vec<CalendarCell> {
    let leading = cursor.first_weekday() as usize;
    let days = cursor.days_in_month();

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(CalendarCell::blank()).take(leading));
    cells.extend(
        (1..=days)
            .filter_map(|day| NaiveDate::from_ymd_opt(cursor.year(), cursor.month(), day))
            .map(CalendarCell::day),
    );
    cells
}

/// All events shown on `date`, in source order
pub fn events_on_date(date: NaiveDate, events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|event| event.occurs_on(date)).collect()
}

/// What a single grid cell shows: the first `cap` events and a count of the rest
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeSummary<'a> {
    pub shown: Vec<&'a Event>,
    pub more: usize,
}

impl BadgeSummary<'_> {
    /// Text for the overflow indicator, e.g. "+2 more"
    pub fn more_label(&self) -> Option<String> {
        (self.more > 0).then(|| format!("+{} more", self.more))
    }
}

pub fn badge_summary<'a>(events: &[&'a Event], cap: usize) -> BadgeSummary<'a> {
    let shown: Vec<&Event> = events.iter().take(cap).copied().collect();
    BadgeSummary {
        more: events.len() - shown.len(),
        shown,
    }
}

/// Viewed month and selected date of the mini calendar.
///
/// The two are independent: navigating months keeps the selection even when
/// the selected day is no longer visible, and selecting a day in the grid
/// never moves the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSelection {
    pub viewed_month: MonthCursor,
    pub selected_date: NaiveDate,
}

impl CalendarSelection {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            viewed_month: MonthCursor::today(today),
            selected_date: today,
        }
    }

    pub fn previous_month(&self) -> Self {
        Self { viewed_month: self.viewed_month.previous(), ..*self }
    }

    pub fn next_month(&self) -> Self {
        Self { viewed_month: self.viewed_month.next(), ..*self }
    }

    /// Jump the view back to the current month; the selection is kept
    pub fn go_to_today(&self, today: NaiveDate) -> Self {
        Self { viewed_month: MonthCursor::today(today), ..*self }
    }

    pub fn select(&self, date: NaiveDate) -> Self {
        Self { selected_date: date, ..*self }
    }

    pub fn is_selected(&self, cell: &CalendarCell) -> bool {
        cell.date == Some(self.selected_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cursor(y: i32, m: u32) -> MonthCursor {
        MonthCursor::new(y, m).unwrap()
    }

    fn event(id: &str, start: &str, end: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            event_type: EventType::General,
            start_date: crate::parse_calendar_date(start).unwrap(),
            end_date: end.map(|e| crate::parse_calendar_date(e).unwrap()),
            start_time: None,
            end_time: None,
            location: None,
        }
    }

    #[test]
    fn test_month_cursor_rejects_invalid_month() {
        assert!(MonthCursor::new(2024, 0).is_none());
        assert!(MonthCursor::new(2024, 13).is_none());
        assert!(MonthCursor::new(2024, 12).is_some());
        assert!(MonthCursor::new(i32::MAX, 1).is_none());
        assert!(MonthCursor::new(i32::MIN, 12).is_none());
    }

    #[test]
    fn test_navigation_stops_at_supported_range() {
        let last = MonthCursor::containing(NaiveDate::MAX);
        assert_eq!(last.next(), last);
        assert_eq!(last.previous().next(), last);

        let first = MonthCursor::containing(NaiveDate::MIN);
        assert_eq!(first.previous(), first);
        assert_eq!(first.next().previous(), first);

        for c in [first, last] {
            let grid = month_grid(c);
            let leading = grid.iter().take_while(|cell| cell.is_blank()).count();
            assert_eq!(grid.len(), leading + c.days_in_month() as usize);
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(cursor(2024, 1).days_in_month(), 31);
        assert_eq!(cursor(2024, 2).days_in_month(), 29);
        assert_eq!(cursor(2023, 2).days_in_month(), 28);
        assert_eq!(cursor(1900, 2).days_in_month(), 28);
        assert_eq!(cursor(2000, 2).days_in_month(), 29);
        assert_eq!(cursor(2024, 4).days_in_month(), 30);
    }

    #[test]
    fn test_month_grid_shape_for_every_month() {
        for year in [1999, 2000, 2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let c = cursor(year, month);
                let grid = month_grid(c);
                let leading = grid.iter().take_while(|cell| cell.is_blank()).count();

                assert_eq!(grid.len(), leading + c.days_in_month() as usize);
                assert!(leading < 7);
                assert!(grid[leading..].iter().all(|cell| !cell.is_blank()));

                let first = grid[leading].date.unwrap();
                assert_eq!(first, date(year, month, 1));
                assert_eq!(leading as u32, first.weekday().num_days_from_sunday());

                let last = grid.last().unwrap().date.unwrap();
                assert_eq!(last.day(), c.days_in_month());
            }
        }
    }

    #[test]
    fn test_month_grid_march_2024() {
        // March 1st 2024 is a Friday
        let grid = month_grid(cursor(2024, 3));
        assert_eq!(grid.len(), 5 + 31);
        assert!(grid[..5].iter().all(CalendarCell::is_blank));
        assert_eq!(grid[5].day_number(), Some(1));
    }

    #[test]
    fn test_month_grid_month_starting_on_sunday() {
        // September 1st 2024 is a Sunday
        let grid = month_grid(cursor(2024, 9));
        assert_eq!(grid.len(), 30);
        assert_eq!(grid[0].day_number(), Some(1));
    }

    #[test]
    fn test_navigation_round_trip() {
        for year in [1, 2023, 2024] {
            for month in 1..=12 {
                let c = cursor(year, month);
                assert_eq!(c.previous().next(), c);
                assert_eq!(c.next().previous(), c);
            }
        }
        assert_eq!(cursor(2024, 1).previous(), cursor(2023, 12));
        assert_eq!(cursor(2024, 12).next(), cursor(2025, 1));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(cursor(2024, 3).label(), "March 2024");
        assert_eq!(month_name(13), "Invalid Month");
    }

    #[test]
    fn test_single_day_event_matches_only_start_date() {
        let e = event("1", "2024-03-10", None);
        let events = vec![e.clone()];

        assert_eq!(events_on_date(date(2024, 3, 10), &events), vec![&e]);
        assert!(events_on_date(date(2024, 3, 11), &events).is_empty());
        assert!(events_on_date(date(2024, 3, 9), &events).is_empty());
    }

    #[test]
    fn test_range_event_matches_inclusive_range() {
        let e = event("1", "2024-03-10", Some("2024-03-12"));
        let events = vec![e.clone()];

        for day in 10..=12 {
            assert_eq!(events_on_date(date(2024, 3, day), &events), vec![&e]);
        }
        assert!(events_on_date(date(2024, 3, 9), &events).is_empty());
        assert!(events_on_date(date(2024, 3, 13), &events).is_empty());
    }

    #[test]
    fn test_equal_start_and_end_behaves_like_single_day() {
        let same_day = event("1", "2024-03-10", Some("2024-03-10"));
        let no_end = event("2", "2024-03-10", None);

        for day in 8..=12 {
            let d = date(2024, 3, day);
            assert_eq!(same_day.occurs_on(d), no_end.occurs_on(d), "day {}", day);
        }
        assert_eq!(events_on_date(date(2024, 3, 10), &[same_day.clone()]).len(), 1);
        assert!(!same_day.is_multi_day());
    }

    #[test]
    fn test_range_spanning_month_boundary() {
        let e = event("1", "2024-02-28", Some("2024-03-02"));
        assert!(e.occurs_on(date(2024, 2, 29)));
        assert!(e.occurs_on(date(2024, 3, 1)));
        assert!(e.occurs_on(date(2024, 3, 2)));
        assert!(!e.occurs_on(date(2024, 3, 3)));
        assert_eq!(e.last_day(), date(2024, 3, 2));
    }

    #[test]
    fn test_events_on_date_keeps_source_order_and_full_set() {
        let events = vec![
            event("a", "2024-03-15", None),
            event("b", "2024-03-01", Some("2024-03-31")),
            event("c", "2024-03-14", None),
            event("d", "2024-03-15", Some("2024-03-16")),
        ];

        let ids: Vec<&str> = events_on_date(date(2024, 3, 15), &events)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_badge_summary_caps_display_only() {
        let events = vec![
            event("a", "2024-03-15", None),
            event("b", "2024-03-15", None),
            event("c", "2024-03-15", None),
        ];
        let matches = events_on_date(date(2024, 3, 15), &events);
        assert_eq!(matches.len(), 3);

        let summary = badge_summary(&matches, 1);
        assert_eq!(summary.shown.len(), 1);
        assert_eq!(summary.shown[0].id, "a");
        assert_eq!(summary.more, 2);
        assert_eq!(summary.more_label().as_deref(), Some("+2 more"));

        let single = badge_summary(&matches[..1], 1);
        assert_eq!(single.more, 0);
        assert_eq!(single.more_label(), None);

        let none = badge_summary(&[], 1);
        assert!(none.shown.is_empty());
        assert_eq!(none.more, 0);
    }

    #[test]
    fn test_selection_survives_month_navigation() {
        let events = vec![
            event("march", "2024-03-15", None),
            event("april", "2024-04-15", None),
        ];

        let start = CalendarSelection::new(date(2024, 3, 1));
        assert_eq!(start.viewed_month, cursor(2024, 3));

        let selected = start.select(date(2024, 3, 15));
        assert_eq!(selected.viewed_month, cursor(2024, 3));

        let april = selected.next_month();
        assert_eq!(april.viewed_month, cursor(2024, 4));
        assert_eq!(april.selected_date, date(2024, 3, 15));
        assert!(!april.viewed_month.contains(april.selected_date));

        let panel: Vec<&str> = events_on_date(april.selected_date, &events)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(panel, vec!["march"]);
    }

    #[test]
    fn test_go_to_today_keeps_selection() {
        let today = date(2024, 3, 20);
        let selection = CalendarSelection::new(today)
            .select(date(2024, 3, 2))
            .previous_month()
            .previous_month();
        assert_eq!(selection.viewed_month, cursor(2024, 1));

        let back = selection.go_to_today(today);
        assert_eq!(back.viewed_month, cursor(2024, 3));
        assert_eq!(back.selected_date, date(2024, 3, 2));
        assert!(back.is_selected(&CalendarCell::day(date(2024, 3, 2))));
        assert!(!back.is_selected(&CalendarCell::blank()));
    }
}
