use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod calendar;
pub mod event_store;

pub use calendar::{
    badge_summary, events_on_date, month_grid, month_name, BadgeSummary, CalendarCell,
    CalendarSelection, MonthCursor,
};
pub use event_store::{EventStore, FetchTicket};

/// Category tag of an event, used for badge styling.
///
/// Tags the console does not know about are kept as `Other` and render with
/// the same style as `General`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Meeting,
    Exam,
    Holiday,
    Training,
    Workshop,
    Conference,
    #[default]
    General,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Exam => "exam",
            EventType::Holiday => "holiday",
            EventType::Training => "training",
            EventType::Workshop => "workshop",
            EventType::Conference => "conference",
            EventType::General => "general",
            EventType::Other(tag) => tag.as_str(),
        }
    }

    /// CSS modifier used for badges; unknown tags fall back to `general`.
    pub fn style_class(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Exam => "exam",
            EventType::Holiday => "holiday",
            EventType::Training => "training",
            EventType::Workshop => "workshop",
            EventType::Conference => "conference",
            EventType::General | EventType::Other(_) => "general",
        }
    }
}

impl From<String> for EventType {
    fn from(tag: String) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "meeting" => EventType::Meeting,
            "exam" => EventType::Exam,
            "holiday" => EventType::Holiday,
            "training" => EventType::Training,
            "workshop" => EventType::Workshop,
            "conference" => EventType::Conference,
            "general" | "" => EventType::General,
            _ => EventType::Other(tag),
        }
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        event_type.as_str().to_string()
    }
}

/// Local time of day attached to an event (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse `HH:MM` or `HH:MM:SS`
    pub fn parse(input: &str) -> Result<Self, EventValidationError> {
        let trimmed = input.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(TimeOfDay)
            .map_err(|_| EventValidationError::InvalidTime(input.to_string()))
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%-I:%M %p"))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EventValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeOfDay::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.0.format("%H:%M:%S").to_string()
    }
}

/// A calendar entry as the console works with it, validated at the API boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub event_type: EventType,
    pub start_date: NaiveDate,
    /// Inclusive last day for multi-day events
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub location: Option<String>,
}

impl Event {
    /// Whether this event is shown on `date`.
    ///
    /// An event always matches its start date. It additionally matches every
    /// date of its range when it has an end date that differs from the start
    /// date; `start_date == end_date` stays a single-day event.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if self.start_date == date {
            return true;
        }
        match self.end_date {
            Some(end) if end != self.start_date => self.start_date <= date && date <= end,
            _ => false,
        }
    }

    /// Last calendar day the event covers
    pub fn last_day(&self) -> NaiveDate {
        match self.end_date {
            Some(end) if end > self.start_date => end,
            _ => self.start_date,
        }
    }

    pub fn is_multi_day(&self) -> bool {
        matches!(self.end_date, Some(end) if end != self.start_date)
    }

    /// Human readable time span, e.g. "9:00 AM - 10:30 AM"
    pub fn time_label(&self) -> String {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => format!("{} - {}", start, end),
            (Some(start), None) => start.to_string(),
            (None, _) => "All day".to_string(),
        }
    }
}

/// Event identifiers arrive as either strings or numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Text(text) => write!(f, "{}", text),
            RawId::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Event exactly as the backend sends it.
///
/// Field names differ between backend versions, so every field accepts the
/// spellings seen in the wild and is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: Option<RawId>,
    #[serde(alias = "event_title", alias = "name")]
    pub title: Option<String>,
    #[serde(alias = "eventType", alias = "type")]
    pub event_type: Option<String>,
    #[serde(alias = "startDate", alias = "event_start_date", alias = "date")]
    pub start_date: Option<String>,
    #[serde(alias = "endDate", alias = "event_end_date")]
    pub end_date: Option<String>,
    #[serde(alias = "startTime", alias = "event_start_time")]
    pub start_time: Option<String>,
    #[serde(alias = "endTime", alias = "event_end_time")]
    pub end_time: Option<String>,
    #[serde(alias = "venue")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventValidationError {
    #[error("event is missing an id")]
    MissingId,
    #[error("event {0} has no title")]
    MissingTitle(String),
    #[error("event {0} has no start date")]
    MissingStartDate(String),
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
    #[error("malformed event record: {0}")]
    Malformed(String),
}

/// Build a calendar date from the `YYYY-MM-DD` prefix of a date or datetime.
///
/// The components are taken verbatim so a value like
/// `2024-03-10T00:00:00.000Z` stays on the 10th whatever the local offset.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, EventValidationError> {
    let invalid = || EventValidationError::InvalidDate(input.to_string());
    let date_part = input.trim().get(..10).ok_or_else(invalid)?;

    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let year = parts[0].parse::<i32>().map_err(|_| invalid())?;
    let month = parts[1].parse::<u32>().map_err(|_| invalid())?;
    let day = parts[2].parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<RawEvent> for Event {
    type Error = EventValidationError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .map(|id| id.to_string())
            .filter(|id| !id.trim().is_empty())
            .ok_or(EventValidationError::MissingId)?;

        let title = non_blank(raw.title)
            .ok_or_else(|| EventValidationError::MissingTitle(id.clone()))?;

        let start_date = non_blank(raw.start_date)
            .ok_or_else(|| EventValidationError::MissingStartDate(id.clone()))
            .and_then(|s| parse_calendar_date(&s))?;

        let end_date = non_blank(raw.end_date)
            .map(|s| parse_calendar_date(&s))
            .transpose()?;
        let start_time = non_blank(raw.start_time)
            .map(|s| TimeOfDay::parse(&s))
            .transpose()?;
        let end_time = non_blank(raw.end_time)
            .map(|s| TimeOfDay::parse(&s))
            .transpose()?;

        Ok(Event {
            id,
            title,
            event_type: raw.event_type.map(EventType::from).unwrap_or_default(),
            start_date,
            end_date,
            start_time,
            end_time,
            location: non_blank(raw.location),
        })
    }
}

/// Decode and validate one untyped record from an events payload
pub fn decode_event(value: serde_json::Value) -> Result<Event, EventValidationError> {
    let raw: RawEvent = serde_json::from_value(value)
        .map_err(|e| EventValidationError::Malformed(e.to_string()))?;
    Event::try_from(raw)
}

/// Validate a fetched batch, keeping every well-formed event in source order
/// and returning the rejections separately so callers can log them.
///
/// Records are decoded one by one, so a record with a wrong JSON type only
/// costs that record.
pub fn decode_event_batch(
    records: Vec<serde_json::Value>,
) -> (Vec<Event>, Vec<EventValidationError>) {
    let mut events = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for record in records {
        match decode_event(record) {
            Ok(event) => events.push(event),
            Err(e) => rejected.push(e),
        }
    }

    (events, rejected)
}

/// `{success, data, message}` envelope used by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unwrap the payload; `success: false` becomes [`FetchError::Rejected`]
    pub fn into_result(self) -> Result<Option<T>, FetchError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(FetchError::Rejected(
                self.message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            ))
        }
    }
}

/// Failure to load events from the backend.
///
/// Variants exist for logging; consumers treat every kind the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("server rejected the request: {0}")]
    Rejected(String),
}

/// Log line forwarded from the browser to the backend log sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_event_type_from_tag() {
        assert_eq!(EventType::from("Exam".to_string()), EventType::Exam);
        assert_eq!(EventType::from(" holiday ".to_string()), EventType::Holiday);
        assert_eq!(EventType::from(String::new()), EventType::General);

        let unknown = EventType::from("orientation".to_string());
        assert_eq!(unknown, EventType::Other("orientation".to_string()));
        assert_eq!(unknown.style_class(), "general");
        assert_eq!(unknown.as_str(), "orientation");
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(parse_calendar_date("2024-03-10").unwrap(), date(2024, 3, 10));
        // Midnight UTC must not slide back a day
        assert_eq!(
            parse_calendar_date("2024-03-10T00:00:00.000Z").unwrap(),
            date(2024, 3, 10)
        );
        assert_eq!(
            parse_calendar_date("2024-03-10T23:30:00-05:00").unwrap(),
            date(2024, 3, 10)
        );

        assert!(parse_calendar_date("2024-02-30").is_err());
        assert!(parse_calendar_date("10/03/2024").is_err());
        assert!(parse_calendar_date("2024-3-1").is_err());
        assert!(parse_calendar_date("").is_err());
    }

    #[test]
    fn test_time_of_day_parse_and_display() {
        let morning = TimeOfDay::parse("09:30").unwrap();
        assert_eq!(morning.to_string(), "9:30 AM");

        let evening = TimeOfDay::parse(" 18:05:00 ").unwrap();
        assert_eq!(evening.to_string(), "6:05 PM");
        assert!(morning < evening);

        assert_eq!(String::from(morning), "09:30:00");
        assert!(TimeOfDay::parse("25:00").is_err());
        assert!(TimeOfDay::parse("noon").is_err());
    }

    #[test]
    fn test_decode_raw_event_with_legacy_field_names() {
        let json = r#"{
            "id": 42,
            "event_title": "Board Exam",
            "eventType": "EXAM",
            "event_start_date": "2024-03-10T00:00:00.000Z",
            "event_end_date": "2024-03-12",
            "event_start_time": "09:00",
            "venue": "  Hall A "
        }"#;

        let raw: RawEvent = serde_json::from_str(json).unwrap();
        let event = Event::try_from(raw).unwrap();

        assert_eq!(event.id, "42");
        assert_eq!(event.title, "Board Exam");
        assert_eq!(event.event_type, EventType::Exam);
        assert_eq!(event.start_date, date(2024, 3, 10));
        assert_eq!(event.end_date, Some(date(2024, 3, 12)));
        assert_eq!(event.start_time.map(|t| t.to_string()), Some("9:00 AM".to_string()));
        assert_eq!(event.end_time, None);
        assert_eq!(event.location.as_deref(), Some("Hall A"));
    }

    #[test]
    fn test_decode_event_batch_drops_malformed_events() {
        let json = r#"[
            {"id": "a", "title": "Staff meeting", "start_date": "2024-03-10"},
            {"id": "b", "title": "No date"},
            {"title": "No id", "start_date": "2024-03-10"},
            {"id": "c", "title": "Bad time", "start_date": "2024-03-10", "start_time": "late"},
            {"id": "d", "title": "Training", "type": "training", "startDate": "2024-03-11", "location": ""}
        ]"#;

        let records: Vec<serde_json::Value> = serde_json::from_str(json).unwrap();
        let (events, rejected) = decode_event_batch(records);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(events[1].location, None);
        assert_eq!(rejected.len(), 3);
        assert!(rejected.contains(&EventValidationError::MissingStartDate("b".to_string())));
        assert!(rejected.contains(&EventValidationError::MissingId));
    }

    #[test]
    fn test_wrongly_typed_record_only_drops_itself() {
        let json = r#"[
            {"id": "a", "title": "Staff meeting", "start_date": "2024-03-10"},
            {"id": "b", "title": 5, "start_date": "2024-03-11"},
            {"id": "c", "title": "Twice dated", "start_date": "2024-03-12", "startDate": "2024-03-13"},
            {"id": "d", "title": "Exam", "start_date": "2024-03-14"}
        ]"#;

        let records: Vec<serde_json::Value> = serde_json::from_str(json).unwrap();
        let (events, rejected) = decode_event_batch(records);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(rejected.len(), 2);
        assert!(rejected
            .iter()
            .all(|e| matches!(e, EventValidationError::Malformed(_))));
    }

    #[test]
    fn test_decode_event_accepts_bare_date_field() {
        let value = serde_json::json!({"id": "a", "title": "T", "date": "2024-03-10"});
        let event = decode_event(value).unwrap();
        assert_eq!(event.start_date, date(2024, 3, 10));
        assert_eq!(event.event_type, EventType::General);
    }

    #[test]
    fn test_event_serializes_with_primary_field_names() {
        let event = Event {
            id: "7".to_string(),
            title: "Science fair".to_string(),
            event_type: EventType::Workshop,
            start_date: date(2024, 5, 1),
            end_date: None,
            start_time: TimeOfDay::parse("13:00").ok(),
            end_time: None,
            location: None,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], "workshop");
        assert_eq!(value["start_date"], "2024-05-01");
        assert_eq!(value["start_time"], "13:00:00");

        // What the server sends must be readable as a raw event again
        let raw: RawEvent = serde_json::from_value(value).unwrap();
        assert_eq!(Event::try_from(raw).unwrap(), event);
    }

    #[test]
    fn test_time_label() {
        let mut event = Event {
            id: "1".to_string(),
            title: "Orientation".to_string(),
            event_type: EventType::General,
            start_date: date(2024, 3, 10),
            end_date: None,
            start_time: None,
            end_time: None,
            location: None,
        };
        assert_eq!(event.time_label(), "All day");

        event.start_time = TimeOfDay::parse("09:00").ok();
        assert_eq!(event.time_label(), "9:00 AM");

        event.end_time = TimeOfDay::parse("10:30").ok();
        assert_eq!(event.time_label(), "9:00 AM - 10:30 AM");
    }

    #[test]
    fn test_envelope_into_result() {
        let ok: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(ok.into_result().unwrap(), Some(vec![1, 2]));

        let empty: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(empty.into_result().unwrap(), None);

        let rejected: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": false, "message": "token expired"}"#).unwrap();
        assert_eq!(
            rejected.into_result(),
            Err(FetchError::Rejected("token expired".to_string()))
        );
    }
}
