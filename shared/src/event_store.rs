use crate::{Event, FetchError};

/// Identifies one fetch of the upcoming-events list.
///
/// Tickets increase monotonically; only the newest one may update the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn first() -> Self {
        FetchTicket(1)
    }

    pub fn next(&self) -> Self {
        FetchTicket(self.0 + 1)
    }
}

/// In-memory list of upcoming events plus the state of the latest fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
    loading: bool,
    latest: Option<FetchTicket>,
    last_fetch_failed: bool,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a fetch started. A ticket older than the latest one is
    /// ignored and `false` is returned.
    pub fn begin(&mut self, ticket: FetchTicket) -> bool {
        if self.latest.is_some_and(|latest| ticket <= latest) {
            return false;
        }
        self.latest = Some(ticket);
        self.loading = true;
        true
    }

    /// Apply the outcome of a fetch.
    ///
    /// Results for anything but the latest ticket are dropped. A successful
    /// result replaces the list; a failure keeps whatever was loaded before.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<Vec<Event>, FetchError>) -> bool {
        if self.latest != Some(ticket) {
            return false;
        }

        self.loading = false;
        match result {
            Ok(events) => {
                self.events = events;
                self.last_fetch_failed = false;
            }
            Err(_) => {
                self.last_fetch_failed = true;
            }
        }
        true
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_fetch_failed(&self) -> bool {
        self.last_fetch_failed
    }

    pub fn latest_ticket(&self) -> Option<FetchTicket> {
        self.latest
    }

    /// Events ordered for the upcoming list: by start date, then start time
    /// (all-day first), ties kept in source order.
    pub fn upcoming_sorted(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by_key(|event| (event.start_date, event.start_time));
        sorted
    }
}
