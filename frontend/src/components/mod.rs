pub mod calendar;
pub mod event_list;
pub mod mini_calendar;
pub mod header;
pub mod upcoming_events;
