pub mod use_calendar;
pub mod use_events;
pub mod use_periodic_refresh;
