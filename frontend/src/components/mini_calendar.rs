use shared::events_on_date;
use yew::prelude::*;

use super::calendar::Calendar;
use super::event_list::EventList;
use super::upcoming_events::UpcomingEvents;
use crate::hooks::use_calendar::use_calendar;
use crate::hooks::use_events::use_events;
use crate::hooks::use_periodic_refresh::use_periodic_refresh;
use crate::services::api::ApiClient;
use crate::services::date_utils::{format_date_for_display, today};

#[derive(Properties, PartialEq)]
pub struct MiniCalendarProps {
    pub api_client: ApiClient,
    pub upcoming_limit: u32,
    /// Refresh the upcoming list on a timer owned by this widget
    #[prop_or_default]
    pub refresh_interval_ms: Option<u32>,
}

/// Month grid with event badges, a panel for the selected date and the list
/// of upcoming events.
///
/// The grid is drawn from local date math alone and never waits on the
/// events request.
#[function_component(MiniCalendar)]
pub fn mini_calendar(props: &MiniCalendarProps) -> Html {
    let today = today();
    let calendar = use_calendar(today);
    let events = use_events(&props.api_client, props.upcoming_limit);
    use_periodic_refresh(props.refresh_interval_ms, events.refresh.clone());

    let selection = calendar.selection;
    let all_events = events.store.events().to_vec();

    let selected_events: Vec<_> = events_on_date(selection.selected_date, &all_events)
        .into_iter()
        .cloned()
        .collect();
    let upcoming: Vec<_> = events.store.upcoming_sorted().into_iter().cloned().collect();

    html! {
        <div class="mini-calendar">
            <div class="calendar-header">
                <button
                    class="nav-button"
                    onclick={calendar.actions.prev_month.clone()}
                    title="Previous Month"
                >
                    {"◀"}
                </button>
                <h3 class="calendar-title">{selection.viewed_month.label()}</h3>
                <button
                    class="nav-button"
                    onclick={calendar.actions.next_month.clone()}
                    title="Next Month"
                >
                    {"▶"}
                </button>
                <button class="today-button" onclick={calendar.actions.go_to_today.clone()}>
                    {"Today"}
                </button>
            </div>

            <Calendar
                month={selection.viewed_month}
                today={today}
                selected_date={selection.selected_date}
                events={all_events}
                on_select_date={calendar.actions.select_date.clone()}
            />

            <section class="selected-date-panel">
                <h4>{format_date_for_display(selection.selected_date)}</h4>
                <EventList
                    events={selected_events}
                    empty_message="No events on this day"
                    show_dates={false}
                />
            </section>

            <UpcomingEvents
                events={upcoming}
                loading={events.store.is_loading()}
                on_refresh={events.refresh.clone()}
            />
        </div>
    }
}
