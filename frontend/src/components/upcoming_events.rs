use shared::Event;
use yew::prelude::*;

use super::event_list::EventList;

#[derive(Properties, PartialEq)]
pub struct UpcomingEventsProps {
    pub events: Vec<Event>,
    pub loading: bool,
    pub on_refresh: Callback<()>,
}

/// Upcoming events panel. A failed load renders exactly like an empty one.
#[function_component(UpcomingEvents)]
pub fn upcoming_events(props: &UpcomingEventsProps) -> Html {
    let onclick = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <section class="upcoming-events">
            <div class="upcoming-header">
                <h4>{"Upcoming Events"}</h4>
                <button class="refresh-button" {onclick}>
                    {"Refresh"}
                </button>
            </div>
            {if props.loading {
                html! { <div class="loading-placeholder">{"Loading events..."}</div> }
            } else {
                html! {
                    <EventList events={props.events.clone()} empty_message="No upcoming events" />
                }
            }}
        </section>
    }
}
