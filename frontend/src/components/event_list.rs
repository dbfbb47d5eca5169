use shared::Event;
use yew::prelude::*;

use crate::services::date_utils::format_event_dates;

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub events: Vec<Event>,
    pub empty_message: AttrValue,
    /// Show the date range next to each entry
    #[prop_or(true)]
    pub show_dates: bool,
}

#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    if props.events.is_empty() {
        return html! {
            <div class="event-list-empty">{props.empty_message.clone()}</div>
        };
    }

    html! {
        <ul class="event-list">
            {for props.events.iter().map(|event| html! {
                <EventItem
                    key={event.id.clone()}
                    event={event.clone()}
                    show_dates={props.show_dates}
                />
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct EventItemProps {
    pub event: Event,
    pub show_dates: bool,
}

#[function_component(EventItem)]
pub fn event_item(props: &EventItemProps) -> Html {
    let event = &props.event;

    html! {
        <li class={classes!("event-item", event.event_type.style_class())}>
            <div class="event-item-header">
                <span class="event-title">{&event.title}</span>
                <span class={classes!("event-type-tag", event.event_type.style_class())}>
                    {event.event_type.as_str().to_string()}
                </span>
            </div>
            <div class="event-item-meta">
                {if props.show_dates {
                    html! { <span class="event-dates">{format_event_dates(event)}</span> }
                } else {
                    html! {}
                }}
                <span class="event-time">{event.time_label()}</span>
                {if let Some(location) = &event.location {
                    html! { <span class="event-location">{location}</span> }
                } else {
                    html! {}
                }}
            </div>
        </li>
    }
}
