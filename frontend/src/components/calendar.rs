use chrono::NaiveDate;
use shared::{badge_summary, events_on_date, month_grid, Event, MonthCursor};
use yew::prelude::*;

/// Badges drawn inside a day cell before collapsing into "+N more"
pub const MAX_BADGES_PER_DAY: usize = 1;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub month: MonthCursor,
    pub today: NaiveDate,
    pub selected_date: NaiveDate,
    pub events: Vec<Event>,
    pub on_select_date: Callback<NaiveDate>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_days = month_grid(props.month).into_iter().map(|cell| {
        let Some(date) = cell.date else {
            return html! { <div class="calendar-day empty"></div> };
        };

        let day_events = events_on_date(date, &props.events);
        let summary = badge_summary(&day_events, MAX_BADGES_PER_DAY);

        let day_class = classes!(
            "calendar-day",
            (date == props.today).then_some("today"),
            (date == props.selected_date).then_some("selected"),
            (!day_events.is_empty()).then_some("has-events"),
        );

        let onclick = {
            let on_select_date = props.on_select_date.clone();
            Callback::from(move |_: MouseEvent| on_select_date.emit(date))
        };

        html! {
            <button type="button" class={day_class} {onclick}>
                <div class="day-number">{cell.day_number().unwrap_or_default()}</div>
                <div class="day-events">
                    {for summary.shown.iter().map(|event| html! {
                        <div
                            class={classes!("event-badge", event.event_type.style_class())}
                            title={format!("{} ({})", event.title, event.time_label())}
                        >
                            {&event.title}
                        </div>
                    })}
                    {if let Some(more) = summary.more_label() {
                        html! { <div class="event-more">{more}</div> }
                    } else {
                        html! {}
                    }}
                </div>
            </button>
        }
    });

    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                {for WEEKDAYS.iter().map(|day| html! { <div class="weekday">{*day}</div> })}
            </div>
            <div class="calendar-grid">
                {for calendar_days}
            </div>
        </div>
    }
}
