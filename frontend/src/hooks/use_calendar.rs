use std::rc::Rc;

use chrono::NaiveDate;
use shared::CalendarSelection;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Clone, Copy, PartialEq)]
pub struct CalendarState(pub CalendarSelection);

pub enum CalendarAction {
    PreviousMonth,
    NextMonth,
    Today(NaiveDate),
    Select(NaiveDate),
}

impl Reducible for CalendarState {
    type Action = CalendarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let selection = self.0;
        let next = match action {
            CalendarAction::PreviousMonth => selection.previous_month(),
            CalendarAction::NextMonth => selection.next_month(),
            CalendarAction::Today(today) => selection.go_to_today(today),
            CalendarAction::Select(date) => selection.select(date),
        };
        Rc::new(CalendarState(next))
    }
}

pub struct UseCalendarResult {
    pub selection: CalendarSelection,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub go_to_today: Callback<MouseEvent>,
    pub select_date: Callback<NaiveDate>,
}

/// Viewed month and selected date, both starting at `today`
#[hook]
pub fn use_calendar(today: NaiveDate) -> UseCalendarResult {
    let state = use_reducer(move || CalendarState(CalendarSelection::new(today)));

    // Navigation callbacks
    let prev_month = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: MouseEvent, _| dispatcher.dispatch(CalendarAction::PreviousMonth))
    };

    let next_month = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: MouseEvent, _| dispatcher.dispatch(CalendarAction::NextMonth))
    };

    let go_to_today = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: MouseEvent, _| {
            dispatcher.dispatch(CalendarAction::Today(date_utils::today()))
        })
    };

    let select_date = {
        let dispatcher = state.dispatcher();
        use_callback((), move |date: NaiveDate, _| dispatcher.dispatch(CalendarAction::Select(date)))
    };

    UseCalendarResult {
        selection: state.0,
        actions: UseCalendarActions {
            prev_month,
            next_month,
            go_to_today,
            select_date,
        },
    }
}
