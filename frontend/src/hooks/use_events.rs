use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use shared::{Event, EventStore, FetchError, FetchTicket};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Yew-side wrapper so the store can live in a reducer
#[derive(Clone, Default, PartialEq)]
pub struct EventStoreState(EventStore);

impl Deref for EventStoreState {
    type Target = EventStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub enum EventStoreAction {
    Begin(FetchTicket),
    Finish(FetchTicket, Result<Vec<Event>, FetchError>),
}

impl Reducible for EventStoreState {
    type Action = EventStoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.0.clone();
        let applied = match action {
            EventStoreAction::Begin(ticket) => store.begin(ticket),
            EventStoreAction::Finish(ticket, result) => store.finish(ticket, result),
        };

        // Superseded requests must not trigger a re-render
        if applied {
            Rc::new(Self(store))
        } else {
            self
        }
    }
}

/// How a finished request is reported in the logs
#[derive(Debug, PartialEq)]
enum FetchOutcome<'a> {
    Loaded(usize),
    /// Cancelled on purpose, either superseded or unmounted
    Aborted,
    Failed(&'a FetchError),
}

impl<'a> FetchOutcome<'a> {
    fn of(result: &'a Result<Vec<Event>, FetchError>, aborted: bool) -> Self {
        match result {
            Ok(events) => FetchOutcome::Loaded(events.len()),
            Err(_) if aborted => FetchOutcome::Aborted,
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

pub struct UseEventsResult {
    pub store: UseReducerHandle<EventStoreState>,
    pub refresh: Callback<()>,
}

/// Loads upcoming events on mount and whenever `refresh` is emitted.
///
/// Only one request is live at a time: starting a new fetch aborts the
/// previous one, and a late answer from an aborted request is discarded by
/// the store. Unmounting aborts whatever is still in flight.
#[hook]
pub fn use_events(api_client: &ApiClient, limit: u32) -> UseEventsResult {
    let store = use_reducer(EventStoreState::default);
    let next_ticket = use_mut_ref(FetchTicket::first);
    let in_flight: Rc<RefCell<Option<AbortController>>> = use_mut_ref(|| None);

    let refresh = {
        let dispatcher = store.dispatcher();
        let next_ticket = next_ticket.clone();
        let in_flight = in_flight.clone();

        use_callback((api_client.clone(), limit), move |_: (), (api_client, limit)| {
            let ticket = {
                let mut next = next_ticket.borrow_mut();
                let ticket = *next;
                *next = ticket.next();
                ticket
            };

            if let Some(previous) = in_flight.borrow_mut().take() {
                Logger::debug_with_component("use-events", "Aborting superseded events request");
                previous.abort();
            }
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            *in_flight.borrow_mut() = controller;

            dispatcher.dispatch(EventStoreAction::Begin(ticket));

            let api_client = api_client.clone();
            let limit = *limit;
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let result = api_client.get_upcoming_events(limit, signal.as_ref()).await;
                let aborted = signal.as_ref().map_or(false, AbortSignal::aborted);
                match FetchOutcome::of(&result, aborted) {
                    FetchOutcome::Loaded(count) => Logger::debug_with_component(
                        "use-events",
                        &format!("Loaded {} upcoming events", count),
                    ),
                    FetchOutcome::Aborted => Logger::debug_with_component(
                        "use-events",
                        "Events request aborted before it finished",
                    ),
                    // A body we cannot read points at a backend contract change
                    FetchOutcome::Failed(e @ FetchError::Decode(_)) => Logger::error_with_component(
                        "use-events",
                        &format!("Failed to fetch upcoming events: {}", e),
                    ),
                    FetchOutcome::Failed(e) => Logger::warn_with_component(
                        "use-events",
                        &format!("Failed to fetch upcoming events: {}", e),
                    ),
                }
                dispatcher.dispatch(EventStoreAction::Finish(ticket, result));
            });
        })
    };

    // Initial load, and a reload when the client or limit changes
    {
        let refresh = refresh.clone();
        use_effect_with((api_client.clone(), limit), move |_| {
            refresh.emit(());
            || ()
        });
    }

    // Abort the in-flight request on unmount
    {
        let in_flight = in_flight.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(controller) = in_flight.borrow_mut().take() {
                    controller.abort();
                }
            }
        });
    }

    UseEventsResult { store, refresh }
}
