use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Emit `refresh_fn` every `interval_ms` while the component is mounted.
///
/// `None` disables the timer. The interval is dropped, and so cancelled, on
/// unmount or whenever the interval or callback changes.
#[hook]
pub fn use_periodic_refresh(interval_ms: Option<u32>, refresh_fn: Callback<()>) {
    use_effect_with((interval_ms, refresh_fn), |(interval_ms, refresh_fn)| {
        let interval = interval_ms.map(|ms| {
            Logger::debug_with_component(
                "periodic-refresh-hook",
                &format!("Refreshing upcoming events every {}ms", ms),
            );
            let refresh_fn = refresh_fn.clone();
            Interval::new(ms, move || refresh_fn.emit(()))
        });

        move || {
            if let Some(interval) = interval {
                drop(interval);
                Logger::debug_with_component("periodic-refresh-hook", "Periodic refresh stopped");
            }
        }
    });
}
