use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::header::Header;
use components::mini_calendar::MiniCalendar;
use config::FrontendConfig;
use services::api::ApiClient;
use services::logging::Logger;
use services::session::SessionContext;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| FrontendConfig::from_build_env());
    let session = use_memo((), |_| SessionContext::from_local_storage());
    let api_client = {
        let config = config.clone();
        let session = session.clone();
        use_memo((), move |_| ApiClient::new(config.api_base_url.clone(), (*session).clone()))
    };

    use_effect_with((), {
        let api_client = api_client.clone();
        move |_| {
            Logger::info_with_component(
                "app",
                &format!("Event console started against {}", api_client.base_url()),
            );
            || ()
        }
    });

    html! {
        <div class="app">
            <Header title="Events Dashboard" signed_in={session.is_authenticated()} />
            <main class="container">
                <MiniCalendar
                    api_client={(*api_client).clone()}
                    upcoming_limit={config.upcoming_limit}
                    refresh_interval_ms={config.refresh_interval_ms}
                />
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
