use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod hooks;
pub mod router;
pub mod settings;
pub mod state;
pub mod ui;

use api_client::ApiClient;
use router::{switch, Route};
use settings::AppSettings;
use ui::toast::ToastProvider;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub settings: AppSettings,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let client = use_memo(props.settings.clone(), |settings| ApiClient::new(settings.clone()));

    html! {
        <ContextProvider<ApiClient> context={(*client).clone()}>
            <ToastProvider duration_ms={props.settings.toast_duration_ms}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<ApiClient>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let settings = AppSettings::from_environment();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Trust & NGO Manager Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Backend base URL: {}", settings.backend_url);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::with_props(AppProps { settings }).render();
    log::info!("Application initialized successfully");
}
