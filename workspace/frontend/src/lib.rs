use chrono::Local;
use predict::{Panel, ShellEvent};
use yew::prelude::*;

mod bokeh;
mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use crate::common::error::ErrorBanner;
use crate::common::loading::Loading;
use components::layout::layout::Layout;
use components::prediction_form::PredictionForm;
use components::results::view::PredictionResults;
use hooks::use_prediction_shell;

#[function_component(PredictionPage)]
fn prediction_page() -> Html {
    let shell = use_prediction_shell();
    let today = Local::now().date_naive();

    let on_submit = {
        let shell = shell.clone();
        Callback::from(move |selection| {
            shell.dispatch(ShellEvent::Submit {
                selection,
                today: Local::now().date_naive(),
            });
        })
    };

    let panel = match shell.0.panel() {
        Panel::Idle => html! {},
        Panel::Loading => html! { <Loading text={"Memproses prediksi..."} /> },
        Panel::Error(message) => html! { <ErrorBanner message={message.to_string()} /> },
        Panel::Result(response) => html! { <PredictionResults response={response.clone()} /> },
    };

    html! {
        <>
            <PredictionForm {today} disabled={!shell.0.input_enabled()} {on_submit} />
            { panel }
        </>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Layout>
            <PredictionPage />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== BBRI Stock Prediction Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Predict endpoint: {}", settings.api_url(api_client::prediction::PREDICT_ENDPOINT));

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
