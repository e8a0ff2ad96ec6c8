#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::size::rem;

use crate::components::InvoiceForm;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    // AppConfig is provided by the launcher in main.rs.
    let config = use_context::<AppConfig>();
    let palette = use_context_provider(|| {
        config.palette().unwrap_or_else(|err| {
            tracing::warn!("{:#}, falling back to the light theme", err);
            ThemePalette::default_light()
        })
    });
    let state = use_context_provider(|| Signal::new(AppState::from_config(&config)));

    let title = config.app.title.clone();
    let language = state.read().language.clone();
    let background = palette.background.clone();
    let foreground = palette.foreground.clone();
    let padding = rem(24.0);

    rsx! {
        div {
            lang: "{language}",
            style: "min-height: 100vh; padding: {padding}; background-color: {background}; color: {foreground}; font-family: sans-serif;",
            h1 { "{title}" }
            InvoiceForm {}
        }
    }
}
