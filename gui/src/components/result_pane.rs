// Shows the converted text, or the error in the theme's error colour
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn ResultPane(state: Signal<AppState>, palette: ThemePalette) -> Element {
    let outcome = state.read().outcome.clone();
    let (text, color) = match &outcome {
        Some(outcome) if outcome.is_error() => (outcome.text().to_string(), palette.error.clone()),
        Some(outcome) => (outcome.text().to_string(), palette.foreground.clone()),
        None => (String::new(), palette.muted.clone()),
    };

    rsx! {
        section {
            class: "result-pane",
            style: "background-color: {palette.surface}; border-radius: 8px; padding: 15px; margin-top: 12px; min-height: 120px;",
            h2 { style: "font-size: 14px; margin: 0 0 8px 0;", "Resultado:" }
            p {
                style: "color: {color}; font-size: 15px; white-space: pre-wrap; margin: 0;",
                "{text}"
            }
        }
    }
}
