#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{ModeSelector, NumberInput, ResultPane};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let palette = ThemePalette::for_theme(config.app.theme);
    let state = use_signal(|| AppState::new(&config));

    rsx! {
        div {
            style: "font-family: sans-serif; min-height: 100vh; box-sizing: border-box; padding: 20px; \
                    background-color: {palette.background}; color: {palette.foreground};",
            header {
                h1 { style: "font-size: 28px; margin: 0;", "numextenso" }
                p {
                    style: "color: {palette.muted}; margin-top: 4px;",
                    "Converte números em extenso em português brasileiro"
                }
            }
            NumberInput { state, palette: palette.clone() }
            ModeSelector { state }
            ResultPane { state, palette: palette.clone() }
        }
    }
}
