// Text field for the number and the convert button
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn NumberInput(state: Signal<AppState>, palette: ThemePalette) -> Element {
    let mut state = state;
    let value = state.read().input.clone();

    rsx! {
        form {
            class: "number-input",
            prevent_default: "onsubmit",
            onsubmit: move |_| state.write().convert(),
            label { style: "font-weight: bold; display: block; margin-bottom: 6px;", "Digite o número:" }
            div {
                style: "display: flex; gap: 10px;",
                input {
                    r#type: "text",
                    placeholder: "Ex: 1234,56",
                    value: "{value}",
                    style: "flex: 1; font-size: 16px; padding: 10px;",
                    oninput: move |evt| state.write().input = evt.value(),
                }
                button {
                    r#type: "submit",
                    style: "font-size: 16px; font-weight: bold; padding: 10px 20px; border: none; border-radius: 6px; \
                            background-color: {palette.primary}; color: {palette.on_primary};",
                    "Converter"
                }
            }
        }
    }
}
