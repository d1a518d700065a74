// Radio controls for the conversion mode, plus the feminine toggle
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::ConversionMode;

use crate::state::app_state::AppState;

#[component]
pub fn ModeSelector(state: Signal<AppState>) -> Element {
    let mut state = state;
    let current = state.read().mode;
    let feminine = state.read().feminine;

    rsx! {
        fieldset {
            class: "mode-selector",
            style: "border: none; padding: 0; margin: 12px 0;",
            legend { style: "font-weight: bold; margin-bottom: 8px;", "Tipo de conversão:" }
            div {
                style: "display: flex; gap: 20px; flex-wrap: wrap;",
                for mode in ConversionMode::ALL {
                    label {
                        key: "{mode:?}",
                        input {
                            r#type: "radio",
                            name: "mode",
                            checked: current == mode,
                            onchange: move |_| state.write().set_mode(mode),
                        }
                        " "
                        {mode.label()}
                    }
                }
            }
            label {
                style: "display: block; margin-top: 10px;",
                input {
                    r#type: "checkbox",
                    checked: feminine,
                    onchange: move |_| state.write().toggle_feminine(),
                }
                " Feminino (primeira, segunda...)"
            }
        }
    }
}
