use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Modal;

/// Shown in place of a dialog that could not be found or failed to render.
/// Closing it calls `reset`, which clears the router's error state.
#[component]
pub fn ErrorDialog(reset: EventHandler<()>, details: Option<String>) -> Element {
    rsx! {
        Modal {
            title: "Oops!",
            on_close: reset,
            footer: rsx! {
                Button { on_click: move |_| reset.call(()), "Close" }
            },
            p { "Something went wrong and this dialog could not be shown." }
            p {
                small { "Please try again. If it keeps happening, reload the page." }
            }
            if let Some(message) = details {
                details {
                    summary { "Details" }
                    code { "{message}" }
                }
            }
        }
    }
}
