use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::pico::Modal;
use crate::hooks::use_close_dialog::use_close_dialog;

#[component]
pub fn SignInDialog() -> Element {
    let close = use_close_dialog();
    let app_state = use_context::<AppState>();
    let sign_in_url = format!("{}v1/auth/sign-in", app_state.api.root());

    rsx! {
        Modal {
            title: "Sign in",
            on_close: close,
            p { "Sign in to save your streets, attach metadata and share them with others." }
            a {
                role: "button",
                href: "{sign_in_url}",
                "Continue to sign in"
            }
        }
    }
}
