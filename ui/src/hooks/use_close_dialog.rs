use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// A callback that closes whichever dialog is open.
pub fn use_close_dialog() -> Callback<()> {
    let mut store = use_context::<AppStateMut>();
    use_callback(move |_: ()| store.clear_dialog())
}
