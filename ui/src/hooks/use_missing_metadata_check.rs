//! Prompts for street metadata the first time, per session, that a signed-in
//! user is on a street without any.

use dioxus::prelude::*;
use serde_json::Value;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::dialogs::DialogKind;
use crate::session::SessionState;

/// Decides whether to show the prompt for a fetched extension. Only a
/// missing extension consumes the session's one prompt.
pub fn should_prompt(extension: Option<&Value>, session: &SessionState) -> bool {
    extension.is_none() && session.claim_missing_metadata_prompt()
}

/// Checks the current street whenever the street or the user changes.
/// Lookup failures count as "no metadata" and never surface to the user.
pub fn use_missing_metadata_check() {
    let app_state = use_context::<AppState>();
    let session = use_context::<SessionState>();
    let store = use_context::<AppStateMut>();

    let _ = use_resource(move || {
        let street_id = store.street.read().id.clone();
        let signed_in = store.user.read().is_some();
        let api = app_state.api.clone();
        let session = session.clone();
        let mut store = store;
        async move {
            let Some(street_id) = street_id.filter(|_| signed_in) else {
                return;
            };
            if session.missing_metadata_prompted() {
                return;
            }
            let extension = api.street_extension(&street_id).await;
            if should_prompt(extension.as_ref(), &session) {
                dioxus_logger::tracing::info!("street {} has no metadata", street_id);
                store.show_dialog(DialogKind::MetadataMissing);
            }
        }
    });
}
