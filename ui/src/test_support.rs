//! Drives components in a headless `VirtualDom` with the app contexts in place.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use api::prefs::feature_flags::FeatureFlags;
use api::prefs::user_settings::UserSettings;
use api::user::User;
use api::ApiClient;
use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::session::SessionState;
use crate::street::Street;

/// Nothing listens here, so every request fails right away.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1/api/";

const ROUND: Duration = Duration::from_millis(20);
const DEADLINE: Duration = Duration::from_secs(5);

/// Seed values for the mutable store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestState {
    pub street: Street,
    pub user: Option<User>,
    pub active_dialog: Option<String>,
    pub offline: bool,
}

/// Hands the store created inside the dom back to the test.
#[derive(Clone, Default)]
pub struct StoreSlot(Rc<Cell<Option<AppStateMut>>>);

impl PartialEq for StoreSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl StoreSlot {
    pub fn fill(&self, store: AppStateMut) {
        self.0.set(Some(store));
    }

    pub fn get(&self) -> AppStateMut {
        self.0.get().expect("the harness has not rendered yet")
    }
}

/// Provides `AppState`, `SessionState` and `AppStateMut` the way `AppBody`
/// does, against an API that is never reachable.
pub fn use_test_contexts(state: TestState) -> AppStateMut {
    use_context_provider(|| AppState::new(ApiClient::new(UNREACHABLE_API)));
    use_context_provider(SessionState::new);

    let TestState {
        street,
        user,
        active_dialog,
        offline,
    } = state;
    let active_dialog = use_signal(move || active_dialog);
    let settings = use_signal(UserSettings::default);
    let flags = use_signal(FeatureFlags::default);
    let street = use_signal(move || street);
    let user = use_signal(move || user);
    let offline = use_signal(move || offline);

    use_context_provider(|| AppStateMut {
        active_dialog,
        settings,
        flags,
        street,
        user,
        offline,
    })
}

/// Polls tasks, runs effects and rerenders until nothing happens for a round.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..10 {
        let idle = tokio::time::timeout(ROUND, dom.wait_for_work()).await.is_err();
        dom.render_immediate(&mut NoOpMutations);
        if idle {
            return;
        }
    }
}

/// Keeps the dom running until `done` holds. Returns `false` on timeout.
pub async fn run_until(dom: &mut VirtualDom, mut done: impl FnMut(&VirtualDom) -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + DEADLINE;
    while tokio::time::Instant::now() < deadline {
        if done(dom) {
            return true;
        }
        let _ = tokio::time::timeout(ROUND, dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }
    done(dom)
}

/// The active dialog name, read from inside the dom's runtime.
pub fn active_dialog(dom: &VirtualDom, store: AppStateMut) -> Option<String> {
    dom.in_runtime(|| store.active_dialog.peek().clone())
}
