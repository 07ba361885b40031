//! Defines the mutable, reactive state for the application's UI.

use api::prefs::feature_flags::FeatureFlags;
use api::prefs::user_settings::{SettingsChange, UserSettings};
use api::user::User;
use dioxus::prelude::*;

use crate::dialogs::DialogKind;
use crate::street::Street;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Every field is a `Signal`, so components re-render when the part they
/// read changes. Writes go through the action methods below.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Symbolic name of the open dialog, e.g. `"SAVE_AS_IMAGE"`. `None` when
    /// no dialog is open. Kept as text so unknown names reach the router.
    pub active_dialog: Signal<Option<String>>,
    pub settings: Signal<UserSettings>,
    pub flags: Signal<FeatureFlags>,
    pub street: Signal<Street>,
    /// `None` until the user signs in.
    pub user: Signal<Option<User>>,
    pub offline: Signal<bool>,
}

impl AppStateMut {
    pub fn show_dialog(&mut self, kind: DialogKind) {
        self.show_dialog_named(kind.name());
    }

    pub fn show_dialog_named(&mut self, name: &str) {
        self.active_dialog.set(Some(name.to_string()));
    }

    pub fn clear_dialog(&mut self) {
        self.active_dialog.set(None);
    }

    /// Replaces the current street, e.g. once a saved street has been fetched.
    pub fn load_street(&mut self, street: Street) {
        dioxus_logger::tracing::info!("loaded street {}", street.id.as_deref().unwrap_or("(unsaved)"));
        self.street.set(street);
    }

    pub fn set_settings(&mut self, change: SettingsChange) {
        self.settings.with_mut(|settings| {
            settings.apply(change);
        });
    }
}
