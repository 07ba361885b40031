use api::prefs::feature_flags::FeatureFlag;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::Checkbox;
use crate::components::pico::Modal;
use crate::hooks::use_close_dialog::use_close_dialog;

/// Lets the flags of the running session be flipped by hand. Changes last
/// until reload; the environment is not written back.
#[component]
pub fn FeatureFlagDialog() -> Element {
    let close = use_close_dialog();
    let mut store = use_context::<AppStateMut>();
    let flags = *store.flags.read();

    rsx! {
        Modal {
            title: "Feature flags",
            on_close: close,
            fieldset {
                for flag in FeatureFlag::iter() {
                    Checkbox {
                        key: "{flag.name()}",
                        checked: flags.get(flag),
                        on_change: move |checked: bool| {
                            dioxus_logger::tracing::info!("feature flag {} set to {}", flag.name(), checked);
                            store.flags.with_mut(|flags| flags.set(flag, checked));
                        },
                        code { "{flag.name()}" }
                        " {flag.description()}"
                    }
                }
            }
        }
    }
}
