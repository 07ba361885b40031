use dioxus::prelude::*;

use super::dropdown_entries;
use super::DropdownAction;
use super::MenuKind;
use crate::app_state_mut::AppStateMut;

/// The open dropdown of the menu bar. Picking an entry, or clicking outside
/// the menu, closes it.
#[component]
pub fn MenuDropdown(kind: MenuKind, on_close: EventHandler<()>) -> Element {
    let mut store = use_context::<AppStateMut>();

    rsx! {
        div {
            class: "menu-backdrop",
            onclick: move |_| on_close.call(()),
        }
        article {
            class: "custom-dropdown-menu",
            for action in dropdown_entries(kind) {
                a {
                    key: "{action.label()}",
                    class: "custom-dropdown-item",
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        match action {
                            DropdownAction::Open(dialog) => store.show_dialog(dialog),
                            DropdownAction::SignOut => {
                                dioxus_logger::tracing::info!("signing out");
                                store.user.set(None);
                            }
                        }
                        on_close.call(());
                    },
                    "{action.label()}"
                }
            }
        }
    }
}
