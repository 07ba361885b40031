use dioxus::prelude::*;

use super::MenuEntry;
use super::MenuKind;
use super::MenuLayout;
use crate::app_state_mut::AppStateMut;
use crate::dialogs::DialogKind;
use crate::hooks::use_missing_metadata_check::use_missing_metadata_check;

/// The top navigation bar. Dropdown buttons are reported through
/// `on_menu_dropdown_click`; the parent decides what to show.
#[component]
pub fn MenuBar(on_menu_dropdown_click: EventHandler<MenuKind>) -> Element {
    let store = use_context::<AppStateMut>();
    use_missing_metadata_check();

    let layout = MenuLayout::new(
        store.user.read().as_ref(),
        *store.offline.read(),
        store.flags.read().business_plan,
    );

    rsx! {
        nav {
            class: "menu-bar",
            ul {
                for entry in layout.left {
                    MenuBarItem { entry, on_menu_dropdown_click }
                }
            }
            ul {
                for entry in layout.right {
                    MenuBarItem { entry, on_menu_dropdown_click }
                }
            }
        }
    }
}

#[component]
fn MenuBarItem(entry: MenuEntry, on_menu_dropdown_click: EventHandler<MenuKind>) -> Element {
    let mut store = use_context::<AppStateMut>();
    let label = entry.label();

    let item = match entry {
        MenuEntry::Title => rsx! {
            strong { "{label}" }
        },
        MenuEntry::NewStreet => rsx! {
            a { href: "/new", target: "_blank", "{label}" }
        },
        MenuEntry::Dropdown(kind) => rsx! {
            a {
                href: "#",
                "aria-haspopup": "menu",
                onclick: move |evt| {
                    evt.prevent_default();
                    on_menu_dropdown_click.call(kind);
                },
                "{label}"
            }
        },
        MenuEntry::Avatar(_) => rsx! {
            a {
                href: "#",
                class: "menu-avatar",
                "aria-haspopup": "menu",
                onclick: move |evt| {
                    evt.prevent_default();
                    on_menu_dropdown_click.call(MenuKind::Identity);
                },
                "{label}"
            }
        },
        MenuEntry::Dialog(kind) => rsx! {
            a {
                href: "#",
                onclick: move |evt| {
                    evt.prevent_default();
                    store.show_dialog(kind);
                },
                "{label}"
            }
        },
        MenuEntry::SignIn => rsx! {
            button {
                class: "outline",
                onclick: move |_| store.show_dialog(DialogKind::SignIn),
                "{label}"
            }
        },
    };

    rsx! {
        li { {item} }
    }
}
