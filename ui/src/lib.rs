// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod dialogs;
pub mod hooks;
pub mod menus;
pub mod preview;
pub mod session;
pub mod street;
#[cfg(test)]
mod test_support;

use api::prefs::feature_flags::FeatureFlags;
use api::prefs::user_settings::UserSettings;
use api::ApiClient;
use app_state::AppState;
use app_state_mut::AppStateMut;
use dialogs::router::DialogRoot;
use dialogs::DialogKind;
use hooks::use_connectivity::use_connectivity;
use menus::dropdown::MenuDropdown;
use menus::menu_bar::MenuBar;
use menus::MenuKind;
use session::SessionState;
use street::Street;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- MENU BAR --- */
    .menu-bar {
        padding: 0 1rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
        --pico-nav-element-spacing-vertical: 0.5rem;
    }
    .menu-avatar { font-weight: bold; }

    .menu-backdrop { position: fixed; inset: 0; z-index: 900; }
    .custom-dropdown-menu {
        position: absolute;
        right: 1rem;
        z-index: 1000;
        min-width: 12rem;
        padding: 0.5rem 0;
        display: flex;
        flex-direction: column;
    }
    .custom-dropdown-item { padding: 0.4rem 1rem; text-decoration: none; }
    .custom-dropdown-item:hover { background-color: var(--pico-muted-border-color); }

    /* --- STREET --- */
    .street-summary { padding: 1rem; }
    .street-strip { display: flex; height: 3rem; border-radius: 4px; overflow: hidden; }

    /* --- SAVE AS IMAGE --- */
    .save-as-image-options { margin-bottom: 1rem; }
    .save-as-image-preview {
        min-height: 8rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: repeating-conic-gradient(#eee 0% 25%, #fff 0% 50%) 50% / 16px 16px;
    }
    .save-as-image-preview-image { position: relative; }
    .save-as-image-preview-loading {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        background: rgba(255, 255, 255, 0.7);
    }
    .save-as-image-preview-error { color: var(--pico-del-color); padding: 1rem; }
    .save-as-image-download { margin-top: 1rem; text-align: right; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet { href: PICO_CSS }
        style { "{app_css}" }
        AppBody {}
    }
}

/// Provides the app contexts, then renders the menu bar, the street and the
/// dialog layer.
#[component]
fn AppBody() -> Element {
    // Provide the stable, non-reactive AppState.
    let app_state = use_context_provider(|| AppState::new(ApiClient::from_env()));
    use_context_provider(SessionState::new);

    // Create signals for mutable state at the top level of the component.
    let active_dialog = use_signal(|| None::<String>);
    let settings = use_signal(UserSettings::default);
    let flags = use_signal(FeatureFlags::from_env);
    let street = use_signal(Street::sample);
    let user = use_signal(|| None);
    let offline = use_signal(|| false);

    let mut store = use_context_provider(|| AppStateMut {
        active_dialog,
        settings,
        flags,
        street,
        user,
        offline,
    });

    let street_api = app_state.api.clone();
    let current_user = use_resource(move || {
        let api = app_state.api.clone();
        async move { api.current_user().await }
    });

    use_effect(move || {
        if let Some(found) = current_user.read().as_ref() {
            if let Some(found) = found {
                dioxus_logger::tracing::info!("signed in as {}", found.label());
            }
            store.user.set(found.clone());
        }
    });

    // A street named in the page address replaces the sample once fetched.
    let requested_street = use_hook(compat::requested_street_id);
    let saved_street = use_resource(move || {
        let api = street_api.clone();
        let street_id = requested_street.clone();
        async move {
            match street_id {
                Some(street_id) => Some(street::fetch_street(&api, &street_id).await),
                None => None,
            }
        }
    });

    use_effect(move || {
        if let Some(Some(found)) = saved_street.read().as_ref() {
            store.load_street(found.clone());
        }
    });

    use_connectivity();

    let mut open_menu = use_signal(|| None::<MenuKind>);

    rsx! {
        header {
            MenuBar {
                on_menu_dropdown_click: move |kind: MenuKind| {
                    let next = (open_menu() != Some(kind)).then_some(kind);
                    open_menu.set(next);
                },
            }
            if let Some(kind) = open_menu() {
                MenuDropdown { kind, on_close: move |_| open_menu.set(None) }
            }
        }
        main {
            StreetSummary {}
        }
        DialogRoot {}
    }
}

/// A flat strip of the street's segments with a quick way into the export.
#[component]
fn StreetSummary() -> Element {
    let mut store = use_context::<AppStateMut>();
    let street = store.street.read().clone();
    let total = street.total_width();
    let name = street.name.clone().unwrap_or_else(|| "Untitled street".to_string());

    rsx! {
        section {
            class: "street-summary",
            h2 { "{name}" }
            div {
                class: "street-strip",
                for (i, segment) in street.segments.iter().enumerate() {
                    {
                        let (r, g, b) = segment.kind.color();
                        let percent = if total > 0.0 { segment.width.max(0.0) / total * 100.0 } else { 0.0 };
                        rsx! {
                            div {
                                key: "{i}",
                                title: "{segment.kind.name()}",
                                style: "width: {percent}%; background-color: rgb({r}, {g}, {b});",
                            }
                        }
                    }
                }
            }
            p { small { "{street.segments.len()} segments, {total:.0} ft wide" } }
            button {
                class: "secondary",
                onclick: move |_| store.show_dialog(DialogKind::SaveAsImage),
                "Save as image…"
            }
        }
    }
}
