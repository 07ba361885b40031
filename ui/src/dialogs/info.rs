//! The smaller, mostly informational dialogs.

use api::client::Method;
use api::street_extension::StreetExtension;
use dioxus::prelude::*;
use serde_json::json;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Modal;
use crate::dialogs::DialogKind;
use crate::hooks::use_close_dialog::use_close_dialog;

const WHATS_NEW: [&str; 4] = [
    "Save as image now supports custom resolutions up to 10x.",
    "Transparent skies for image exports.",
    "Street metadata can be attached to any saved street.",
    "Admins get an overview map of every geotagged street.",
];

#[component]
pub fn AboutDialog() -> Element {
    let close = use_close_dialog();
    let version = env!("CARGO_PKG_VERSION");
    rsx! {
        Modal {
            title: "About",
            on_close: close,
            p { "A street designer for sketching, sharing and exporting street cross-sections." }
            p { small { "Version {version}" } }
        }
    }
}

#[component]
pub fn WhatsNewDialog() -> Element {
    let close = use_close_dialog();
    rsx! {
        Modal {
            title: "What's new",
            on_close: close,
            ul {
                for item in WHATS_NEW {
                    li { "{item}" }
                }
            }
        }
    }
}

/// How the current street's width is split between segment kinds.
#[component]
pub fn AnalyticsDialog() -> Element {
    let close = use_close_dialog();
    let store = use_context::<AppStateMut>();
    let street = store.street.read();
    let shares = street.width_shares();
    let total = street.total_width();

    rsx! {
        Modal {
            title: "Street analytics",
            on_close: close,
            if shares.is_empty() {
                p { "This street has no segments yet." }
            } else {
                p { "Total width: {total:.1} ft" }
                table {
                    thead {
                        tr {
                            th { "Segment" }
                            th { "Share of width" }
                        }
                    }
                    tbody {
                        for (kind, share) in shares {
                            tr {
                                key: "{kind.name()}",
                                td { "{kind.name()}" }
                                td { "{share * 100.0:.0}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shows where the current street is, as recorded in its metadata.
#[component]
pub fn GeotagDialog() -> Element {
    let close = use_close_dialog();
    let app_state = use_context::<AppState>();
    let mut store = use_context::<AppStateMut>();

    let location = use_resource(move || {
        let api = app_state.api.clone();
        let street_id = store.street.read().id.clone();
        async move {
            let value = api.street_extension(street_id.as_deref()?).await?;
            StreetExtension::from_value(value).ok()?.location()
        }
    });

    rsx! {
        Modal {
            title: "Location",
            on_close: close,
            match &*location.read() {
                Some(Some((lat, lng))) => rsx! {
                    p { "This street is at {lat:.5}, {lng:.5}." }
                    a {
                        href: "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=18/{lat}/{lng}",
                        target: "_blank",
                        "Open in OpenStreetMap"
                    }
                },
                Some(None) => rsx! {
                    p { "No location has been recorded for this street." }
                    Button {
                        button_type: ButtonType::Secondary,
                        on_click: move |_| store.show_dialog(DialogKind::Metadata),
                        "Add one in the metadata"
                    }
                },
                None => rsx! {
                    progress {}
                },
            }
        }
    }
}

#[component]
pub fn NewsletterDialog() -> Element {
    let close = use_close_dialog();
    let app_state = use_context::<AppState>();
    let mut email = use_signal(String::new);
    let mut status = use_signal(|| None::<String>);

    let subscribe = move |_| {
        let api = app_state.api.clone();
        let address = email();
        spawn(async move {
            let body = json!({ "email": address });
            let message = match api.request(Method::Post, "newsletter", "", Some(&body)).await {
                Ok(_) => "Thanks! Check your inbox to confirm.".to_string(),
                Err(e) => {
                    dioxus_logger::tracing::warn!("newsletter signup failed: {:#}", e);
                    "Signing up did not work, please try again later.".to_string()
                }
            };
            status.set(Some(message));
        });
    };

    rsx! {
        Modal {
            title: "Newsletter",
            on_close: close,
            p { "Hear about new features, a few times a year." }
            input {
                r#type: "email",
                placeholder: "you@example.com",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            Button {
                disabled: !email.read().contains('@'),
                on_click: subscribe,
                "Subscribe"
            }
            if let Some(message) = status() {
                p { "{message}" }
            }
        }
    }
}

#[component]
pub fn UpgradeDialog() -> Element {
    let close = use_close_dialog();
    rsx! {
        Modal {
            title: "Upgrade",
            on_close: close,
            p { "Business plans add unwatermarked exports, custom export resolutions and priority support." }
            p { "Get in touch through the Contact menu to set one up." }
        }
    }
}

#[component]
pub fn SentimentSurveyDialog() -> Element {
    let close = use_close_dialog();
    let app_state = use_context::<AppState>();
    let mut store = use_context::<AppStateMut>();
    let mut voted = use_signal(|| false);

    let vote = use_callback(move |score: u8| {
        let api = app_state.api.clone();
        let street_id = store.street.peek().id.clone().unwrap_or_default();
        voted.set(true);
        spawn(async move {
            let body = json!({ "score": score, "streetId": street_id });
            api.fetch_or_empty(Method::Post, "votes", "", Some(&body)).await;
        });
    });

    rsx! {
        Modal {
            title: "How do you feel about this street?",
            on_close: close,
            if voted() {
                p { "Thanks for your feedback!" }
                Button { on_click: move |_| store.clear_dialog(), "Close" }
            } else {
                div {
                    role: "group",
                    for score in 1..=5u8 {
                        Button {
                            key: "{score}",
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| vote.call(score),
                            "{score}"
                        }
                    }
                }
            }
        }
    }
}
