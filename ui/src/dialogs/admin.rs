//! Views over every street's metadata. Admins only.

use api::street_extension::StreetExtension;
use dioxus::prelude::*;
use serde_json::Value;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Modal;
use crate::hooks::use_close_dialog::use_close_dialog;

/// Keeps the entries that parse; the rest are logged and skipped.
fn parse_extensions(values: &[Value]) -> Vec<StreetExtension> {
    values
        .iter()
        .filter_map(|value| {
            StreetExtension::from_value(value.clone())
                .inspect_err(|e| dioxus_logger::tracing::warn!("skipping street extension: {}", e))
                .ok()
        })
        .collect()
}

fn use_street_extensions() -> Resource<Result<Vec<StreetExtension>, String>> {
    let app_state = use_context::<AppState>();
    use_resource(move || {
        let api = app_state.api.clone();
        async move {
            api.street_extensions()
                .await
                .map(|values| parse_extensions(&values))
                .map_err(|e| {
                    dioxus_logger::tracing::error!("listing street extensions failed: {:#}", e);
                    e.to_string()
                })
        }
    })
}

#[component]
fn AdminOnly(children: Element) -> Element {
    let store = use_context::<AppStateMut>();
    let is_admin = store.user.read().as_ref().is_some_and(|user| user.is_admin());
    if is_admin {
        rsx! { {children} }
    } else {
        rsx! { p { "Only administrators can see this." } }
    }
}

#[component]
pub fn AdminDialog() -> Element {
    let close = use_close_dialog();
    let extensions = use_street_extensions();

    rsx! {
        Modal {
            title: "Admin",
            on_close: close,
            AdminOnly {
                match &*extensions.read() {
                    None => rsx! { progress {} },
                    Some(Err(e)) => rsx! { p { "Could not load street metadata: {e}" } },
                    Some(Ok(list)) if list.is_empty() => rsx! { p { "No street has metadata yet." } },
                    Some(Ok(list)) => rsx! {
                        table {
                            thead {
                                tr {
                                    th { "Street" }
                                    th { "Description" }
                                    th { "Tags" }
                                }
                            }
                            tbody {
                                for ext in list.iter() {
                                    tr {
                                        key: "{ext.street_id}",
                                        td { code { "{ext.street_id}" } }
                                        td { "{ext.description}" }
                                        td { "{ext.tag_list()}" }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

/// Every geotagged street, with a link to its location.
#[component]
pub fn AdminMapDialog() -> Element {
    let close = use_close_dialog();
    let extensions = use_street_extensions();

    rsx! {
        Modal {
            title: "Street map",
            on_close: close,
            AdminOnly {
                match &*extensions.read() {
                    None => rsx! { progress {} },
                    Some(Err(e)) => rsx! { p { "Could not load street metadata: {e}" } },
                    Some(Ok(list)) => {
                        let located: Vec<(String, f64, f64)> = list
                            .iter()
                            .filter_map(|ext| ext.location().map(|(lat, lng)| (ext.street_id.clone(), lat, lng)))
                            .collect();
                        rsx! {
                            if located.is_empty() {
                                p { "No street has a location yet." }
                            }
                            ul {
                                for (street_id, lat, lng) in located {
                                    li {
                                        key: "{street_id}",
                                        a {
                                            href: "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=18/{lat}/{lng}",
                                            target: "_blank",
                                            "{street_id}"
                                        }
                                        " ({lat:.4}, {lng:.4})"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unparsable_entries_are_skipped() {
        let values = vec![
            json!({"streetId": "a", "lat": 1.0, "lng": 2.0}),
            json!({"streetId": 7}),
            json!({"streetId": "b"}),
        ];
        let parsed = parse_extensions(&values);
        let ids: Vec<_> = parsed.iter().map(|e| e.street_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
