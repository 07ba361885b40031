//! Viewing and editing the metadata extension of the current street.

use api::street_extension::StreetExtension;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Modal;
use crate::dialogs::DialogKind;
use crate::hooks::use_close_dialog::use_close_dialog;

/// Parses a latitude or longitude field. Blank means "not set".
fn parse_coordinate(raw: &str, limit: f64) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("`{raw}` must be between -{limit} and {limit}"));
    }
    Ok(Some(value))
}

/// Builds the extension to save from the form fields. Latitude and longitude
/// are set together or not at all.
fn build_extension(
    street_id: &str,
    description: &str,
    tags: &str,
    lat: &str,
    lng: &str,
) -> Result<StreetExtension, String> {
    let lat = parse_coordinate(lat, 90.0)?;
    let lng = parse_coordinate(lng, 180.0)?;
    if lat.is_some() != lng.is_some() {
        return Err("Enter both a latitude and a longitude, or neither.".to_string());
    }
    Ok(StreetExtension {
        street_id: street_id.to_string(),
        description: description.trim().to_string(),
        tags: StreetExtension::parse_tags(tags),
        lat,
        lng,
    })
}

#[component]
pub fn MetadataDialog() -> Element {
    let close = use_close_dialog();
    let app_state = use_context::<AppState>();
    let store = use_context::<AppStateMut>();
    let street_id = store.street.read().id.clone();

    let loaded = use_resource({
        let street_id = street_id.clone();
        move || {
            let api = app_state.api.clone();
            let street_id = street_id.clone();
            async move {
                match street_id {
                    Some(id) => api.street_extension(&id).await,
                    None => None,
                }
            }
        }
    });

    let Some(street_id) = street_id else {
        return rsx! {
            Modal {
                title: "Street metadata",
                on_close: close,
                p { "Save this street first, then add metadata to it." }
            }
        };
    };

    // A payload that does not parse fails the render and is reported by the
    // dialog layer's error boundary.
    let body = match &*loaded.read() {
        None => rsx! { progress {} },
        Some(None) => {
            let extension = StreetExtension {
                street_id,
                ..Default::default()
            };
            rsx! { MetadataForm { extension, exists: false } }
        }
        Some(Some(value)) => {
            let extension = StreetExtension::from_value(value.clone())?;
            rsx! { MetadataForm { extension, exists: true } }
        }
    };

    rsx! {
        Modal {
            title: "Street metadata",
            on_close: close,
            {body}
        }
    }
}

#[component]
fn MetadataForm(extension: StreetExtension, exists: bool) -> Element {
    let app_state = use_context::<AppState>();
    let mut store = use_context::<AppStateMut>();

    let mut description = use_signal(|| extension.description.clone());
    let mut tags = use_signal(|| extension.tag_list());
    let mut lat = use_signal(|| extension.lat.map(|v| v.to_string()).unwrap_or_default());
    let mut lng = use_signal(|| extension.lng.map(|v| v.to_string()).unwrap_or_default());
    let mut status = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let street_id = extension.street_id.clone();
    let save = move |_| {
        let draft = build_extension(&street_id, &description(), &tags(), &lat(), &lng());
        let draft = match draft {
            Ok(draft) => draft,
            Err(message) => {
                status.set(Some(message));
                return;
            }
        };
        let api = app_state.api.clone();
        saving.set(true);
        spawn(async move {
            let id = exists.then_some(draft.street_id.as_str());
            match api.save_street_extension(id, &draft.to_value()).await {
                Ok(_) => {
                    dioxus_logger::tracing::info!("saved metadata for street {}", draft.street_id);
                    store.clear_dialog();
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("saving metadata failed: {:#}", e);
                    status.set(Some("The metadata could not be saved.".to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        label {
            "Description"
            textarea {
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
        }
        label {
            "Tags"
            input {
                r#type: "text",
                placeholder: "comma, separated",
                value: "{tags}",
                oninput: move |evt| tags.set(evt.value()),
            }
        }
        div {
            class: "grid",
            label {
                "Latitude"
                input {
                    r#type: "text",
                    value: "{lat}",
                    oninput: move |evt| lat.set(evt.value()),
                }
            }
            label {
                "Longitude"
                input {
                    r#type: "text",
                    value: "{lng}",
                    oninput: move |evt| lng.set(evt.value()),
                }
            }
        }
        if let Some(message) = status() {
            p { small { "{message}" } }
        }
        Button {
            disabled: saving(),
            on_click: save,
            if exists { "Update" } else { "Save" }
        }
    }
}

/// The one-time prompt shown when a signed-in user is on a street without
/// metadata.
#[component]
pub fn MetadataMissingDialog() -> Element {
    let close = use_close_dialog();
    let mut store = use_context::<AppStateMut>();

    rsx! {
        Modal {
            title: "This street has no metadata",
            on_close: close,
            footer: rsx! {
                div {
                    role: "group",
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| close.call(()),
                        "Not now"
                    }
                    Button {
                        on_click: move |_| store.show_dialog(DialogKind::Metadata),
                        "Add metadata"
                    }
                }
            },
            p { "A description, tags and a location make the street easier to find later." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_coordinates_are_unset() {
        assert_eq!(parse_coordinate("  ", 90.0), Ok(None));
        assert_eq!(parse_coordinate(" 48.2 ", 90.0), Ok(Some(48.2)));
    }

    #[test]
    fn coordinates_out_of_range_or_garbled_are_rejected() {
        assert!(parse_coordinate("91", 90.0).is_err());
        assert!(parse_coordinate("-180.5", 180.0).is_err());
        assert!(parse_coordinate("north", 90.0).is_err());
        assert!(parse_coordinate("NaN", 90.0).is_err());
    }

    #[test]
    fn extensions_are_built_from_trimmed_fields() {
        let ext = build_extension("s1", " quiet street ", "trees, ,bikes", "48.2", "16.37").unwrap();
        assert_eq!(ext.street_id, "s1");
        assert_eq!(ext.description, "quiet street");
        assert_eq!(ext.tags, vec!["trees", "bikes"]);
        assert_eq!(ext.location(), Some((48.2, 16.37)));
    }

    #[test]
    fn half_a_location_is_an_error() {
        assert!(build_extension("s1", "", "", "48.2", "").is_err());
        assert!(build_extension("s1", "", "", "", "").unwrap().location().is_none());
    }
}
