//=============================================================================
// File: src/dialogs/save_as_image.rs
//=============================================================================
use std::rc::Rc;

use api::prefs::user_settings::SettingsChange;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::pico::Checkbox;
use crate::components::pico::Modal;
use crate::hooks::use_close_dialog::use_close_dialog;
use crate::preview::controller::PreviewController;
use crate::preview::dpi::{DpiInput, DEFAULT_IMAGE_DPI, MAX_IMAGE_DPI};
use crate::preview::options::{watermark_controllable, PreviewOptions};
use crate::preview::pipeline::PREVIEW_DISPLAY_ERROR;
use crate::preview::renderer::SchematicRenderer;
use crate::preview::PNG_MIME;

#[component]
pub fn SaveAsImageDialog() -> Element {
    let mut store = use_context::<AppStateMut>();
    let close = use_close_dialog();

    let controller = use_hook(|| Rc::new(PreviewController::new(SchematicRenderer)));
    let mut dpi_input = use_signal(DpiInput::default);
    let mut loading = use_signal(|| false);
    // Set when the browser fails to display an otherwise good preview.
    let mut display_error = use_signal(|| None::<String>);

    // Always reads the latest values; called when a refresh actually fires.
    let snapshot = move || {
        let options = PreviewOptions::from_settings(
            &store.settings.peek(),
            &store.flags.peek(),
            dpi_input.peek().scale(),
        );
        (store.street.peek().clone(), options)
    };

    let mut preview = use_signal({
        let controller = controller.clone();
        move || {
            dioxus_logger::tracing::info!("save as image dialog opened");
            let (street, options) = snapshot();
            controller.refresh(&street, &options)
        }
    });

    use_drop({
        let controller = controller.clone();
        move || controller.cancel()
    });

    let schedule_refresh = use_callback({
        let controller = controller.clone();
        move |_: ()| {
            controller.mark_loading();
            loading.set(true);
            let controller = controller.clone();
            spawn(async move {
                if let Some(result) = controller.refresh_when_settled(snapshot).await {
                    display_error.set(None);
                    preview.set(result);
                    loading.set(controller.is_loading());
                }
            });
        }
    });

    // Settings update right away so the checkboxes follow the click; the
    // image catches up after the refresh delay.
    let mut set_option = move |change: SettingsChange| {
        store.set_settings(change);
        schedule_refresh.call(());
    };

    let download = {
        let controller = controller.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            match controller.download() {
                Ok((filename, bytes)) => {
                    spawn(async move {
                        if let Err(e) = compat::save_file(bytes, &filename, PNG_MIME).await {
                            dioxus_logger::tracing::warn!("saving {} failed: {}", filename, e);
                        }
                    });
                }
                Err(e) => dioxus_logger::tracing::warn!("download unavailable: {}", e),
            }
        }
    };

    let settings = *store.settings.read();
    let flags = *store.flags.read();
    let options = PreviewOptions::from_settings(&settings, &flags, dpi_input.read().scale());
    let result = preview.read().clone();
    let available = result.is_available() && display_error.read().is_none();
    let error_text = display_error().or(result.error_message.clone()).unwrap_or_default();

    rsx! {
        Modal {
            title: "Save as image",
            on_close: close,
            div {
                class: "save-as-image-dialog",
                fieldset {
                    class: "save-as-image-options",
                    Checkbox {
                        checked: options.segment_labels,
                        on_change: move |checked: bool| set_option(SettingsChange::SegmentNamesAndWidths(checked)),
                        "Segment names and widths"
                    }
                    Checkbox {
                        checked: options.street_name_label,
                        on_change: move |checked: bool| set_option(SettingsChange::StreetName(checked)),
                        "Street name"
                    }
                    Checkbox {
                        checked: options.transparent_sky,
                        on_change: move |checked: bool| set_option(SettingsChange::TransparentSky(checked)),
                        "Transparent sky"
                    }
                    Checkbox {
                        checked: options.watermark,
                        disabled: !watermark_controllable(&flags),
                        on_change: move |checked: bool| set_option(SettingsChange::Watermark(checked)),
                        "Watermark"
                    }
                }
                if flags.save_as_image_custom_dpi {
                    div {
                        class: "save-as-image-options",
                        label {
                            r#for: "save-as-image-dpi-input",
                            "Custom DPI (min {DEFAULT_IMAGE_DPI}x, max {MAX_IMAGE_DPI}x): "
                        }
                        input {
                            id: "save-as-image-dpi-input",
                            r#type: "text",
                            value: "{dpi_input.read().raw()}",
                            oninput: move |evt: FormEvent| {
                                let changed = dpi_input.with_mut(|input| input.set_raw(evt.value()));
                                if changed {
                                    schedule_refresh.call(());
                                }
                            },
                        }
                    }
                }
                div {
                    class: "save-as-image-preview",
                    if !available {
                        div { class: "save-as-image-preview-error", "{error_text}" }
                    } else {
                        div {
                            class: "save-as-image-preview-image",
                            if loading() {
                                div {
                                    class: "save-as-image-preview-loading",
                                    progress {}
                                    "Loading…"
                                }
                            }
                            img {
                                src: "{result.image_data_url}",
                                alt: "Preview",
                                style: "max-width: 100%;",
                                onload: move |_| loading.set(false),
                                onerror: move |_| {
                                    loading.set(false);
                                    display_error.set(Some(PREVIEW_DISPLAY_ERROR.to_string()));
                                },
                            }
                        }
                    }
                }
                div {
                    class: "save-as-image-download",
                    if available {
                        // The href lets the data URL work as a plain link; the
                        // click handler saves through a Blob where it can.
                        a {
                            role: "button",
                            href: "{result.image_data_url}",
                            download: "{result.filename}",
                            onclick: download,
                            "Save to your computer…"
                        }
                    } else {
                        button { disabled: true, "Save to your computer…" }
                    }
                }
            }
        }
    }
}
