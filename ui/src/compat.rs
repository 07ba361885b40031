// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;
    use wasm_bindgen::prelude::*;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// The street id in the page address, if any.
    pub fn requested_street_id() -> Option<String> {
        let location = web_sys::window()?.location();
        let pathname = location.pathname().ok()?;
        let search = location.search().ok()?;
        crate::street::street_id_from_location(&pathname, &search)
    }

    pub fn is_online() -> bool {
        web_sys::window().map_or(true, |window| window.navigator().on_line())
    }

    fn js_error(e: JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{:?}", e))
    }

    /// Offers `bytes` as a download named `filename`.
    ///
    /// The bytes are wrapped in a Blob and saved through a temporary anchor,
    /// since data URLs are not downloadable everywhere.
    pub async fn save_file(bytes: Vec<u8>, filename: &str, mime: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| "Failed to cast to HtmlAnchorElement".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        body.append_child(&anchor).map_err(js_error)?;
        anchor.click();
        body.remove_child(&anchor).map_err(js_error)?;
        Url::revoke_object_url(&url).map_err(js_error)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// The street to open, from `STREET_ID`.
    pub fn requested_street_id() -> Option<String> {
        std::env::var("STREET_ID").ok().filter(|id| !id.is_empty())
    }

    /// Desktop builds have no connectivity signal and assume they are online.
    pub fn is_online() -> bool {
        true
    }

    /// Prompts the user for a location and writes `bytes` there.
    /// Cancelling the dialog is not an error.
    pub async fn save_file(bytes: Vec<u8>, filename: &str, _mime: &str) -> Result<(), String> {
        let extension = filename.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("png");
        let file_handle = rfd::AsyncFileDialog::new()
            .add_filter("Images", &[extension])
            .set_file_name(filename)
            .save_file()
            .await;

        match file_handle {
            Some(handle) => handle.write(&bytes).await.map_err(|e| e.to_string()),
            None => Ok(()),
        }
    }
}
