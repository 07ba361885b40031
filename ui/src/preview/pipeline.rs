use super::filename::make_filename;
use super::options::PreviewOptions;
use super::renderer::{StreetRenderer, Surface};
use super::{encode_png, to_data_url, PreviewError};
use crate::street::Street;

pub const PREVIEW_UNAVAILABLE: &str = "Saving to image is not available on this browser.";
pub const PREVIEW_DISPLAY_ERROR: &str = "There was an error displaying a preview image.";

/// What the dialog shows: the preview image, its download name, or why
/// neither is available.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PreviewResult {
    pub filename: String,
    pub image_data_url: String,
    pub error_message: Option<String>,
}

impl PreviewResult {
    pub fn is_available(&self) -> bool {
        self.error_message.is_none() && !self.image_data_url.is_empty()
    }
}

/// Renders and encodes previews, remembering the last good surface for
/// downloads.
pub struct PreviewPipeline<R> {
    renderer: R,
    surface: Option<Surface>,
    result: PreviewResult,
}

impl<R: StreetRenderer> PreviewPipeline<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            surface: None,
            result: PreviewResult::default(),
        }
    }

    /// Recomputes the preview from scratch.
    ///
    /// On failure the previous image stays in the result (it is hidden while
    /// the error is set) and only the error message changes.
    pub fn update(&mut self, street: &Street, options: &PreviewOptions) -> &PreviewResult {
        let rendered = self
            .renderer
            .render(street, options)
            .and_then(|surface| Ok((to_data_url(&surface)?, surface)));

        match rendered {
            Ok((data_url, surface)) => {
                self.surface = Some(surface);
                self.result = PreviewResult {
                    filename: make_filename(street.name.as_deref()),
                    image_data_url: data_url,
                    error_message: None,
                };
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("preview unavailable: {}", e);
                self.result.error_message = Some(PREVIEW_UNAVAILABLE.to_string());
            }
        }
        &self.result
    }

    /// PNG bytes and file name of the last successfully rendered surface.
    pub fn download(&self) -> Result<(String, Vec<u8>), PreviewError> {
        let surface = self.surface.as_ref().ok_or(PreviewError::NothingRendered)?;
        Ok((self.result.filename.clone(), encode_png(surface)?))
    }
}
