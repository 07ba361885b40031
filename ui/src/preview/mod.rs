//! The save-as-image preview: render the street, encode it, offer it.

pub mod controller;
pub mod debounce;
pub mod dpi;
pub mod filename;
pub mod options;
pub mod pipeline;
pub mod renderer;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use renderer::Surface;

pub const PNG_MIME: &str = "image/png";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreviewError {
    #[error("street render failed: {0}")]
    Render(String),
    #[error("png encode failed: {0}")]
    Encode(String),
    #[error("nothing has been rendered yet")]
    NothingRendered,
}

pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, PreviewError> {
    if surface.width() == 0 || surface.height() == 0 {
        return Err(PreviewError::Encode("empty surface".to_string()));
    }
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            surface.as_raw(),
            surface.width(),
            surface.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| PreviewError::Encode(e.to_string()))?;
    Ok(bytes)
}

pub fn to_data_url(surface: &Surface) -> Result<String, PreviewError> {
    let png = encode_png(surface)?;
    Ok(format!("data:{PNG_MIME};base64,{}", STANDARD.encode(png)))
}
