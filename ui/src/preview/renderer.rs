//! Turning a street into pixels.

use image::RgbaImage;
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

use super::options::PreviewOptions;
use super::PreviewError;
use crate::street::Street;

/// A rendered street, straight (not premultiplied) RGBA.
pub type Surface = RgbaImage;

/// Anything that can draw a street for export.
pub trait StreetRenderer {
    fn render(&self, street: &Street, options: &PreviewOptions) -> Result<Surface, PreviewError>;
}

/// Draws a flat cross-section of the street: sky, ground, one slab per
/// segment, optional label plates, nameplate and watermark.
///
/// All geometry is laid out at 1x and scaled by the DPI multiplier.
/// Labels are drawn as plates only; text needs a font database we do not ship.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchematicRenderer;

const PX_PER_UNIT: f32 = 12.0;
const MARGIN: f32 = 60.0;
const HEIGHT: f32 = 240.0;
const GROUND_Y: f32 = 170.0;
const MIN_STREET_UNITS: f32 = 20.0;

const SKY: (u8, u8, u8) = (0xa9, 0xd8, 0xf2);
const DIRT: (u8, u8, u8) = (0x9b, 0x7b, 0x5b);
const BUILDING: (u8, u8, u8) = (0xc8, 0xb5, 0x9e);

fn paint(rgb: (u8, u8, u8), alpha: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgb.0, rgb.1, rgb.2, alpha);
    paint
}

fn fill(pixmap: &mut Pixmap, x: f32, y: f32, w: f32, h: f32, paint: &Paint, scale: Transform) {
    // Degenerate rects (zero-width segments) are simply skipped.
    if let Some(rect) = Rect::from_xywh(x, y, w, h) {
        pixmap.fill_rect(rect, paint, scale, None);
    }
}

impl SchematicRenderer {
    fn size(street: &Street) -> (f32, f32) {
        let width = street.total_width().max(MIN_STREET_UNITS) * PX_PER_UNIT + 2.0 * MARGIN;
        (width, HEIGHT)
    }
}

impl StreetRenderer for SchematicRenderer {
    fn render(&self, street: &Street, options: &PreviewOptions) -> Result<Surface, PreviewError> {
        let dpi = options.dpi_scale.as_f32();
        let (width, height) = Self::size(street);
        let (px_width, px_height) = ((width * dpi).ceil() as u32, (height * dpi).ceil() as u32);

        let mut pixmap = Pixmap::new(px_width, px_height)
            .ok_or_else(|| PreviewError::Render(format!("cannot allocate {px_width}x{px_height}")))?;
        let scale = Transform::from_scale(dpi, dpi);

        if options.transparent_sky {
            pixmap.fill(Color::TRANSPARENT);
        } else {
            pixmap.fill(Color::from_rgba8(SKY.0, SKY.1, SKY.2, 0xff));
        }

        // Buildings on both sides and the ground beneath everything.
        fill(&mut pixmap, 0.0, 60.0, MARGIN, GROUND_Y - 60.0, &paint(BUILDING, 0xff), scale);
        fill(&mut pixmap, width - MARGIN, 60.0, MARGIN, GROUND_Y - 60.0, &paint(BUILDING, 0xff), scale);
        fill(&mut pixmap, 0.0, GROUND_Y, width, height - GROUND_Y, &paint(DIRT, 0xff), scale);

        let street_px = street.total_width() * PX_PER_UNIT;
        let mut x = MARGIN + (width - 2.0 * MARGIN - street_px) / 2.0;
        for segment in &street.segments {
            let w = segment.width.max(0.0) * PX_PER_UNIT;
            fill(&mut pixmap, x, GROUND_Y - 8.0, w, 12.0, &paint(segment.kind.color(), 0xff), scale);
            // Thin seam between neighbours.
            fill(&mut pixmap, x, GROUND_Y - 8.0, 1.0, 12.0, &paint((0x33, 0x33, 0x33), 0x80), scale);

            if options.segment_labels {
                fill(&mut pixmap, x + 2.0, GROUND_Y + 14.0, (w - 4.0).max(0.0), 14.0, &paint((0xff, 0xff, 0xff), 0xe0), scale);
                // Width tick below the plate.
                fill(&mut pixmap, x, GROUND_Y + 34.0, w, 1.0, &paint((0x22, 0x22, 0x22), 0xff), scale);
            }
            x += w;
        }

        if options.street_name_label && street.name.as_deref().is_some_and(|n| !n.is_empty()) {
            let plate_w = (width / 3.0).min(360.0);
            let plate_x = (width - plate_w) / 2.0;
            fill(&mut pixmap, plate_x - 2.0, 14.0, plate_w + 4.0, 34.0, &paint((0x1b, 0x3a, 0x2d), 0xff), scale);
            fill(&mut pixmap, plate_x, 16.0, plate_w, 30.0, &paint((0xf4, 0xf4, 0xf0), 0xff), scale);
        }

        if options.watermark {
            fill(&mut pixmap, width - 110.0, height - 22.0, 100.0, 12.0, &paint((0xff, 0xff, 0xff), 0x99), scale);
        }

        into_surface(&pixmap)
    }
}

fn into_surface(pixmap: &Pixmap) -> Result<Surface, PreviewError> {
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| PreviewError::Render("pixel buffer size mismatch".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::dpi::DpiScale;

    fn options(transparent_sky: bool, dpi: i64) -> PreviewOptions {
        PreviewOptions {
            transparent_sky,
            segment_labels: true,
            street_name_label: true,
            watermark: true,
            dpi_scale: DpiScale::new(dpi),
        }
    }

    #[test]
    fn output_size_scales_with_dpi() {
        let street = Street::sample();
        let small = SchematicRenderer.render(&street, &options(false, 2)).unwrap();
        let large = SchematicRenderer.render(&street, &options(false, 4)).unwrap();
        assert_eq!(large.width(), small.width() * 2);
        assert_eq!(large.height(), small.height() * 2);
    }

    #[test]
    fn transparent_sky_leaves_the_top_corner_clear() {
        let street = Street::sample();
        let opaque = SchematicRenderer.render(&street, &options(false, 2)).unwrap();
        let clear = SchematicRenderer.render(&street, &options(true, 2)).unwrap();
        assert_eq!(opaque.get_pixel(0, 0).0[3], 0xff);
        assert_eq!(clear.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn empty_streets_still_render() {
        let surface = SchematicRenderer.render(&Street::default(), &options(false, 2)).unwrap();
        assert!(surface.width() > 0 && surface.height() > 0);
    }
}
