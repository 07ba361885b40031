use api::prefs::feature_flags::FeatureFlags;
use api::prefs::user_settings::UserSettings;

use super::dpi::DpiScale;

/// Everything the street renderer needs to know besides the street itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PreviewOptions {
    pub transparent_sky: bool,
    pub segment_labels: bool,
    pub street_name_label: bool,
    pub watermark: bool,
    pub dpi_scale: DpiScale,
}

impl PreviewOptions {
    /// Resolves the options from stored settings and feature flags.
    ///
    /// Without the `EXPORT_WATERMARK` flag the user may not turn the
    /// watermark off, so it is forced on whatever the stored preference says.
    pub fn from_settings(settings: &UserSettings, flags: &FeatureFlags, dpi_scale: DpiScale) -> Self {
        Self {
            transparent_sky: settings.save_as_image_transparent_sky,
            segment_labels: settings.save_as_image_segment_names_and_widths,
            street_name_label: settings.save_as_image_street_name,
            watermark: settings.save_as_image_watermark || !watermark_controllable(flags),
            dpi_scale,
        }
    }
}

/// Whether the watermark checkbox is enabled.
pub fn watermark_controllable(flags: &FeatureFlags) -> bool {
    flags.export_watermark
}
