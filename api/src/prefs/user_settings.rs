use serde::Deserialize;
use serde::Serialize;

/// Persisted user settings. Only the export options live here for now.
///
/// Field names follow the keys the settings store persists, so a settings
/// blob saved by an older client still deserializes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    pub save_as_image_transparent_sky: bool,
    pub save_as_image_segment_names_and_widths: bool,
    pub save_as_image_street_name: bool,
    pub save_as_image_watermark: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            save_as_image_transparent_sky: false,
            save_as_image_segment_names_and_widths: true,
            save_as_image_street_name: true,
            save_as_image_watermark: true,
        }
    }
}

/// A partial update to [`UserSettings`], as dispatched by the option handlers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SettingsChange {
    TransparentSky(bool),
    SegmentNamesAndWidths(bool),
    StreetName(bool),
    Watermark(bool),
}

impl UserSettings {
    /// Applies a single change. Returns `true` if the value actually changed.
    pub fn apply(&mut self, change: SettingsChange) -> bool {
        let (slot, value) = match change {
            SettingsChange::TransparentSky(v) => (&mut self.save_as_image_transparent_sky, v),
            SettingsChange::SegmentNamesAndWidths(v) => {
                (&mut self.save_as_image_segment_names_and_widths, v)
            }
            SettingsChange::StreetName(v) => (&mut self.save_as_image_street_name, v),
            SettingsChange::Watermark(v) => (&mut self.save_as_image_watermark, v),
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_reports_whether_the_value_moved() {
        let mut settings = UserSettings::default();
        assert!(settings.apply(SettingsChange::TransparentSky(true)));
        assert!(!settings.apply(SettingsChange::TransparentSky(true)));
        assert!(settings.save_as_image_transparent_sky);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: UserSettings =
            serde_json::from_str(r#"{"saveAsImageTransparentSky": true}"#).unwrap();
        assert!(settings.save_as_image_transparent_sky);
        assert!(settings.save_as_image_watermark);
        assert!(settings.save_as_image_street_name);
    }
}
