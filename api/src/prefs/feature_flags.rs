//! Runtime feature flags gating optional behavior.

use std::env;

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

/// The individual flags, named the way they appear in the environment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureFlag {
    /// Lets the user switch the export watermark off.
    ExportWatermark,
    /// Shows the custom DPI text box in the save-as-image dialog.
    SaveAsImageCustomDpi,
    /// Shows the upgrade funnel in the menu bar.
    BusinessPlan,
}

impl FeatureFlag {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ExportWatermark => "Allow the export watermark to be turned off",
            Self::SaveAsImageCustomDpi => "Custom DPI when saving as image",
            Self::BusinessPlan => "Upgrade funnel in the menu bar",
        }
    }

    fn default_value(&self) -> bool {
        match self {
            Self::ExportWatermark => true,
            Self::SaveAsImageCustomDpi => false,
            Self::BusinessPlan => false,
        }
    }
}

/// An error that can occur when parsing a flag value from text.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid flag value `{0}`, expected true/false/1/0")]
pub struct ParseFlagValueError(String);

pub fn parse_flag_value(raw: &str) -> Result<bool, ParseFlagValueError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Ok(false)
    } else {
        Err(ParseFlagValueError(raw.to_string()))
    }
}

/// The resolved value of every flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub export_watermark: bool,
    pub save_as_image_custom_dpi: bool,
    pub business_plan: bool,
}

impl FeatureFlags {
    /// Reads every flag from an environment variable of the same name
    /// (e.g. `EXPORT_WATERMARK=false`), falling back to the in-code default.
    /// Unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut flags = Self::defaults();
        for flag in FeatureFlag::iter() {
            let Some(raw) = lookup(flag.name()) else {
                continue;
            };
            match parse_flag_value(&raw) {
                Ok(value) => flags.set(flag, value),
                Err(e) => dioxus_logger::tracing::warn!("{}: {}", flag.name(), e),
            }
        }
        flags
    }

    fn defaults() -> Self {
        Self {
            export_watermark: FeatureFlag::ExportWatermark.default_value(),
            save_as_image_custom_dpi: FeatureFlag::SaveAsImageCustomDpi.default_value(),
            business_plan: FeatureFlag::BusinessPlan.default_value(),
        }
    }

    pub fn get(&self, flag: FeatureFlag) -> bool {
        match flag {
            FeatureFlag::ExportWatermark => self.export_watermark,
            FeatureFlag::SaveAsImageCustomDpi => self.save_as_image_custom_dpi,
            FeatureFlag::BusinessPlan => self.business_plan,
        }
    }

    pub fn set(&mut self, flag: FeatureFlag, value: bool) {
        match flag {
            FeatureFlag::ExportWatermark => self.export_watermark = value,
            FeatureFlag::SaveAsImageCustomDpi => self.save_as_image_custom_dpi = value,
            FeatureFlag::BusinessPlan => self.business_plan = value,
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::from_env()
    }
}
