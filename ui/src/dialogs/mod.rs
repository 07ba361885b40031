//! Modal dialogs. At most one is open at a time; which one is decided by the
//! active dialog name in [`AppStateMut`](crate::app_state_mut::AppStateMut)
//! and resolved by the [`router`].

pub mod admin;
pub mod error;
pub mod feature_flags;
pub mod info;
pub mod metadata;
pub mod router;
pub mod save_as_image;
pub mod sign_in;

use std::str::FromStr;

use dioxus::prelude::*;

use admin::{AdminDialog, AdminMapDialog};
use feature_flags::FeatureFlagDialog;
use info::{
    AboutDialog, AnalyticsDialog, GeotagDialog, NewsletterDialog, SentimentSurveyDialog,
    UpgradeDialog, WhatsNewDialog,
};
use metadata::{MetadataDialog, MetadataMissingDialog};
use save_as_image::SaveAsImageDialog;
use sign_in::SignInDialog;

/// Every dialog the app knows, under the symbolic name used to open it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogKind {
    About,
    Analytics,
    FeatureFlags,
    Geotag,
    SaveAsImage,
    SignIn,
    WhatsNew,
    Newsletter,
    Upgrade,
    SentimentSurvey,
    Metadata,
    Admin,
    MetadataMissing,
    AdminMap,
}

impl DialogKind {
    /// Resolves a symbolic name such as `"SAVE_AS_IMAGE"`. Names are exact.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Renders the dialog. None of them take props.
    pub fn render(self) -> Element {
        match self {
            Self::About => rsx! { AboutDialog {} },
            Self::Analytics => rsx! { AnalyticsDialog {} },
            Self::FeatureFlags => rsx! { FeatureFlagDialog {} },
            Self::Geotag => rsx! { GeotagDialog {} },
            Self::SaveAsImage => rsx! { SaveAsImageDialog {} },
            Self::SignIn => rsx! { SignInDialog {} },
            Self::WhatsNew => rsx! { WhatsNewDialog {} },
            Self::Newsletter => rsx! { NewsletterDialog {} },
            Self::Upgrade => rsx! { UpgradeDialog {} },
            Self::SentimentSurvey => rsx! { SentimentSurveyDialog {} },
            Self::Metadata => rsx! { MetadataDialog {} },
            Self::Admin => rsx! { AdminDialog {} },
            Self::MetadataMissing => rsx! { MetadataMissingDialog {} },
            Self::AdminMap => rsx! { AdminMapDialog {} },
        }
    }
}
