pub mod feature_flags;
pub mod user_settings;
