//! This crate contains the UI-free types shared by the street designer and
//! the helper used to talk to the street API.

pub mod client;
pub mod prefs;
pub mod street_extension;
pub mod user;

pub use client::ApiClient;

pub type ApiError = anyhow::Error;
