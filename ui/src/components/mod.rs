//! Shared building blocks for dialogs and menus.
pub mod pico;
