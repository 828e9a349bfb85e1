//! Pokemon card lookup TUI
//!
//! Type a name or dex number, get the card: sprite, height, weight, types.
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod format;
pub mod reducer;
pub mod sprite;
pub mod sprite_backend;
pub mod state;
