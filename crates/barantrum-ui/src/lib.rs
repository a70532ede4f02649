//! Barantrum City Archive UI Components
//!
//! Dioxus components for the archive's terminal-noir look.
//!
//! ## Palette
//!
//! - **Archive yellow (#FCEE0A)**: active navigation, frames, cursors
//! - **Gold (#FFD700)**: secondary labels and idle borders
//! - **Signal cyan (#00F0FF) / alarm red (#FF003C)**: glitch offsets
//! - **Near black (#050505)**: page background
//!
//! Organization colors come from `barantrum_core::accent` and are passed in
//! as `AccentToken`s, never hard-coded here.

pub mod components;

pub use components::*;
