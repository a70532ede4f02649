//! Archive context for the desktop shell.
//!
//! The app root owns the session state and shares it with every page
//! through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut archive = use_archive();
//! archive.write().open_character(character);
//! ```

use std::sync::Arc;

use barantrum_core::{ArchiveConfig, ArchiveState, LoreStore};
use dioxus::prelude::*;

/// Get the lore store loaded at startup.
pub fn get_lore() -> Arc<LoreStore> {
    crate::get_lore()
}

/// Get the runtime configuration.
pub fn get_config() -> ArchiveConfig {
    crate::get_config()
}

/// Hook to access the archive navigation and dossier state.
pub fn use_archive() -> Signal<ArchiveState> {
    use_context::<Signal<ArchiveState>>()
}

