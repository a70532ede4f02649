//! Barantrum City Archive Core Library
//!
//! Lore model, archive navigation and the view rendering contract for the
//! city archive browser.
//!
//! ## Overview
//!
//! The archive is a read-only browser over a fixed lore asset. Apart from
//! the lore itself, a session holds very little state:
//!
//! - **View**: one of Intro, Districts, Associations, Personnel, Glossary
//! - **Dossier**: at most one open association or personnel file
//! - **Typewriter**: how much of the intro message has been revealed
//!
//! ## Quick Start
//!
//! ```ignore
//! use barantrum_core::{render, ArchiveState, LoreStore, ViewState};
//!
//! let lore = LoreStore::builtin()?;
//! let mut state = ArchiveState::new();
//! state.set_view(ViewState::Glossary);
//!
//! let screen = render(&state, &lore, "");
//! ```

pub mod accent;
pub mod archive;
pub mod config;
pub mod error;
pub mod logging;
pub mod lore;
pub mod splash;
pub mod types;
pub mod typewriter;
pub mod view;

// Re-exports
pub use accent::{accent_for, AccentToken, AFFILIATION_ACCENTS};
pub use archive::{ArchiveState, OpenModal, ViewChange};
pub use config::ArchiveConfig;
pub use error::{ArchiveError, ArchiveResult};
pub use lore::LoreStore;
pub use splash::{LoadingPhase, SplashProgress};
pub use typewriter::{TypeTick, Typewriter, TypingEffect};
pub use types::*;
pub use view::{render, Overlay, Screen, ViewContent};
