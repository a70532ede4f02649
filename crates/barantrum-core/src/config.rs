//! Runtime configuration for the archive browser.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::splash::DEFAULT_SPLASH_DURATION;
use crate::types::ViewState;
use crate::typewriter::DEFAULT_TYPING_INTERVAL;

/// Settings assembled from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// External lore file; the embedded asset is used when absent
    pub lore_path: Option<PathBuf>,
    /// View shown once the splash screen is gone
    pub initial_view: ViewState,
    /// Skip the loading screen entirely
    pub skip_splash: bool,
    pub typing_interval_ms: u64,
    pub splash_ms: u64,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            lore_path: None,
            initial_view: ViewState::Intro,
            skip_splash: false,
            typing_interval_ms: DEFAULT_TYPING_INTERVAL.as_millis() as u64,
            splash_ms: DEFAULT_SPLASH_DURATION.as_millis() as u64,
            window_width: 1280.0,
            window_height: 900.0,
        }
    }
}

impl ArchiveConfig {
    pub fn typing_interval(&self) -> Duration {
        // A zero interval would spin the driver task.
        Duration::from_millis(self.typing_interval_ms.max(1))
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }
}
