//! Startup splash screen.
//!
//! The archive shows a loading screen for a fixed delay before the first
//! view appears. The delay is a one-shot: `Loading` becomes `Ready` exactly
//! once and never goes back. The progress bar is cosmetic and fills in
//! random steps while the delay runs.

use std::time::Duration;

use rand::Rng;

/// Default splash duration.
pub const DEFAULT_SPLASH_DURATION: Duration = Duration::from_millis(2500);

/// How often the cosmetic progress bar advances.
pub const PROGRESS_STEP_INTERVAL: Duration = Duration::from_millis(150);

/// Largest single progress increment, in percent.
const MAX_PROGRESS_STEP: f32 = 15.0;

/// Startup phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadingPhase {
    /// Advance to `Ready`. Returns `true` only on the first call.
    pub fn finish(&mut self) -> bool {
        match self {
            LoadingPhase::Loading => {
                *self = LoadingPhase::Ready;
                tracing::info!("Archive ready");
                true
            }
            LoadingPhase::Ready => false,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadingPhase::Ready)
    }
}

/// Cosmetic loading bar state, 0..=100 percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplashProgress {
    percent: f32,
}

impl SplashProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Whole-number percentage for the status readout.
    pub fn display_percent(&self) -> u8 {
        self.percent.floor() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Step forward by a random amount, capped at 100.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        if !self.is_complete() {
            let step = rng.random_range(0.0..MAX_PROGRESS_STEP);
            self.percent = (self.percent + step).min(100.0);
        }
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_phase_finishes_once() {
        let mut phase = LoadingPhase::default();
        assert!(!phase.is_ready());
        assert!(phase.finish());
        assert!(phase.is_ready());
        assert!(!phase.finish());
        assert!(phase.is_ready());
    }

    #[test]
    fn test_progress_is_monotone_and_capped() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut progress = SplashProgress::new();
        let mut last = progress.percent();

        for _ in 0..1_000 {
            let now = progress.advance(&mut rng);
            assert!(now >= last);
            assert!(now <= 100.0);
            last = now;
        }
        assert!(progress.is_complete());
        assert_eq!(progress.display_percent(), 100);
    }

    #[test]
    fn test_display_percent_floors() {
        let progress = SplashProgress { percent: 42.9 };
        assert_eq!(progress.display_percent(), 42);
    }
}
