//! Reusable archive components.

mod accent_badge;
mod button;
mod glitch_text;
mod grid_background;

pub use accent_badge::*;
pub use button::*;
pub use glitch_text::*;
pub use grid_background::*;
