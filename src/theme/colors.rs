//! Color constants for inline styles.
//!
//! Everything else lives as CSS custom properties in `styles.rs`.

// === GRID ===
pub const GRID_LINE: &str = "rgba(40,40,40,0.8)";
pub const GRID_LINE_FLOOR: &str = "#333";
