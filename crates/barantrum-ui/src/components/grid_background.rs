//! Grid Background Component
//!
//! The faint square grid behind every archive screen, optionally tilted
//! into a floor plane for the loading screen.

use dioxus::prelude::*;

/// Properties for the GridBackground component
#[derive(Clone, PartialEq, Props)]
pub struct GridBackgroundProps {
    /// Cell size in pixels (default: 40)
    #[props(default = 40)]
    pub cell: u32,
    /// Opacity of the grid (default: 0.2)
    #[props(default = 0.2)]
    pub opacity: f32,
    /// Line color (default: dark gray)
    #[props(default = "rgba(40,40,40,0.8)".to_string())]
    pub line_color: String,
    /// Tilt into a perspective floor
    #[props(default = false)]
    pub perspective: bool,
}

/// Inline style for the grid layer.
pub fn grid_style(cell: u32, opacity: f32, line_color: &str, perspective: bool) -> String {
    let transform = if perspective {
        " transform: perspective(500px) rotateX(60deg) translateY(-100px) scale(2);"
    } else {
        ""
    };
    format!(
        "opacity: {opacity}; background-image: linear-gradient({line_color} 1px, transparent 1px), \
         linear-gradient(90deg, {line_color} 1px, transparent 1px); \
         background-size: {cell}px {cell}px;{transform}"
    )
}

#[component]
pub fn GridBackground(props: GridBackgroundProps) -> Element {
    let style = grid_style(props.cell, props.opacity, &props.line_color, props.perspective);

    rsx! {
        div { class: "grid-bg", "aria-hidden": "true", style: "{style}" }
    }
}
