//! Glitch Text Component
//!
//! Text with two chromatic copies stacked underneath. The copies are
//! invisible until hover, when they slide apart in cyan and red.

use dioxus::prelude::*;

/// Element used to wrap the glitch layers
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GlitchTag {
    H1,
    H2,
    H3,
    P,
    #[default]
    Span,
}

#[derive(Clone, PartialEq, Props)]
pub struct GlitchTextProps {
    pub text: String,
    #[props(default)]
    pub tag: GlitchTag,
    #[props(default)]
    pub class: Option<String>,
}

/// Hover-glitched heading or inline text.
///
/// ```rust,ignore
/// rsx! {
///     GlitchText { text: association.name.clone(), tag: GlitchTag::H3, class: "card-title".to_string() }
/// }
/// ```
#[component]
pub fn GlitchText(props: GlitchTextProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("glitch {}", extra),
        _ => "glitch".to_string(),
    };
    let text = props.text.clone();

    let layers = rsx! {
        span { class: "glitch-base", "{text}" }
        span { class: "glitch-layer glitch-cyan", "aria-hidden": "true", "{text}" }
        span { class: "glitch-layer glitch-red", "aria-hidden": "true", "{text}" }
    };

    match props.tag {
        GlitchTag::H1 => rsx! { h1 { class: "{class}", {layers} } },
        GlitchTag::H2 => rsx! { h2 { class: "{class}", {layers} } },
        GlitchTag::H3 => rsx! { h3 { class: "{class}", {layers} } },
        GlitchTag::P => rsx! { p { class: "{class}", {layers} } },
        GlitchTag::Span => rsx! { span { class: "{class}", {layers} } },
    }
}
