//! Accent Badge Component
//!
//! Small bordered chip tinted with an organization's accent color, used
//! for district jurisdictions and association roles.

use barantrum_core::AccentToken;
use dioxus::prelude::*;

/// Alpha suffix for the badge fill (10%).
pub const BADGE_FILL_ALPHA: &str = "1A";

/// Inline style for a badge in the given accent.
pub fn badge_style(accent: AccentToken, bordered: bool) -> String {
    let border = if bordered {
        format!(" border: 1px solid {};", accent)
    } else {
        String::new()
    };
    format!(
        "color: {}; background-color: {};{}",
        accent,
        accent.tint(BADGE_FILL_ALPHA),
        border
    )
}

#[derive(Clone, PartialEq, Props)]
pub struct AccentBadgeProps {
    pub label: String,
    pub accent: AccentToken,
    #[props(default = true)]
    pub bordered: bool,
}

#[component]
pub fn AccentBadge(props: AccentBadgeProps) -> Element {
    let style = badge_style(props.accent, props.bordered);

    rsx! {
        span { class: "accent-badge", style: "{style}", "{props.label}" }
    }
}
