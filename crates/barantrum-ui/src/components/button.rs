//! Button Components
//!
//! - Nav: skewed tab in the main navigation bar
//! - Close: the X in the corner of a dossier

use dioxus::prelude::*;

/// Navigation tab state
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NavButtonState {
    #[default]
    Idle,
    Active,
}

impl NavButtonState {
    pub fn from_active(active: bool) -> Self {
        if active {
            NavButtonState::Active
        } else {
            NavButtonState::Idle
        }
    }

    /// Returns the CSS class for this state
    pub fn class(&self) -> &'static str {
        match self {
            NavButtonState::Idle => "nav-btn",
            NavButtonState::Active => "nav-btn active",
        }
    }
}

/// Properties for the NavButton component
#[derive(Clone, PartialEq, Props)]
pub struct NavButtonProps {
    pub label: String,
    #[props(default = false)]
    pub active: bool,
    pub onclick: EventHandler<()>,
}

/// Skewed navigation tab.
///
/// The label is counter-skewed so the text stays upright.
///
/// ```rust,ignore
/// rsx! {
///     NavButton {
///         label: "GLOSSARY".to_string(),
///         active: view == ViewState::Glossary,
///         onclick: move |_| navigate(ViewState::Glossary),
///     }
/// }
/// ```
#[component]
pub fn NavButton(props: NavButtonProps) -> Element {
    let state = NavButtonState::from_active(props.active);

    rsx! {
        button {
            class: "{state.class()}",
            r#type: "button",
            "aria-pressed": if props.active { "true" } else { "false" },
            onclick: move |_| props.onclick.call(()),
            span { class: "nav-btn-label", "{props.label}" }
        }
    }
}

/// Close button with X icon
#[derive(Clone, PartialEq, Props)]
pub struct CloseButtonProps {
    pub onclick: EventHandler<()>,
    /// Icon color; inherits when absent
    #[props(default)]
    pub color: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn CloseButton(props: CloseButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "close-btn".to_string()
    } else {
        format!("close-btn {}", extra_class)
    };
    let style = props
        .color
        .as_deref()
        .map(|c| format!("color: {c};"))
        .unwrap_or_default();

    rsx! {
        button {
            class: "{full_class}",
            style: "{style}",
            "aria-label": "Close",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            "\u{2715}"
        }
    }
}
