//! Association Dossier Modal
//!
//! Dark, accent-framed detail view for an organization. Clicking the
//! backdrop or the close button dismisses it.

use barantrum_core::view::AssociationDossier;
use barantrum_ui::CloseButton;
use dioxus::prelude::*;

/// Association dossier overlay.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AssociationModal {
///         dossier: dossier,
///         on_close: move |_| archive.write().dismiss(),
///     }
/// }
/// ```
#[component]
pub fn AssociationModal(dossier: AssociationDossier, on_close: EventHandler<()>) -> Element {
    let accent = dossier.accent;
    let faint = accent.tint("44");
    let glow = accent.tint("33");
    let association = dossier.association;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "association-modal",
                style: "border-color: {accent}; box-shadow: 0 0 30px {glow};",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "modal-hatching",
                    style: "background-image: repeating-linear-gradient(45deg, {accent} 0, {accent} 1px, transparent 0, transparent 50%);",
                }

                CloseButton {
                    onclick: move |_| on_close.call(()),
                    color: accent.to_string(),
                    class: "modal-close".to_string(),
                }

                div { class: "modal-body",
                    div { class: "association-modal-header", style: "border-color: {faint};",
                        div { class: "association-emblem", style: "border-color: {accent}; color: {accent};",
                            "\u{25A6}"
                        }
                        div {
                            h2 { class: "association-modal-name", style: "color: {accent};",
                                "{association.name}"
                            }
                            div { class: "association-modal-tags",
                                span { class: "tag-muted", "HQ: {association.location}" }
                                span { class: "tag-outlined", style: "border-color: {accent};",
                                    "ROLE: {association.role}"
                                }
                            }
                        }
                    }

                    div { class: "association-modal-grid",
                        div { class: "association-modal-main",
                            h3 { class: "modal-section-title",
                                span { style: "color: {accent};", ">_ " }
                                "ARCHIVE DATA"
                            }
                            p { class: "association-modal-description", "{association.description}" }

                            div { class: "system-note", style: "border-color: {faint};",
                                p { class: "system-note-label", "SYSTEM NOTE:" }
                                p { class: "system-note-text",
                                    "This organization operates under City Protocol 2077. Direct interference with {association.name} operations without proper clearance is a Class B violation."
                                }
                            }
                        }

                        div { class: "association-modal-side", style: "border-color: {faint};",
                            div {
                                span { class: "side-label", "SECURITY LEVEL" }
                                div { class: "side-grade", style: "color: {accent};", "Grade A+" }
                            }
                            div {
                                span { class: "side-label", "JURISDICTION" }
                                div { class: "side-value", "{association.location}" }
                            }
                            div {
                                span { class: "side-label", "STATUS" }
                                div { class: "side-status",
                                    span { class: "status-pulse" }
                                    "OPERATIONAL"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
