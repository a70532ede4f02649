//! Associations - faction cards. Clicking a card opens its dossier.

use barantrum_core::view::AssociationCard;
use barantrum_ui::{badge_style, GlitchTag, GlitchText};
use dioxus::prelude::*;

use crate::context::use_archive;

#[component]
pub fn AssociationsView(cards: Vec<AssociationCard>) -> Element {
    rsx! {
        div { class: "association-list",
            div { class: "view-hint", "* Click on an association card to view confidential details." }
            for card in cards {
                AssociationRow { key: "{card.association.name}", card: card.clone() }
            }
        }
    }
}

#[component]
fn AssociationRow(card: AssociationCard) -> Element {
    let mut archive = use_archive();
    let accent = card.accent;
    let role_style = badge_style(accent, false);
    let association = card.association.clone();

    rsx! {
        div {
            class: "association-card",
            style: "border-color: {accent};",
            onclick: move |_| archive.write().open_association(association.clone()),

            div { class: "association-watermark", "{card.index}" }

            div { class: "association-row",
                div { class: "sector-plate", style: "background-color: {accent};",
                    span { class: "sector-plate-label", "Sector" }
                    span { class: "sector-plate-code", "{card.sector}" }
                }

                div { class: "association-info",
                    div { class: "association-title-row",
                        GlitchText {
                            text: card.association.name.clone(),
                            tag: GlitchTag::H3,
                            class: "association-name".to_string(),
                        }
                        span { class: "association-role", style: "{role_style}",
                            "[{card.association.role}]"
                        }
                    }
                    p { class: "association-description", "{card.association.description}" }
                    span { class: "card-hint", "\u{2315} Click to open dossier" }
                }

                div { class: "association-meta",
                    span { class: "meta-chip", style: "color: {accent};", "HQ: {card.association.location}" }
                    span { class: "meta-chip", "STATUS: ACTIVE" }
                }
            }
        }
    }
}
