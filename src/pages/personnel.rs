//! Personnel - dossier cards. Clicking a card opens the personnel file.

use barantrum_core::view::PersonnelCard;
use barantrum_ui::{GlitchTag, GlitchText};
use dioxus::prelude::*;

use crate::context::use_archive;

#[component]
pub fn PersonnelView(cards: Vec<PersonnelCard>) -> Element {
    rsx! {
        div { class: "personnel-grid",
            for card in cards {
                PersonnelTile { key: "{card.character.name}", card: card.clone() }
            }
        }
    }
}

#[component]
fn PersonnelTile(card: PersonnelCard) -> Element {
    let mut archive = use_archive();
    let accent = card.accent;
    let character = card.character.clone();

    rsx! {
        div {
            class: "personnel-card",
            style: "color: {accent};",
            onclick: move |_| archive.write().open_character(character.clone()),

            div { class: "personnel-id", "ID: {card.record_id}" }

            div { class: "personnel-head",
                div { class: "personnel-avatar", "\u{25C9}" }
                div {
                    GlitchText {
                        text: card.character.name.clone(),
                        tag: GlitchTag::H3,
                        class: "personnel-name".to_string(),
                    }
                    div { class: "personnel-affiliation", style: "color: {accent};",
                        "{card.character.affiliation}"
                    }
                    div { class: "personnel-location", "\u{2316} {card.character.location}" }
                }
            }

            div { class: "personnel-body",
                span { class: "personnel-label", style: "color: {accent};", "Personality Matrix" }
                p { class: "personnel-personality", "{card.character.personality}" }
                div { class: "card-hint centered", "[ ACCESS FULL RECORD ]" }
            }
        }
    }
}
