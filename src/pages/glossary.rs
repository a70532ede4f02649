//! Glossary - terms grouped into four fixed sections.

use barantrum_core::view::GlossarySection;
use dioxus::prelude::*;

#[component]
pub fn GlossaryView(sections: Vec<GlossarySection>) -> Element {
    rsx! {
        div { class: "glossary-grid",
            for group in sections {
                section { key: "{group.category.as_str()}", class: "glossary-section",
                    h3 { class: "glossary-heading", "\u{2315} {group.title}" }
                    div { class: "glossary-terms",
                        for term in group.terms.iter() {
                            div { class: "glossary-term",
                                h4 {
                                    span { class: "term-label", "{term.term}" }
                                    if group.is_threat() {
                                        span { class: "threat-marker", "\u{2620}" }
                                    }
                                }
                                p { class: "term-definition", "{term.definition}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
