//! Personnel File Modal
//!
//! A paper-colored dossier. Accent colors that would wash out on paper are
//! already swapped for ink in `CharacterDossier::text_accent`.

use barantrum_core::view::CharacterDossier;
use barantrum_ui::CloseButton;
use dioxus::prelude::*;

#[component]
pub fn CharacterModal(dossier: CharacterDossier, on_close: EventHandler<()>) -> Element {
    let character = dossier.character.clone();
    let text_accent = dossier.text_accent;
    let fill = dossier.affiliation_fill.clone();

    rsx! {
        div {
            class: "modal-overlay dark",
            onclick: move |_| on_close.call(()),

            div {
                class: "personnel-file",
                onclick: move |e| e.stop_propagation(),

                div { class: "stamp-top-secret", "TOP SECRET" }

                CloseButton {
                    onclick: move |_| on_close.call(()),
                    class: "file-close".to_string(),
                }

                div { class: "file-body",
                    div { class: "file-header",
                        div {
                            h2 { class: "file-title", "PERSONNEL FILE" }
                            p { class: "file-record", "CITY ARCHIVE // RECORD # {dossier.record_number}" }
                        }
                        div { class: "file-photo", "PHOTO" }
                    }

                    div { class: "file-grid",
                        div { class: "file-field",
                            label { "Subject Name" }
                            div { class: "file-value large", "{character.name}" }
                        }

                        div { class: "file-field",
                            label { "Affiliation" }
                            div {
                                class: "file-value large affiliation",
                                style: "background-color: {fill}; border-color: {text_accent};",
                                "{character.affiliation}"
                            }
                        }

                        div { class: "file-field",
                            label { "Current Location" }
                            div { class: "file-value", "\u{2316} {character.location}" }
                        }

                        div { class: "file-field wide appearance",
                            label { "Appearance Data" }
                            p { class: "preformatted", "{character.appearance}" }
                        }

                        div { class: "file-field wide",
                            label { style: "color: {text_accent};", "Personality Matrix" }
                            p { class: "personality-quote", "\"{character.personality}\"" }
                        }

                        if let Some(notes) = dossier.notes.clone() {
                            div { class: "file-field wide admin-notes",
                                label { class: "notes-label", "\u{26A0} Administrator Notes" }
                                p { class: "notes-text", "{notes}" }
                            }
                        }

                        div { class: "file-field wide resolve",
                            div { class: "resolve-header",
                                span { class: "resolve-title", "Resolve" }
                                span { class: "resolve-sub", "(각오)" }
                            }
                            p { class: "resolve-quote", "\"{character.resolve}\"" }
                        }
                    }

                    div { class: "file-footer",
                        span { "Classified Level 4" }
                        span { "Authorized By: [REDACTED]" }
                    }
                }
            }
        }
    }
}
