//! Intro - the incoming message, typed out one character at a time.

use barantrum_core::view::IntroPanel;
use dioxus::prelude::*;

#[component]
pub fn IntroView(panel: IntroPanel) -> Element {
    let cursor_class = if panel.complete { "type-cursor idle" } else { "type-cursor" };

    rsx! {
        div { class: "intro-view",
            div { class: "intro-banner",
                h2 { ">_ Incoming Encrypted Message" }
            }
            div { class: "intro-terminal",
                div { class: "terminal-scanline" }
                "{panel.typed_text}"
                span { class: "{cursor_class}" }
            }
        }
    }
}
