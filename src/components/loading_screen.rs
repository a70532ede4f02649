//! Loading Screen
//!
//! Shown while the splash delay runs. The bar fills in random steps and is
//! purely decorative; the app root decides when loading is over.

use barantrum_core::splash::PROGRESS_STEP_INTERVAL;
use barantrum_core::SplashProgress;
use barantrum_ui::GridBackground;
use dioxus::prelude::*;

use crate::theme::colors;

#[component]
pub fn LoadingScreen() -> Element {
    let mut progress = use_signal(SplashProgress::new);

    use_hook(move || {
        spawn(async move {
            let mut rng = rand::rng();
            loop {
                tokio::time::sleep(PROGRESS_STEP_INTERVAL).await;
                progress.with_mut(|p| p.advance(&mut rng));
                if progress.peek().is_complete() {
                    break;
                }
            }
        });
    });

    let percent = progress().percent();
    let display = progress().display_percent();

    rsx! {
        div { class: "loading-screen",
            GridBackground { line_color: colors::GRID_LINE_FLOOR.to_string(), perspective: true }

            div { class: "loading-body",
                div { class: "loading-emblem",
                    div { class: "loading-glow" }
                    span { class: "loading-icon", "\u{25A3}" }
                }

                h1 { class: "loading-title", "BARANTRUM" }

                div { class: "loading-subtitle",
                    span { class: "loading-pip" }
                    "SYSTEM INITIALIZATION"
                    span { class: "loading-pip" }
                }

                div { class: "loading-track",
                    div { class: "loading-fill", style: "width: {percent}%;" }
                }

                div { class: "loading-status",
                    span { "Loading Assets..." }
                    span { class: "loading-percent", "{display}%" }
                }
            }
        }
    }
}
