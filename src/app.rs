use barantrum_core::view::render;
use barantrum_core::{ArchiveState, LoadingPhase, TypingEffect, ViewChange, ViewContent, ViewState};
use dioxus::prelude::*;

use crate::components::{DossierOverlay, Layout, LoadingScreen};
use crate::context::{get_config, get_lore};
use crate::pages::{AssociationsView, DistrictsView, GlossaryView, IntroView, PersonnelView};
use crate::theme::GLOBAL_STYLES;

/// Drive the typing effect for a view change.
///
/// A restart blanks `typed` in the same step, so the next render cannot
/// show text left over from the previous run while the mirror task catches up.
fn apply_view_change(change: ViewChange, typing: &mut TypingEffect, typed: &mut String) {
    match change {
        ViewChange::RestartTyping => {
            typing.start();
            typed.clear();
        }
        ViewChange::StopTyping => typing.stop(),
        ViewChange::Unchanged => {}
    }
}

/// Root application component.
///
/// Owns the archive state and the intro typing effect, shows the loading
/// screen until the splash delay has passed, then renders the active view.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let lore = use_hook(get_lore);

    let mut phase = use_signal(|| {
        if config.skip_splash {
            LoadingPhase::Ready
        } else {
            LoadingPhase::Loading
        }
    });
    let mut archive = use_signal(|| ArchiveState::with_view(config.initial_view));
    let mut typed = use_signal(String::new);
    let intro = lore.intro.clone();
    let interval = config.typing_interval();
    let mut typing = use_signal(move || TypingEffect::new(intro, interval));

    use_context_provider(|| archive);

    // One-shot splash delay
    use_hook(move || {
        if !phase.peek().is_ready() {
            let delay = config.splash_duration();
            spawn(async move {
                tokio::time::sleep(delay).await;
                phase.with_mut(|p| p.finish());
            });
        }
    });

    // Mirror the typewriter buffer into a signal
    use_hook(move || {
        let mut rx = typing.peek().subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let text = rx.borrow_and_update().clone();
                typed.set(text);
            }
        });
    });

    // First activation of the intro once the archive is ready
    use_effect(move || {
        if phase().is_ready() && archive.peek().view() == ViewState::Intro {
            apply_view_change(ViewChange::RestartTyping, &mut typing.write(), &mut typed.write());
        }
    });

    let navigate = move |view: ViewState| {
        let change = archive.write().set_view(view);
        apply_view_change(change, &mut typing.write(), &mut typed.write());
    };

    if !phase().is_ready() {
        return rsx! {
            style { {GLOBAL_STYLES} }
            LoadingScreen {}
        };
    }

    let screen = render(&archive.read(), &lore, &typed.read());
    let view = screen.view;

    rsx! {
        style { {GLOBAL_STYLES} }
        Layout { current: view, on_navigate: navigate,
            div { class: "content-frame",
                div { class: "content-header",
                    h2 { class: "view-watermark", "{view}" }
                    div { class: "content-rule" }
                }

                match screen.content {
                    ViewContent::Intro(panel) => rsx! { IntroView { panel: panel } },
                    ViewContent::Districts(panels) => rsx! { DistrictsView { panels: panels } },
                    ViewContent::Associations(cards) => rsx! { AssociationsView { cards: cards } },
                    ViewContent::Personnel(cards) => rsx! { PersonnelView { cards: cards } },
                    ViewContent::Glossary(sections) => rsx! { GlossaryView { sections: sections } },
                }

                if let Some(overlay) = screen.overlay {
                    DossierOverlay {
                        overlay: overlay,
                        on_close: move |_| archive.write().dismiss(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use barantrum_core::LoreStore;

    use super::*;

    fn intro_panel(archive: &ArchiveState, lore: &LoreStore, typed: &str) -> (String, bool) {
        match render(archive, lore, typed).content {
            ViewContent::Intro(panel) => (panel.typed_text, panel.complete),
            other => panic!("expected intro content, got {:?}", other.view()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reentering_intro_renders_blank_buffer() {
        let lore = LoreStore {
            intro: "abc".to_string(),
            ..LoreStore::default()
        };
        let mut archive = ArchiveState::new();
        let mut typing = TypingEffect::new(lore.intro.as_str(), Duration::from_millis(10));
        let mut rx = typing.subscribe();
        let mut typed = String::new();

        apply_view_change(ViewChange::RestartTyping, &mut typing, &mut typed);
        tokio::time::sleep(Duration::from_millis(50)).await;
        typed = rx.borrow_and_update().clone();
        assert_eq!(intro_panel(&archive, &lore, &typed), ("abc".to_string(), true));

        let change = archive.set_view(ViewState::Districts);
        apply_view_change(change, &mut typing, &mut typed);
        assert_eq!(typed, "abc");

        // No mirror update has run yet; the render must already be blank.
        let change = archive.set_view(ViewState::Intro);
        apply_view_change(change, &mut typing, &mut typed);
        assert_eq!(intro_panel(&archive, &lore, &typed), (String::new(), false));

        tokio::time::sleep(Duration::from_millis(50)).await;
        typed = rx.borrow_and_update().clone();
        assert_eq!(intro_panel(&archive, &lore, &typed), ("abc".to_string(), true));
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_intro_freezes_buffer() {
        let mut typing = TypingEffect::new("abcdef", Duration::from_millis(10));
        let mut typed = String::new();

        apply_view_change(ViewChange::RestartTyping, &mut typing, &mut typed);
        tokio::time::sleep(Duration::from_millis(25)).await;
        apply_view_change(ViewChange::StopTyping, &mut typing, &mut typed);
        let frozen = typing.revealed();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(typing.revealed(), frozen);
        assert!(!typing.is_running());
    }
}
