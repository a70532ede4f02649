//! UI Components for the Barantrum City Archive.

mod association_modal;
mod character_modal;
mod layout;
mod loading_screen;

pub use association_modal::AssociationModal;
pub use character_modal::CharacterModal;
pub use layout::Layout;
pub use loading_screen::LoadingScreen;

use barantrum_core::Overlay;
use dioxus::prelude::*;

/// Whichever dossier is open, or nothing.
#[component]
pub fn DossierOverlay(overlay: Overlay, on_close: EventHandler<()>) -> Element {
    match overlay {
        Overlay::Association(dossier) => rsx! {
            AssociationModal { dossier: dossier, on_close: on_close }
        },
        Overlay::Character(dossier) => rsx! {
            CharacterModal { dossier: dossier, on_close: on_close }
        },
    }
}
