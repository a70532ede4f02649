//! Archive navigation and selection state.
//!
//! One struct owns everything that changes during a session apart from the
//! typewriter buffer: the active view and the two dossier slots. Opening one
//! dossier closes the other, so at most one modal is ever on screen.

use crate::types::{Association, Character, ViewState};

/// What the caller must do after a view change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    /// Intro became (or stayed) active: restart the typing effect
    RestartTyping,
    /// Intro was left: tear the typing effect down
    StopTyping,
    /// Nothing to do for the typing effect
    Unchanged,
}

/// Which dossier overlay is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenModal {
    Association,
    Character,
}

/// Session state of the archive browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveState {
    view: ViewState,
    selected_association: Option<Association>,
    selected_character: Option<Character>,
}

impl ArchiveState {
    /// Fresh state on the intro view with no dossier open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state starting on `view`.
    pub fn with_view(view: ViewState) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn selected_association(&self) -> Option<&Association> {
        self.selected_association.as_ref()
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.selected_character.as_ref()
    }

    /// Switch views. Every view is reachable from every other view;
    /// selecting Intro again restarts the typing effect.
    pub fn set_view(&mut self, view: ViewState) -> ViewChange {
        let previous = std::mem::replace(&mut self.view, view);
        tracing::debug!(from = %previous, to = %view, "View changed");

        match (previous, view) {
            (_, ViewState::Intro) => ViewChange::RestartTyping,
            (ViewState::Intro, _) => ViewChange::StopTyping,
            _ => ViewChange::Unchanged,
        }
    }

    /// Open the association dossier. Closes any character dossier.
    pub fn open_association(&mut self, association: Association) {
        tracing::debug!(name = %association.name, "Opening association dossier");
        self.selected_character = None;
        self.selected_association = Some(association);
    }

    /// Open the personnel dossier. Closes any association dossier.
    pub fn open_character(&mut self, character: Character) {
        tracing::debug!(name = %character.name, "Opening personnel dossier");
        self.selected_association = None;
        self.selected_character = Some(character);
    }

    pub fn close_association(&mut self) {
        self.selected_association = None;
    }

    pub fn close_character(&mut self) {
        self.selected_character = None;
    }

    /// Close whichever dossier is open (close button or backdrop click).
    pub fn dismiss(&mut self) {
        if let Some(modal) = self.open_modal() {
            tracing::debug!(?modal, "Dismissing dossier");
        }
        self.selected_association = None;
        self.selected_character = None;
    }

    pub fn open_modal(&self) -> Option<OpenModal> {
        match (&self.selected_association, &self.selected_character) {
            (Some(_), _) => Some(OpenModal::Association),
            (None, Some(_)) => Some(OpenModal::Character),
            (None, None) => None,
        }
    }
}
