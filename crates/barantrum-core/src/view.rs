//! View rendering contract.
//!
//! [`render`] maps the archive state and the lore store onto a [`Screen`]:
//! one content branch for the active view plus an optional dossier overlay.
//! The desktop shell paints a `Screen` without making any decisions of its
//! own, so everything here is plain data and easy to assert on.

use crate::accent::{accent_for, AccentToken};
use crate::archive::ArchiveState;
use crate::lore::LoreStore;
use crate::types::{Association, Character, District, Term, TermCategory, ViewState};

/// Fill used behind the affiliation on the paper dossier when the accent is
/// too pale to tint.
pub const LIGHT_AFFILIATION_FILL: &str = "#E5E5E5";

/// Everything visible for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub view: ViewState,
    pub content: ViewContent,
    pub overlay: Option<Overlay>,
}

/// Content branch for the active view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewContent {
    Intro(IntroPanel),
    Districts(Vec<DistrictPanel>),
    Associations(Vec<AssociationCard>),
    Personnel(Vec<PersonnelCard>),
    Glossary(Vec<GlossarySection>),
}

impl ViewContent {
    /// The view this branch belongs to.
    pub fn view(&self) -> ViewState {
        match self {
            ViewContent::Intro(_) => ViewState::Intro,
            ViewContent::Districts(_) => ViewState::Districts,
            ViewContent::Associations(_) => ViewState::Associations,
            ViewContent::Personnel(_) => ViewState::Personnel,
            ViewContent::Glossary(_) => ViewState::Glossary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroPanel {
    pub typed_text: String,
    pub complete: bool,
}

/// An affiliation name chip tinted with its accent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentBadge {
    pub label: String,
    pub accent: AccentToken,
}

impl AccentBadge {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let accent = accent_for(&label);
        Self { label, accent }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictPanel {
    pub district: District,
    /// Jurisdiction chips; empty means the section is omitted
    pub badges: Vec<AccentBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationCard {
    pub association: Association,
    /// Zero-padded 1-based position, shown as a watermark
    pub index: String,
    pub sector: String,
    pub accent: AccentToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonnelCard {
    pub character: Character,
    pub accent: AccentToken,
    pub record_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossarySection {
    pub category: TermCategory,
    pub title: &'static str,
    pub terms: Vec<Term>,
}

impl GlossarySection {
    /// Entity terms get a threat marker.
    pub fn is_threat(&self) -> bool {
        self.category == TermCategory::Entity
    }
}

/// Dossier overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Association(AssociationDossier),
    Character(CharacterDossier),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationDossier {
    pub association: Association,
    pub accent: AccentToken,
}

/// Personnel file rendered on a light paper background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDossier {
    pub character: Character,
    pub accent: AccentToken,
    /// Legible text color on paper
    pub text_accent: AccentToken,
    /// Background behind the affiliation field
    pub affiliation_fill: String,
    pub record_number: String,
    pub notes: Option<String>,
}

impl CharacterDossier {
    pub fn new(character: &Character) -> Self {
        let accent = accent_for(&character.affiliation);
        let affiliation_fill = if accent.is_light() {
            LIGHT_AFFILIATION_FILL.to_string()
        } else {
            accent.tint("33")
        };
        Self {
            accent,
            text_accent: accent.text_on_light(),
            affiliation_fill,
            record_number: record_number(&character.name),
            notes: character.notes().map(str::to_string),
            character: character.clone(),
        }
    }
}

/// Stable short identifier for a personnel card, derived from the name.
pub fn record_id(name: &str) -> String {
    let hash = blake3::hash(name.as_bytes());
    hex::encode_upper(&hash.as_bytes()[..5])[..9].to_string()
}

/// Eight-digit archive record number, derived from the name.
pub fn record_number(name: &str) -> String {
    let hash = blake3::hash(name.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    format!("{:08}", u64::from_le_bytes(bytes) % 100_000_000)
}

/// Render the archive. `typed` is the typewriter buffer for the intro view.
pub fn render(state: &ArchiveState, lore: &LoreStore, typed: &str) -> Screen {
    let view = state.view();
    let content = match view {
        ViewState::Intro => ViewContent::Intro(IntroPanel {
            typed_text: typed.to_string(),
            complete: typed == lore.intro,
        }),
        ViewState::Districts => ViewContent::Districts(render_districts(lore)),
        ViewState::Associations => ViewContent::Associations(render_associations(lore)),
        ViewState::Personnel => ViewContent::Personnel(render_personnel(lore)),
        ViewState::Glossary => ViewContent::Glossary(render_glossary(lore)),
    };

    Screen {
        view,
        content,
        overlay: render_overlay(state),
    }
}

pub fn render_districts(lore: &LoreStore) -> Vec<DistrictPanel> {
    lore.districts
        .iter()
        .map(|district| DistrictPanel {
            badges: district.affiliations().iter().map(AccentBadge::new).collect(),
            district: district.clone(),
        })
        .collect()
}

pub fn render_associations(lore: &LoreStore) -> Vec<AssociationCard> {
    lore.associations
        .iter()
        .enumerate()
        .map(|(idx, association)| AssociationCard {
            index: format!("{:02}", idx + 1),
            sector: association.sector(),
            accent: accent_for(&association.name),
            association: association.clone(),
        })
        .collect()
}

pub fn render_personnel(lore: &LoreStore) -> Vec<PersonnelCard> {
    lore.characters
        .iter()
        .map(|character| PersonnelCard {
            accent: accent_for(&character.affiliation),
            record_id: record_id(&character.name),
            character: character.clone(),
        })
        .collect()
}

pub fn render_glossary(lore: &LoreStore) -> Vec<GlossarySection> {
    TermCategory::DISPLAY_ORDER
        .into_iter()
        .map(|category| GlossarySection {
            category,
            title: category.title(),
            terms: lore.terms_in(category).cloned().collect(),
        })
        .collect()
}

pub fn render_overlay(state: &ArchiveState) -> Option<Overlay> {
    if let Some(association) = state.selected_association() {
        return Some(Overlay::Association(AssociationDossier {
            accent: accent_for(&association.name),
            association: association.clone(),
        }));
    }
    state
        .selected_character()
        .map(|character| Overlay::Character(CharacterDossier::new(character)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_is_stable() {
        let a = record_id("K-07");
        assert_eq!(a, record_id("K-07"));
        assert_eq!(a.len(), 9);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        assert_ne!(a, record_id("K-08"));
    }

    #[test]
    fn test_record_number_is_eight_digits() {
        let n = record_number("K-07");
        assert_eq!(n.len(), 8);
        assert!(n.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(n, record_number("K-07"));
    }

    #[test]
    fn test_light_affiliation_falls_back_to_ink() {
        let character = Character {
            name: "S".to_string(),
            affiliation: "세르다 협회".to_string(),
            location: "2구역".to_string(),
            personality: String::new(),
            appearance: String::new(),
            notes: None,
            resolve: String::new(),
        };
        let dossier = CharacterDossier::new(&character);
        assert_eq!(dossier.accent, AccentToken::WHITE);
        assert_eq!(dossier.text_accent, AccentToken::INK);
        assert_eq!(dossier.affiliation_fill, LIGHT_AFFILIATION_FILL);
        assert!(dossier.notes.is_none());
    }

    #[test]
    fn test_dark_affiliation_keeps_accent() {
        let character = Character {
            name: "D".to_string(),
            affiliation: "데이갈 협회".to_string(),
            location: "3구역".to_string(),
            personality: String::new(),
            appearance: String::new(),
            notes: Some("do not engage".to_string()),
            resolve: String::new(),
        };
        let dossier = CharacterDossier::new(&character);
        assert_eq!(dossier.text_accent, AccentToken::RED);
        assert_eq!(dossier.affiliation_fill, "#FF444433");
        assert_eq!(dossier.notes.as_deref(), Some("do not engage"));
    }
}
