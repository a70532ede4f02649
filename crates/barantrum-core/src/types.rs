//! Core types for the Barantrum City Archive

use serde::{Deserialize, Serialize};

use crate::error::ArchiveError;

/// A city district (sector).
///
/// `associations` references organizations by name only; nothing checks
/// that the names exist in the association table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// Short sector code, unique within the archive
    pub id: String,
    pub name: String,
    pub description: String,
    /// Organizations holding jurisdiction here, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associations: Option<Vec<String>>,
}

impl District {
    /// Affiliated organization names, empty when the list is absent.
    pub fn affiliations(&self) -> &[String] {
        self.associations.as_deref().unwrap_or(&[])
    }
}

/// A faction or organization. `name` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub name: String,
    /// Headquarters location label (e.g. "3구역")
    pub location: String,
    pub description: String,
    pub role: String,
}

impl Association {
    /// Sector code shown on the association card: the location with the
    /// district suffix removed.
    pub fn sector(&self) -> String {
        self.location.replacen(DISTRICT_SUFFIX, "", 1)
    }
}

/// Suffix appended to sector numbers in location labels.
pub const DISTRICT_SUFFIX: &str = "구역";

/// A personnel dossier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Association or office name; free text
    pub affiliation: String,
    pub location: String,
    pub personality: String,
    pub appearance: String,
    /// Administrator notes, omitted from the dossier when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Short quote
    pub resolve: String,
}

impl Character {
    /// Notes if present and non-blank.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Glossary category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    General,
    Entity,
    Combat,
    Org,
}

impl TermCategory {
    /// Display order of glossary sections.
    pub const DISPLAY_ORDER: [TermCategory; 4] = [
        TermCategory::General,
        TermCategory::Entity,
        TermCategory::Org,
        TermCategory::Combat,
    ];

    /// Section heading for this category.
    pub fn title(&self) -> &'static str {
        match self {
            TermCategory::General => "General Knowledge",
            TermCategory::Entity => "Threats & Entities",
            TermCategory::Org => "Organizations & Structures",
            TermCategory::Combat => "Combat & Regulations",
        }
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TermCategory::General => "general",
            TermCategory::Entity => "entity",
            TermCategory::Combat => "combat",
            TermCategory::Org => "org",
        }
    }
}

/// A glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub term: String,
    pub definition: String,
    pub category: TermCategory,
}

/// Top-level archive view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViewState {
    #[default]
    Intro,
    Districts,
    Associations,
    Personnel,
    Glossary,
}

impl ViewState {
    /// All views in navigation bar order.
    pub const ALL: [ViewState; 5] = [
        ViewState::Intro,
        ViewState::Districts,
        ViewState::Associations,
        ViewState::Personnel,
        ViewState::Glossary,
    ];

    /// Navigation label, also used as the watermark heading.
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Intro => "INTRO",
            ViewState::Districts => "DISTRICTS",
            ViewState::Associations => "ASSOCIATIONS",
            ViewState::Personnel => "PERSONNEL",
            ViewState::Glossary => "GLOSSARY",
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ViewState {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewState::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ArchiveError::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_default_is_intro() {
        assert_eq!(ViewState::default(), ViewState::Intro);
    }

    #[test]
    fn test_view_state_parse() {
        assert_eq!("personnel".parse::<ViewState>().unwrap(), ViewState::Personnel);
        assert_eq!(" GLOSSARY ".parse::<ViewState>().unwrap(), ViewState::Glossary);
        assert!(matches!(
            "ARCHIVE".parse::<ViewState>(),
            Err(ArchiveError::UnknownView(_))
        ));
    }

    #[test]
    fn test_view_state_serde_uses_labels() {
        for view in ViewState::ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.label()));
        }
    }

    #[test]
    fn test_term_category_serde() {
        let term: Term = serde_json::from_str(
            r#"{"term":"Hollow","definition":"A gap","category":"entity"}"#,
        )
        .unwrap();
        assert_eq!(term.category, TermCategory::Entity);
        assert_eq!(term.category.as_str(), "entity");
    }

    #[test]
    fn test_district_missing_associations() {
        let district: District =
            serde_json::from_str(r#"{"id":"07","name":"Docks","description":"Wet"}"#).unwrap();
        assert!(district.associations.is_none());
        assert!(district.affiliations().is_empty());
    }

    #[test]
    fn test_association_sector_strips_suffix() {
        let assoc = Association {
            name: "데이갈 협회".to_string(),
            location: "3구역".to_string(),
            description: String::new(),
            role: String::new(),
        };
        assert_eq!(assoc.sector(), "3");
    }

    #[test]
    fn test_association_sector_strips_first_suffix_only() {
        let assoc = Association {
            name: "나홈 협회".to_string(),
            location: "9구역 외곽구역".to_string(),
            description: String::new(),
            role: String::new(),
        };
        assert_eq!(assoc.sector(), "9 외곽구역");
    }

    #[test]
    fn test_blank_notes_treated_as_absent() {
        let mut character = Character {
            name: "A".to_string(),
            affiliation: "무소속".to_string(),
            location: "1구역".to_string(),
            personality: String::new(),
            appearance: String::new(),
            notes: Some("   ".to_string()),
            resolve: String::new(),
        };
        assert_eq!(character.notes(), None);
        character.notes = Some("watch closely".to_string());
        assert_eq!(character.notes(), Some("watch closely"));
    }
}
