//! Rendering contract tests
//!
//! These tests drive the archive state the way the desktop shell does and
//! check the content tree produced for each view.

use barantrum_core::view::{render_districts, render_glossary, CharacterDossier};
use barantrum_core::{
    accent_for, render, AccentToken, ArchiveState, Association, Character, District, LoreStore,
    Overlay, Term, TermCategory, ViewContent, ViewState,
};

// ============================================================================
// Fixtures
// ============================================================================

fn term(name: &str, category: TermCategory) -> Term {
    Term {
        term: name.to_string(),
        definition: format!("definition of {name}"),
        category,
    }
}

fn district(id: &str, associations: Option<Vec<&str>>) -> District {
    District {
        id: id.to_string(),
        name: format!("district {id}"),
        description: String::new(),
        associations: associations.map(|names| names.into_iter().map(str::to_string).collect()),
    }
}

fn character(name: &str, affiliation: &str) -> Character {
    Character {
        name: name.to_string(),
        affiliation: affiliation.to_string(),
        location: "3구역".to_string(),
        personality: "steady".to_string(),
        appearance: "plain".to_string(),
        notes: None,
        resolve: "onward".to_string(),
    }
}

fn builtin() -> LoreStore {
    LoreStore::builtin().expect("embedded lore parses")
}

// ============================================================================
// View branches
// ============================================================================

/// Every view renders its own branch and nothing else
#[test]
fn test_each_view_renders_its_branch() {
    let lore = builtin();
    for view in ViewState::ALL {
        let state = ArchiveState::with_view(view);
        let screen = render(&state, &lore, "");
        assert_eq!(screen.view, view);
        assert_eq!(screen.content.view(), view);
        assert!(screen.overlay.is_none());
    }
}

#[test]
fn test_intro_shows_typed_buffer() {
    let lore = builtin();
    let state = ArchiveState::new();

    let partial: String = lore.intro.chars().take(5).collect();
    let screen = render(&state, &lore, &partial);
    match screen.content {
        ViewContent::Intro(panel) => {
            assert_eq!(panel.typed_text, partial);
            assert!(!panel.complete);
        }
        other => panic!("expected intro, got {:?}", other.view()),
    }

    let screen = render(&state, &lore, &lore.intro);
    match screen.content {
        ViewContent::Intro(panel) => assert!(panel.complete),
        other => panic!("expected intro, got {:?}", other.view()),
    }
}

// ============================================================================
// Glossary
// ============================================================================

/// Terms are grouped by category in input order; empty categories stay
#[test]
fn test_glossary_partitions_by_category() {
    let lore = LoreStore {
        terms: vec![
            term("t1", TermCategory::General),
            term("t2", TermCategory::Entity),
            term("t3", TermCategory::General),
        ],
        ..LoreStore::default()
    };

    let sections = render_glossary(&lore);
    let categories: Vec<TermCategory> = sections.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            TermCategory::General,
            TermCategory::Entity,
            TermCategory::Org,
            TermCategory::Combat,
        ]
    );

    let names = |idx: usize| -> Vec<&str> {
        sections[idx].terms.iter().map(|t| t.term.as_str()).collect()
    };
    assert_eq!(names(0), vec!["t1", "t3"]);
    assert_eq!(names(1), vec!["t2"]);
    assert!(sections[2].terms.is_empty());
    assert!(sections[3].terms.is_empty());

    assert!(sections[1].is_threat());
    assert!(!sections[0].is_threat());
}

#[test]
fn test_glossary_with_no_terms_still_has_four_sections() {
    let sections = render_glossary(&LoreStore::default());
    assert_eq!(sections.len(), 4);
    assert!(sections.iter().all(|s| s.terms.is_empty()));
}

// ============================================================================
// Districts
// ============================================================================

#[test]
fn test_district_badges() {
    let lore = LoreStore {
        districts: vec![
            district("01", None),
            district("02", Some(vec![])),
            district("03", Some(vec!["X", "Y"])),
        ],
        ..LoreStore::default()
    };

    let panels = render_districts(&lore);
    assert_eq!(panels.len(), 3);
    assert!(panels[0].badges.is_empty());
    assert!(panels[1].badges.is_empty());

    let labels: Vec<&str> = panels[2].badges.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["X", "Y"]);
    assert!(panels[2].badges.iter().all(|b| b.accent == AccentToken::DEFAULT));
}

#[test]
fn test_district_badges_use_affiliation_accent() {
    let lore = LoreStore {
        districts: vec![district("03", Some(vec!["데이갈 협회", "미끼먹이 조합"]))],
        ..LoreStore::default()
    };
    let panels = render_districts(&lore);
    assert_eq!(panels[0].badges[0].accent, AccentToken::RED);
    assert_eq!(panels[0].badges[1].accent, AccentToken::YELLOW_GREEN);
}

// ============================================================================
// Associations & personnel
// ============================================================================

#[test]
fn test_association_cards() {
    let lore = builtin();
    let state = ArchiveState::with_view(ViewState::Associations);
    let screen = render(&state, &lore, "");

    let ViewContent::Associations(cards) = screen.content else {
        panic!("expected associations");
    };
    assert_eq!(cards.len(), lore.associations.len());
    assert_eq!(cards[0].index, "01");
    for card in &cards {
        assert_eq!(card.accent, accent_for(&card.association.name));
        assert!(!card.sector.contains("구역"));
    }
}

#[test]
fn test_builtin_associations_all_have_signature_accents() {
    let lore = builtin();
    for association in &lore.associations {
        assert_ne!(
            accent_for(&association.name),
            AccentToken::DEFAULT,
            "{} has no accent",
            association.name
        );
    }
}

#[test]
fn test_personnel_cards() {
    let lore = builtin();
    let state = ArchiveState::with_view(ViewState::Personnel);
    let screen = render(&state, &lore, "");

    let ViewContent::Personnel(cards) = screen.content else {
        panic!("expected personnel");
    };
    assert_eq!(cards.len(), lore.characters.len());
    for card in &cards {
        assert_eq!(card.accent, accent_for(&card.character.affiliation));
        assert_eq!(card.record_id.len(), 9);
    }
}

// ============================================================================
// Overlays
// ============================================================================

#[test]
fn test_overlay_follows_selection() {
    let lore = builtin();
    let mut state = ArchiveState::with_view(ViewState::Associations);

    let association: Association = lore.associations[0].clone();
    state.open_association(association.clone());
    match render(&state, &lore, "").overlay {
        Some(Overlay::Association(dossier)) => {
            assert_eq!(dossier.association, association);
            assert_eq!(dossier.accent, accent_for(&association.name));
        }
        other => panic!("expected association overlay, got {other:?}"),
    }

    state.dismiss();
    assert!(render(&state, &lore, "").overlay.is_none());

    state.open_character(character("K", "세르다 협회"));
    match render(&state, &lore, "").overlay {
        Some(Overlay::Character(dossier)) => {
            assert_eq!(dossier.text_accent, AccentToken::INK);
        }
        other => panic!("expected character overlay, got {other:?}"),
    }

    state.close_character();
    assert!(render(&state, &lore, "").overlay.is_none());
}

#[test]
fn test_overlay_survives_view_change() {
    let lore = builtin();
    let mut state = ArchiveState::with_view(ViewState::Personnel);
    state.open_character(character("K", "데이갈 협회"));
    state.set_view(ViewState::Glossary);

    let screen = render(&state, &lore, "");
    assert!(matches!(screen.content, ViewContent::Glossary(_)));
    assert!(matches!(screen.overlay, Some(Overlay::Character(_))));
}

/// Light accents never end up as text on the paper dossier
#[test]
fn test_dossier_text_is_legible_for_every_builtin_character() {
    let lore = builtin();
    for character in &lore.characters {
        let dossier = CharacterDossier::new(character);
        assert!(
            !dossier.text_accent.is_light(),
            "{} renders pale text",
            character.name
        );
    }
}
