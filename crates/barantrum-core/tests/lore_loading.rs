//! Loading lore documents from disk

use std::io::Write;

use barantrum_core::{ArchiveError, LoreStore, TermCategory};
use tempfile::NamedTempFile;

const MINIMAL_LORE: &str = r#"{
    "intro": "> hello",
    "districts": [
        {"id": "A", "name": "Alpha", "description": "first", "associations": ["데이갈 협회"]},
        {"id": "B", "name": "Beta", "description": "second"}
    ],
    "associations": [
        {"name": "데이갈 협회", "location": "3구역", "role": "guard", "description": "red"}
    ],
    "terms": [
        {"term": "Rift", "definition": "a gap", "category": "entity"}
    ],
    "characters": [
        {
            "name": "K",
            "affiliation": "데이갈 협회",
            "location": "3구역",
            "personality": "calm",
            "appearance": "tall",
            "resolve": "onward"
        }
    ]
}"#;

#[test]
fn test_load_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MINIMAL_LORE.as_bytes()).unwrap();

    let store = LoreStore::from_path(file.path()).unwrap();
    assert_eq!(store.intro, "> hello");
    assert_eq!(store.districts.len(), 2);
    assert_eq!(store.districts[1].associations, None);
    assert_eq!(store.characters[0].notes, None);
    assert_eq!(store.terms_in(TermCategory::Entity).count(), 1);
    assert!(store.association("데이갈 협회").is_some());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LoreStore::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ArchiveError::Io(_)));
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{\"intro\": ").unwrap();
    let err = LoreStore::from_path(file.path()).unwrap_err();
    assert!(matches!(err, ArchiveError::Serialization(_)));
}

#[test]
fn test_unknown_category_is_rejected() {
    let err = LoreStore::from_json(
        r#"{"intro": "", "terms": [{"term": "x", "definition": "y", "category": "lore"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ArchiveError::Serialization(_)));
}

#[test]
fn test_builtin_roundtrips_through_disk() {
    let builtin = LoreStore::builtin().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&builtin).unwrap().as_bytes())
        .unwrap();

    let loaded = LoreStore::from_path(file.path()).unwrap();
    assert_eq!(loaded, builtin);
}
