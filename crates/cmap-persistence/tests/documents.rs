use cmap_model::{CodeSet, ColorScheme, FilterState, Preferences, QueryDirection};
use cmap_persistence::{FILTERS_KEY, FileStore, MemoryStore, PREFERENCES_KEY, StateStore, load, save};
use proptest::prelude::*;
use tempfile::tempdir;

fn code_set() -> impl Strategy<Value = CodeSet> {
    prop::collection::vec("[A-Z]{3}[0-9]{3}[HY][135]|[1-4]|5\\+", 0..6).prop_map(CodeSet::from_codes)
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    (
        code_set(),
        prop::bool::ANY,
        code_set(),
        code_set(),
        code_set(),
        code_set(),
        code_set(),
    )
        .prop_map(
            |(courses, post, fields, campus, year, semesters, breadth)| FilterState {
                courses,
                direction: if post {
                    QueryDirection::Postrequisites
                } else {
                    QueryDirection::Prerequisites
                },
                fields,
                campus,
                year,
                semesters,
                breadth,
            },
        )
}

proptest! {
    #[test]
    fn filters_round_trip_through_store(state in filter_state()) {
        let store = MemoryStore::new();
        save(&store, FILTERS_KEY, &state);
        let restored = load(&store, FILTERS_KEY, FilterState::default());
        prop_assert_eq!(restored, state);
    }

    #[test]
    fn garbage_documents_load_as_default(garbage in "\\PC{0,40}") {
        let store = MemoryStore::new();
        store.seed(FILTERS_KEY, &garbage);
        let restored = load(&store, FILTERS_KEY, FilterState::default());
        // Either the garbage happened to be a valid document or we got the default;
        // in neither case may loading panic or leave the direction unset.
        prop_assert!(QueryDirection::ALL.contains(&restored.direction));
    }
}

#[test]
fn corrupted_file_loads_compiled_default() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    std::fs::write(dir.path().join("filters.json"), b"{\"courses\": 42").unwrap();

    let restored = load(&store, FILTERS_KEY, FilterState::default());

    assert_eq!(restored, FilterState::default());
}

#[test]
fn wrong_field_type_loads_compiled_default() {
    let store = MemoryStore::new();
    store.seed(FILTERS_KEY, r#"{"courses": "CSC108H5", "type": "prerequisites"}"#);

    let restored = load(&store, FILTERS_KEY, FilterState::default());

    assert_eq!(restored, FilterState::default());
}

#[test]
fn legacy_filters_document_is_normalized() {
    let store = MemoryStore::new();
    store.seed(
        FILTERS_KEY,
        r#"{
            "courses": ["CSC108H1", "MATB41H3", "STA258H5", "MAT243H3"],
            "type": "",
            "fields": [],
            "campus": ["UTSC", "Seneca"],
            "year": [1, "5+", 7],
            "semesters": ["W", "G"],
            "breadth": []
        }"#,
    );

    let restored = load(&store, FILTERS_KEY, FilterState::default());

    assert_eq!(restored.direction, QueryDirection::Prerequisites);
    assert_eq!(restored.courses.len(), 4);
    assert_eq!(restored.year.as_slice(), ["1", "5+", "7"]);
    assert_eq!(restored.campus.as_slice(), ["UTSC", "Seneca"]);
}

#[test]
fn missing_type_is_replaced_by_default() {
    let store = MemoryStore::new();
    store.seed(FILTERS_KEY, r#"{"courses": ["CSC108H5"]}"#);

    let restored = load(
        &store,
        FILTERS_KEY,
        FilterState::with_direction(QueryDirection::Postrequisites),
    );

    assert_eq!(restored.direction, QueryDirection::Prerequisites);
    assert_eq!(restored.courses.as_slice(), ["CSC108H5"]);
}

#[test]
fn preferences_survive_file_store_round_trip() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let mut prefs = Preferences::for_host(ColorScheme::Dark);
    prefs.show_filters = true;

    save(&store, PREFERENCES_KEY, &prefs);

    assert!(store.read(PREFERENCES_KEY).unwrap().is_some());
    assert_eq!(load(&store, PREFERENCES_KEY, Preferences::default()), prefs);
}
