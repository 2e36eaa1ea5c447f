use cmap_model::{CodeSet, Facet, FilterState, PreferenceFlag, Preferences, QueryDirection};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn code_set_is_unique_and_non_empty(codes in prop::collection::vec("[A-C]{0,2}", 0..12)) {
        let set = CodeSet::from_codes(codes.clone());
        let slice = set.as_slice();

        prop_assert!(slice.iter().all(|code| !code.is_empty()));
        for (i, code) in slice.iter().enumerate() {
            prop_assert!(!slice[i + 1..].contains(code));
        }
        for code in codes.iter().filter(|code| !code.is_empty()) {
            prop_assert!(set.contains(code));
        }
    }

    #[test]
    fn facet_names_resolve_to_themselves(index in 0..Facet::ALL.len()) {
        let facet = Facet::ALL[index];
        prop_assert_eq!(Facet::from_name(facet.name()), Some(facet));
    }
}

#[test]
fn filter_document_shape() {
    let mut state = FilterState::with_direction(QueryDirection::Postrequisites);
    state.courses.insert("CSC108H5");
    state.year.insert("5+");

    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({
            "courses": ["CSC108H5"],
            "type": "postrequisites",
            "fields": [],
            "campus": [],
            "year": ["5+"],
            "semesters": [],
            "breadth": []
        })
    );
}

#[test]
fn partial_filter_document_fills_defaults() {
    let state: FilterState = serde_json::from_value(json!({"campus": ["UTM"]})).unwrap();
    assert_eq!(state.campus.as_slice(), ["UTM"]);
    assert_eq!(state.direction, QueryDirection::Prerequisites);
    assert!(state.courses.is_empty());
}

#[test]
fn preference_document_shape() {
    let mut prefs = Preferences::default();
    prefs.flip(PreferenceFlag::ShowSearch);

    assert_eq!(
        serde_json::to_value(prefs).unwrap(),
        json!({
            "darkMode": false,
            "showFilters": false,
            "showSearch": true,
            "sidebar": true
        })
    );
    for flag in PreferenceFlag::ALL {
        assert_eq!(PreferenceFlag::from_name(flag.name()), Some(flag));
    }
}
