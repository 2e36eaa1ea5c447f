use cmap_catalog::{
    Catalog, CatalogCache, CatalogEntry, FetchedCatalog, Resolution, Segment, highlight,
    no_options_message, parse_courses, parse_fields, static_catalog,
};
use cmap_model::Facet;
use proptest::prelude::*;
use serde_json::json;

const COURSES: &str = r#"[
    {"code": "CSC108H5", "name": "Introduction to Computer Programming", "semesters": ["F", "W"]},
    {"code": "CSC148H5", "name": "Introduction to Computer Science", "sectionCode": ["W", "S"]},
    {"code": "MAT102H5", "name": "Introduction to Mathematical Proofs", "semesters": ["Y"]},
    {"code": "", "name": "Missing code"}
]"#;

const FIELDS: &str = r#"[
    {"code": "CSC108H5", "department": {"code": "CSC", "name": "Computer Science"}},
    {"code": "CSC148H5", "department": {"code": "CSC", "name": "Computer Science"}},
    {"code": "MAT102H5", "department": {"code": "MAT", "name": "Mathematics"}}
]"#;

fn loaded() -> CatalogCache {
    let mut cache = CatalogCache::new();
    cache.fill(FetchedCatalog::Courses, parse_courses(COURSES));
    cache.fill(FetchedCatalog::Fields, parse_fields(FIELDS));
    cache
}

#[test]
fn course_picker_search_and_highlight() {
    let cache = loaded();

    let matches = cache.search(Facet::Courses, "csc1");
    let codes: Vec<&str> = matches.iter().map(|entry| entry.code.as_str()).collect();
    assert_eq!(codes, ["CSC108H5", "CSC148H5"]);

    let label = matches[0].option_label();
    assert_eq!(label, "CSC108H5: Introduction to Computer Programming");
    assert_eq!(
        highlight(&label, "csc1"),
        vec![
            Segment { text: "CSC1", matched: true },
            Segment { text: "08H5: Introduction to Computer Programming", matched: false },
        ]
    );

    assert_eq!(cache.options(Facet::Courses).len(), 3);
    assert_eq!(cache.search(Facet::Courses, "").len(), 3);
}

#[test]
fn section_code_alias_feeds_badges() {
    let cache = loaded();
    let entry = cache.resolve(Facet::Courses, "CSC148H5").entry().cloned().unwrap();
    assert_eq!(entry.season_badge(), "❄️☀️");
    assert_eq!(
        cache.resolve(Facet::Courses, "MAT102H5").entry().map(|e| e.season_badge()),
        Some("🍁❄️".to_string())
    );
}

#[test]
fn fields_grouped_by_department() {
    let cache = loaded();
    let codes: Vec<&str> = cache
        .options(Facet::Fields)
        .iter()
        .map(|entry| entry.code.as_str())
        .collect();
    assert_eq!(codes, ["CSC", "MAT"]);
    assert_eq!(cache.label(Facet::Fields, "MAT"), "Mathematics");
}

#[test]
fn selection_payloads_use_facet_keys() {
    let cache = loaded();
    let course = cache.resolve(Facet::Courses, "CSC108H5").entry().unwrap();
    assert_eq!(course.to_selection("code")["code"], json!("CSC108H5"));

    let campus = static_catalog(Facet::Campus).unwrap().get("UTSG").unwrap();
    assert_eq!(
        campus.to_selection("value"),
        json!({"value": "UTSG", "label": "St. George", "name": "St. George"})
    );
}

#[test]
fn breadth_categories_grouped_by_campus() {
    let breadth = static_catalog(Facet::Breadth).unwrap();
    let group = |code: &str| breadth.get(code).and_then(|entry| entry.group.clone());

    assert_eq!(group("BR3").as_deref(), Some("UTSG"));
    assert_eq!(group("NAT_SCI").as_deref(), Some("UTSC"));
    assert_eq!(group("SSc").as_deref(), Some("UTM"));
    assert_eq!(breadth.len(), 13);
}

#[test]
fn empty_pickers_say_so() {
    let cache = CatalogCache::new();
    assert!(cache.options(Facet::Courses).is_empty());
    assert_eq!(no_options_message(Facet::Courses), "No Courses Found");
    assert_eq!(cache.resolve(Facet::Fields, "CSC"), Resolution::Pending);
}

proptest! {
    #[test]
    fn search_and_highlight_agree(
        name in "[a-zA-ZçÇäÄ ]{0,12}",
        input in " ?[a-zA-ZçÇäÄ]{1,3} ?",
    ) {
        let catalog = Catalog::from_entries([CatalogEntry::new("ABC123H5", name)]);
        let label = catalog.entries()[0].option_label();
        let hit = catalog.search(&input).next().is_some();
        let segments = highlight(&label, &input);

        prop_assert_eq!(hit, segments.iter().any(|s| s.matched));
        prop_assert_eq!(segments.iter().map(|s| s.text).collect::<String>(), label.as_str());
    }
}
