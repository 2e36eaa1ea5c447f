use std::sync::Arc;

use cmap_app::{App, CatalogMessage, FilterMessage, Message, PreferenceMessage, spawn_catalog_fetches};
use cmap_catalog::{Catalog, CatalogEntry, CatalogError, CatalogSource, FetchedCatalog};
use cmap_model::{ColorScheme, Facet, QueryDirection};
use cmap_persistence::{FILTERS_KEY, FileStore, MemoryStore, StateStore};
use serde_json::json;
use tempfile::tempdir;
use tokio::sync::mpsc;

/// In-process catalog source.
struct FakeSource {
    fields_fail: bool,
}

impl CatalogSource for FakeSource {
    async fn fetch_courses(&self) -> cmap_catalog::Result<Catalog> {
        Ok(Catalog::from_entries([
            CatalogEntry::new("CSC108H5", "Intro to CS").with_semesters(["F", "W"]),
            CatalogEntry::new("MAT102H5", "Intro to Proofs").with_semesters(["S"]),
        ]))
    }

    async fn fetch_fields(&self) -> cmap_catalog::Result<Catalog> {
        if self.fields_fail {
            return Err(CatalogError::Status {
                url: "http://localhost:5000/fields".into(),
                status: 503,
                body: String::new(),
            });
        }
        Ok(Catalog::from_entries([CatalogEntry::new("CSC", "Computer Science")]))
    }
}

fn facet(name: &str, selection: serde_json::Value) -> Message {
    FilterMessage::FacetChanged {
        facet: name.into(),
        selection,
    }
    .into()
}

fn memory_app() -> (Arc<MemoryStore>, App) {
    let store = Arc::new(MemoryStore::new());
    let app = App::new(store.clone(), ColorScheme::Light);
    (store, app)
}

#[test]
fn scenario_course_then_direction() {
    let store = Arc::new(MemoryStore::new());
    store.seed(FILTERS_KEY, r#"{"type": "postrequisites"}"#);
    let mut app = App::new(store.clone(), ColorScheme::Light);
    assert_eq!(app.contract().direction, QueryDirection::Postrequisites);

    let contract = app
        .update(facet(
            "courses",
            json!([{"code": "CSC108H5", "name": "Intro to CS"}]),
        ))
        .unwrap();
    assert_eq!(contract.courses, ["CSC108H5"]);

    let contract = app
        .update(facet("type", json!({"value": "prerequisites"})))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&contract).unwrap(),
        json!({
            "courses": ["CSC108H5"],
            "type": "prerequisites",
            "fields": [],
            "campus": [],
            "year": [],
            "semesters": [],
            "breadth": []
        })
    );
    assert_eq!(store.write_count(), 2);
}

#[test]
fn unchanged_query_is_not_handed_off() {
    let (store, mut app) = memory_app();

    assert!(app.update(facet("campus", json!([{"value": "UTM"}]))).is_some());
    assert!(app.update(facet("campus", json!([{"value": "UTM"}]))).is_none());
    assert_eq!(store.write_count(), 2);

    assert!(app.update(facet("type", json!(null))).is_none());
    assert!(app.update(facet("unknown", json!([]))).is_none());
    assert_eq!(store.write_count(), 2);
}

#[test]
fn preference_toggles_do_not_touch_query() {
    let (_store, mut app) = memory_app();
    assert!(!app.preferences().dark_mode);

    assert!(app.update(PreferenceMessage::Toggle("darkMode".into()).into()).is_none());
    assert!(app.preferences().dark_mode);

    app.update(PreferenceMessage::Toggle("unknownFlag".into()).into());
    assert!(app.preferences().dark_mode);
}

#[test]
fn tag_input_and_graph_events() {
    let (_store, mut app) = memory_app();

    app.update(FilterMessage::AddCourse("CSC108H5".into()).into());
    assert!(app.update(FilterMessage::AddCourse("csc108h5".into()).into()).is_none());

    let contract = app
        .update(FilterMessage::SetCourses(vec!["MAT102H5".into(), "CSC108H5".into()]).into())
        .unwrap();
    assert_eq!(contract.courses, ["MAT102H5", "CSC108H5"]);

    let contract = app.update(FilterMessage::RemoveCourse(0).into()).unwrap();
    assert_eq!(contract.courses, ["CSC108H5"]);
    assert!(app.update(FilterMessage::RemoveCourse(4).into()).is_none());
}

#[tokio::test]
async fn catalogs_resolve_selected_courses_without_new_handoff() {
    let (_store, mut app) = memory_app();
    app.update(facet("courses", json!([{"code": "CSC108H5"}])));
    app.update(facet("fields", json!([{"code": "CSC"}])));
    assert!(!app.query().courses[0].is_resolved());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handles = spawn_catalog_fetches(&Arc::new(FakeSource { fields_fail: true }), &tx);
    drop(tx);
    for handle in handles {
        handle.await.unwrap();
    }

    while let Some(message) = rx.recv().await {
        assert!(app.update(message).is_none());
    }

    let course = &app.query().courses[0];
    assert_eq!(course.label, "Intro to CS");
    assert_eq!(course.badge, "🍁❄️");
    assert!(!app.query().fields[0].is_resolved());
    assert_eq!(app.contract().courses, ["CSC108H5"]);
    assert_eq!(app.contract().fields, ["CSC"]);

    let catalogs = &app.state().catalogs;
    assert_eq!(catalogs.options(Facet::Courses).len(), 2);
    assert!(catalogs.options(Facet::Fields).is_empty());
    assert!(!catalogs.is_loading(Facet::Fields));
}

#[test]
fn late_catalog_completion_is_ignored() {
    let (_store, mut app) = memory_app();
    app.update(
        CatalogMessage::Loaded {
            which: FetchedCatalog::Courses,
            result: Ok(Catalog::from_entries([CatalogEntry::new("CSC108H5", "Intro to CS")])),
        }
        .into(),
    );
    app.update(
        CatalogMessage::Loaded {
            which: FetchedCatalog::Courses,
            result: Ok(Catalog::default()),
        }
        .into(),
    );
    assert_eq!(app.state().catalogs.options(Facet::Courses).len(), 1);
}

#[test]
fn session_survives_restart() {
    let dir = tempdir().unwrap();
    let store: Arc<dyn StateStore> = Arc::new(FileStore::new(dir.path()));

    let mut app = App::new(Arc::clone(&store), ColorScheme::Dark);
    assert!(app.preferences().dark_mode);
    app.update(facet("year", json!([{"value": 2}, {"value": "5+"}])));
    app.update(facet("breadth", json!([{"code": "QUANT"}])));
    app.update(PreferenceMessage::Toggle("showSearch".into()).into());

    let restarted = App::new(store, ColorScheme::Light);
    assert_eq!(restarted.contract(), app.contract());
    assert_eq!(restarted.contract().year, ["2", "5+"]);
    assert!(restarted.preferences().dark_mode);
    assert!(restarted.preferences().show_search);
    assert_eq!(
        restarted.query().breadth[0].group.as_deref(),
        Some("UTSC")
    );
}

#[test]
fn corrupted_documents_start_fresh() {
    let store = Arc::new(MemoryStore::new());
    store.seed(FILTERS_KEY, "{ not json");
    store.seed("preferences", "[]");

    let app = App::new(store, ColorScheme::Light);
    assert!(app.contract().courses.is_empty());
    assert_eq!(app.contract().direction, QueryDirection::Prerequisites);
    assert!(app.preferences().sidebar);
}
