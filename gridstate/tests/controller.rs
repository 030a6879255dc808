use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use gridstate::query::{Direction, FetchParams, ParamStyle, SEARCH_KEY};
use gridstate::{
    Column, Dataset, FetchError, FetchResponse, Intent, Record, RemoteFetch, TableConfig,
    TableController, TableError,
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("name", "Name").sortable(),
        Column::new("status", "Status"),
    ]
}

fn local_rows() -> Vec<Record> {
    vec![
        Record::new().set("id", 1).set("name", "b").set("status", "active"),
        Record::new().set("id", 2).set("name", "a").set("status", "idle"),
    ]
}

fn local_controller(page_size: usize) -> TableController {
    TableController::new(
        TableConfig::default().with_page_size(page_size),
        columns(),
        Dataset::local(local_rows()),
    )
}

/// Records every fetch call and answers with a canned page.
#[derive(Clone, Default)]
struct RecordingFetch {
    calls: Arc<Mutex<Vec<FetchParams>>>,
}

#[async_trait]
impl RemoteFetch for RecordingFetch {
    async fn fetch(&self, params: &FetchParams) -> Result<FetchResponse, FetchError> {
        self.calls.lock().unwrap().push(params.clone());
        Ok(FetchResponse::new(
            vec![Record::new().set("id", 10).set("name", "remote")],
            42,
        ))
    }
}

/// Always fails, like a dead backend.
struct FailingFetch;

#[async_trait]
impl RemoteFetch for FailingFetch {
    async fn fetch(&self, _params: &FetchParams) -> Result<FetchResponse, FetchError> {
        Err(FetchError::http(500, "boom"))
    }
}

// ============================================================================
// Local mode
// ============================================================================

#[test]
fn test_local_sort_then_page_through_windows() {
    let mut table = local_controller(1);

    let outcome = table.apply(Intent::Sort {
        field: "name".into(),
        direction: Some(Direction::Asc),
    });
    assert!(outcome.signal().local_render_needed);
    assert!(!outcome.signal().refetch_needed);
    assert!(outcome.fetch_params().is_none());

    // Page 1 holds the row that sorts first
    let window = table.window();
    assert_eq!(window.total(), 2);
    assert_eq!(window.rows()[0].cell_string("id"), "2");
    assert_eq!(window.rows()[0].cell_string("name"), "a");

    table.apply(Intent::Page(2));
    let window = table.window();
    assert_eq!(window.rows()[0].cell_string("id"), "1");
    assert_eq!(window.rows()[0].cell_string("name"), "b");
}

#[test]
fn test_search_with_no_matches_yields_empty_window() {
    let mut table = local_controller(1);
    table.apply(Intent::Page(2));
    assert_eq!(table.state().start(), 1);

    table.apply(Intent::Filter {
        key: SEARCH_KEY.into(),
        value: "foo".into(),
    });

    let window = table.window();
    assert!(window.is_empty());
    assert_eq!(window.total(), 0);
    assert_eq!(table.state().start(), 0);
    assert_eq!(table.total_pages(), 0);
}

#[test]
fn test_select_all_is_scoped_to_the_visible_page() {
    let rows = vec![
        Record::new().set("id", 1).set("name", "a"),
        Record::new().set("id", 2).set("name", "b"),
        Record::new().set("id", 3).set("name", "c"),
    ];
    let mut table = TableController::new(
        TableConfig::default().with_page_size(2),
        columns(),
        Dataset::local(rows),
    );

    table.apply(Intent::SelectAll);
    assert_eq!(table.state().selection().len(), 2);
    assert!(table.is_all_selected());

    // Selecting all on page 2 replaces the set, never unions
    table.apply(Intent::Page(2));
    table.apply(Intent::SelectAll);
    assert_eq!(table.state().selection().len(), 1);
    assert!(table.state().selection().is_selected("3"));
    assert!(!table.state().selection().is_selected("1"));
}

#[test]
fn test_unknown_filter_key_is_ignored() {
    let mut table = local_controller(10);
    table.apply(Intent::Page(1));

    let outcome = table.apply(Intent::Filter {
        key: "bogus".into(),
        value: "x".into(),
    });
    assert!(!outcome.signal().refetch_needed);
    assert!(!outcome.signal().local_render_needed);
    assert!(table.state().filters().is_empty());
}

#[test]
fn test_sort_on_unsortable_column_is_ignored() {
    let mut table = local_controller(10);

    let outcome = table.apply(Intent::Sort {
        field: "status".into(),
        direction: Some(Direction::Asc),
    });
    assert!(!outcome.signal().local_render_needed);
    assert!(table.state().sort().is_none());

    // Clearing a sort is always accepted
    table.apply(Intent::Sort {
        field: "name".into(),
        direction: Some(Direction::Asc),
    });
    let outcome = table.apply(Intent::Sort {
        field: "name".into(),
        direction: None,
    });
    assert!(outcome.signal().local_render_needed);
    assert!(table.state().sort().is_none());
}

// ============================================================================
// Remote mode
// ============================================================================

#[test]
fn test_remote_intents_demand_refetch_with_params() {
    let fetch = RecordingFetch::default();
    let mut table = TableController::new(TableConfig::default(), columns(), Dataset::remote(fetch));
    table.commit_fetch(FetchResponse::new(Vec::new(), 50));

    let outcome = table.apply(Intent::Sort {
        field: "name".into(),
        direction: Some(Direction::Desc),
    });
    assert!(outcome.signal().refetch_needed);
    assert!(!outcome.signal().local_render_needed);
    let params = outcome.fetch_params().unwrap();
    assert_eq!(params.get("sort"), Some("-name"));
    assert_eq!(params.get("start"), Some("0"));
    assert_eq!(params.get("size"), Some("10"));

    let outcome = table.apply(Intent::Page(3));
    let params = outcome.fetch_params().unwrap();
    assert_eq!(params.get("start"), Some("20"));

    let outcome = table.apply(Intent::Filter {
        key: "status".into(),
        value: "active".into(),
    });
    let params = outcome.fetch_params().unwrap();
    assert_eq!(params.get("status"), Some("active"));
    assert_eq!(params.get("start"), Some("0"));
    assert_eq!(params.get("sort"), Some("-name"));
}

#[test]
fn test_remote_page_per_page_params() {
    let mut table = TableController::new(
        TableConfig::default().with_param_style(ParamStyle::PagePerPage),
        columns(),
        Dataset::remote(RecordingFetch::default()),
    );
    table.commit_fetch(FetchResponse::new(Vec::new(), 50));

    let outcome = table.apply(Intent::Page(4));
    let params = outcome.fetch_params().unwrap();
    assert_eq!(params.get("page"), Some("4"));
    assert_eq!(params.get("per_page"), Some("10"));
    assert_eq!(params.get("start"), None);
}

#[test]
fn test_generation_increments_per_refetch_only() {
    let mut table = TableController::new(
        TableConfig::default(),
        columns(),
        Dataset::remote(RecordingFetch::default()),
    );
    table.commit_fetch(FetchResponse::new(Vec::new(), 50));
    assert_eq!(table.generation(), 0);

    let first = table.apply(Intent::Page(2));
    let second = table.apply(Intent::Page(3));
    assert_eq!(first.generation(), 1);
    assert_eq!(second.generation(), 2);

    let selection = table.apply(Intent::SelectAll);
    assert_eq!(selection.generation(), 2);
}

#[tokio::test]
async fn test_refresh_commits_rows_and_total() {
    let fetch = RecordingFetch::default();
    let calls = fetch.calls.clone();
    let mut table =
        TableController::new(TableConfig::default(), columns(), Dataset::remote(fetch));

    let signal = table
        .refresh(Intent::Filter {
            key: SEARCH_KEY.into(),
            value: "acme".into(),
        })
        .await
        .unwrap();
    assert!(signal.refetch_needed);

    assert_eq!(table.total_rows(), 42);
    assert_eq!(table.total_pages(), 5);
    let window = table.window();
    assert_eq!(window.total(), 42);
    assert_eq!(window.rows()[0].cell_string("name"), "remote");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].get("search"), Some("acme"));
}

#[tokio::test]
async fn test_failed_refetch_leaves_state_unchanged() {
    let mut table =
        TableController::new(TableConfig::default(), columns(), Dataset::remote(FailingFetch));
    table.commit_fetch(FetchResponse::new(
        vec![Record::new().set("id", 1).set("name", "kept")],
        50,
    ));
    table.apply(Intent::ToggleSelect("1".into()));

    let err = table.refresh(Intent::Page(2)).await.unwrap_err();
    assert!(matches!(err, TableError::FetchFailed(_)));

    // Paging rolled back, last-good window and selection intact
    assert_eq!(table.state().start(), 0);
    assert_eq!(table.window().rows()[0].cell_string("name"), "kept");
    assert!(table.state().selection().is_selected("1"));
}

#[tokio::test]
async fn test_failed_sort_rolls_back_sort_and_filters() {
    let mut table =
        TableController::new(TableConfig::default(), columns(), Dataset::remote(FailingFetch));
    table.commit_fetch(FetchResponse::new(Vec::new(), 50));

    let err = table
        .refresh(Intent::Sort {
            field: "name".into(),
            direction: Some(Direction::Desc),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TableError::FetchFailed(_)));
    assert!(table.state().sort().is_none());

    let err = table
        .refresh(Intent::Filter {
            key: "status".into(),
            value: "active".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TableError::FetchFailed(_)));
    assert!(table.state().filters().is_empty());
}

#[test]
fn test_explicit_fetch_failed_restores_snapshot() {
    let mut table = TableController::new(
        TableConfig::default(),
        columns(),
        Dataset::remote(RecordingFetch::default()),
    );
    table.commit_fetch(FetchResponse::new(Vec::new(), 50));

    let outcome = table.apply(Intent::Page(2));
    assert_eq!(outcome.fetch_params().unwrap().get("start"), Some("10"));
    assert_eq!(table.state().start(), 10);

    // The collaborator ran the fetch itself and it failed
    table.fetch_failed();
    assert_eq!(table.state().start(), 0);
}

#[test]
fn test_selection_intents_never_refetch() {
    let fetch = RecordingFetch::default();
    let calls = fetch.calls.clone();
    let mut table =
        TableController::new(TableConfig::default(), columns(), Dataset::remote(fetch));
    table.commit_fetch(FetchResponse::new(
        vec![Record::new().set("id", 10).set("name", "remote")],
        42,
    ));

    for intent in [
        Intent::ToggleSelect("10".into()),
        Intent::SelectAll,
        Intent::DeselectAll,
    ] {
        let outcome = table.apply(intent);
        assert!(!outcome.signal().refetch_needed);
        assert!(outcome.signal().local_render_needed);
        assert!(outcome.fetch_params().is_none());
    }
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_initial_fetch_params_for_remote_table() {
    let table = TableController::new(
        TableConfig::default().with_page_size(25),
        columns(),
        Dataset::remote(RecordingFetch::default()),
    );

    let params = table.fetch_params();
    assert_eq!(params.get("start"), Some("0"));
    assert_eq!(params.get("size"), Some("25"));
    assert_eq!(params.get("sort"), None);
}
