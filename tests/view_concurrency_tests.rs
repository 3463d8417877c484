//! Overlapping refreshes on one view
//!
//! A gated source holds the first fetch open until the test releases it, so
//! the ordering of responses is controlled exactly.

use rcm_dashboard::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

#[derive(Default)]
struct GatedSource {
    calls: AtomicUsize,
    first_started: Notify,
    release_first: Notify,
}

#[async_trait]
impl ResourceSource for GatedSource {
    async fn fetch(
        &self,
        _resource: &ResourceDescriptor,
        query: &ListQuery,
    ) -> Result<Vec<Value>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            self.first_started.notify_one();
            self.release_first.notified().await;
            return Ok(vec![json!({"id": "stale", "status": "pending", "created_at": "2025-01-01"})]);
        }
        Ok(vec![json!({
            "id": format!("fresh-{}", call),
            "status": query.status.as_str(),
            "created_at": "2025-02-01"
        })])
    }
}

fn workflows() -> ResourceDescriptor {
    ResourceCatalog::builtin()
        .get("workflows")
        .cloned()
        .expect("workflows should be registered")
}

fn ids(view: &ListViewModel<Value>) -> Vec<Value> {
    view.items().into_iter().map(|item| item["id"].clone()).collect()
}

#[tokio::test]
async fn test_slow_earlier_fetch_is_discarded() {
    let source = Arc::new(GatedSource::default());
    let view: ListViewModel<Value> = ListViewModel::for_resource(source.clone(), workflows());

    let slow = {
        let view = view.clone();
        tokio::spawn(async move { view.refresh().await })
    };
    source.first_started.notified().await;
    assert!(view.is_loading());

    assert!(view.set_status_filter("pending").await);
    assert!(!view.is_loading());
    assert_eq!(ids(&view), vec![json!("fresh-1")]);

    source.release_first.notify_one();
    let applied = slow.await.expect("refresh task panicked");
    assert!(!applied);

    let state = view.snapshot();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0]["id"], "fresh-1");
    assert_eq!(state.status_filter, StatusFilter::parse("pending"));
    assert!(!state.loading);
}

#[tokio::test]
async fn test_loading_holds_until_newest_fetch_resolves() {
    let source = Arc::new(GatedSource::default());
    let view: ListViewModel<Value> = ListViewModel::for_resource(source.clone(), workflows());

    // The newest request is the gated one: take its ticket first, then run an
    // older refresh to completion through the manual ticket API.
    let older = view.begin_refresh();
    let newest = {
        let view = view.clone();
        tokio::spawn(async move { view.refresh().await })
    };
    source.first_started.notified().await;

    let applied = view.complete_refresh(older, Ok(vec![json!({"id": "older"})]));
    assert!(!applied);
    assert!(view.is_loading());
    assert!(view.items().is_empty());

    source.release_first.notify_one();
    assert!(newest.await.expect("refresh task panicked"));
    assert!(!view.is_loading());
    assert_eq!(ids(&view), vec![json!("stale")]);
}

#[tokio::test]
async fn test_sequential_refreshes_all_apply() {
    let source = Arc::new(GatedSource::default());
    source.calls.store(1, Ordering::SeqCst);
    let view: ListViewModel<Value> = ListViewModel::for_resource(source, workflows());

    assert!(view.refresh().await);
    assert_eq!(ids(&view), vec![json!("fresh-1")]);

    assert!(view.toggle_sort_direction().await);
    let state = view.snapshot();
    assert_eq!(state.sort_direction, SortDirection::Asc);
    assert_eq!(state.items[0]["id"], "fresh-2");
}
