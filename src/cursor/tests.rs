//! Tests for cursor traversal

use super::*;
use crate::transport::mock::MockTransport;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize, PartialEq)]
struct Widget {
    id: String,
}

impl Resource for Widget {
    const COLLECTION_KEY: &'static str = "widgets";
    const PATH: &'static str = "widgets";
    const ID_PREFIX: Option<&'static str> = Some("wid_");
    const NAME: &'static str = "widget";
}

const PAGE_1: &str = "https://api.example.com/v2/widgets?limit=2";
const PAGE_2: &str = "https://api.example.com/v2/widgets?from=wid_3&limit=2";
const PAGE_3: &str = "https://api.example.com/v2/widgets?from=wid_5&limit=2";

fn page_body(ids: &[&str], links: Value) -> Value {
    let records: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({
        "count": ids.len(),
        "_embedded": { "widgets": records },
        "_links": links,
    })
}

fn link(href: &str) -> Value {
    json!({ "href": href, "type": "application/hal+json" })
}

fn anchor(mock: &Arc<MockTransport>, body: Value) -> Page<Widget> {
    Page::from_body(Arc::clone(mock) as Arc<dyn Transport>, body).unwrap()
}

async fn ids(mut cursor: CursorStream<Widget>) -> Vec<String> {
    let mut ids = Vec::new();
    while let Some(widget) = cursor.try_next().await.unwrap() {
        ids.push(widget.id);
    }
    ids
}

#[tokio::test]
async fn test_forward_walk_spans_pages_in_order() {
    let mock = Arc::new(
        MockTransport::new()
            .on(
                PAGE_2,
                page_body(
                    &["wid_3", "wid_4"],
                    json!({ "self": link(PAGE_2), "next": link(PAGE_3), "previous": link(PAGE_1) }),
                ),
            )
            .on(
                PAGE_3,
                page_body(
                    &["wid_5", "wid_6"],
                    json!({ "self": link(PAGE_3), "previous": link(PAGE_2) }),
                ),
            ),
    );

    let first = anchor(
        &mock,
        page_body(
            &["wid_1", "wid_2"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
        ),
    );

    let yielded = ids(first.into_cursor(Direction::Forward)).await;
    assert_eq!(
        yielded,
        vec!["wid_1", "wid_2", "wid_3", "wid_4", "wid_5", "wid_6"]
    );
    assert_eq!(mock.calls(), vec![PAGE_2.to_string(), PAGE_3.to_string()]);
}

#[tokio::test]
async fn test_backward_walk_follows_previous_links() {
    let mock = Arc::new(
        MockTransport::new()
            .on(
                PAGE_2,
                page_body(
                    &["wid_3", "wid_4"],
                    json!({ "self": link(PAGE_2), "next": link(PAGE_3), "previous": link(PAGE_1) }),
                ),
            )
            .on(
                PAGE_1,
                page_body(
                    &["wid_1", "wid_2"],
                    json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
                ),
            ),
    );

    let last = anchor(
        &mock,
        page_body(
            &["wid_5", "wid_6"],
            json!({ "self": link(PAGE_3), "previous": link(PAGE_2) }),
        ),
    );

    let yielded = ids(last.into_cursor(Direction::Backward)).await;
    assert_eq!(
        yielded,
        vec!["wid_5", "wid_6", "wid_3", "wid_4", "wid_1", "wid_2"]
    );
    assert_eq!(mock.calls(), vec![PAGE_2.to_string(), PAGE_1.to_string()]);
}

#[tokio::test]
async fn test_forward_never_consults_previous() {
    // The anchor has a previous link; a forward walk must ignore it.
    let mock = Arc::new(MockTransport::new().on(
        PAGE_3,
        page_body(&["wid_5"], json!({ "self": link(PAGE_3), "previous": link(PAGE_2) })),
    ));

    let middle = anchor(
        &mock,
        page_body(
            &["wid_3", "wid_4"],
            json!({ "self": link(PAGE_2), "next": link(PAGE_3), "previous": link(PAGE_1) }),
        ),
    );

    let yielded = ids(middle.into_cursor(Direction::Forward)).await;
    assert_eq!(yielded, vec!["wid_3", "wid_4", "wid_5"]);
    assert_eq!(mock.calls(), vec![PAGE_3.to_string()]);
}

#[tokio::test]
async fn test_backward_never_consults_next() {
    let mock = Arc::new(MockTransport::new().on(
        PAGE_1,
        page_body(&["wid_1", "wid_2"], json!({ "self": link(PAGE_1), "next": link(PAGE_2) })),
    ));

    let middle = anchor(
        &mock,
        page_body(
            &["wid_3", "wid_4"],
            json!({ "self": link(PAGE_2), "next": link(PAGE_3), "previous": link(PAGE_1) }),
        ),
    );

    let yielded = ids(middle.into_cursor(Direction::Backward)).await;
    assert_eq!(yielded, vec!["wid_3", "wid_4", "wid_1", "wid_2"]);
    assert_eq!(mock.calls(), vec![PAGE_1.to_string()]);
}

#[tokio::test]
async fn test_page_fetches_happen_only_at_boundaries() {
    let mock = Arc::new(MockTransport::new().on(
        PAGE_2,
        page_body(&["wid_3"], json!({ "self": link(PAGE_2) })),
    ));

    let first = anchor(
        &mock,
        page_body(
            &["wid_1", "wid_2"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
        ),
    );
    let mut cursor = first.into_cursor(Direction::Forward);

    // Buffered items come out without any traffic.
    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_1");
    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_2");
    assert_eq!(mock.call_count(), 0);

    // Crossing the boundary costs exactly one fetch.
    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_3");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_dropping_early_stops_fetching() {
    let mock = Arc::new(MockTransport::new());

    let first = anchor(
        &mock,
        page_body(
            &["wid_1", "wid_2"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
        ),
    );
    let mut cursor = first.into_cursor(Direction::Forward);

    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_1");
    drop(cursor);

    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_exhaustion_is_permanent() {
    let mock = Arc::new(MockTransport::new());
    let only = anchor(&mock, page_body(&["wid_1"], json!({ "self": link(PAGE_1) })));
    let mut cursor = only.into_cursor(Direction::Forward);

    assert!(!cursor.is_done());
    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_1");
    assert!(cursor.try_next().await.unwrap().is_none());
    assert!(cursor.is_done());
    assert!(cursor.try_next().await.unwrap().is_none());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_empty_anchor_yields_nothing() {
    let mock = Arc::new(MockTransport::new());
    let empty = anchor(&mock, page_body(&[], json!({ "self": link(PAGE_1) })));

    let yielded = ids(empty.into_cursor(Direction::Forward)).await;
    assert!(yielded.is_empty());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_empty_middle_page_is_crossed() {
    let mock = Arc::new(
        MockTransport::new()
            .on(
                PAGE_2,
                page_body(&[], json!({ "self": link(PAGE_2), "next": link(PAGE_3) })),
            )
            .on(
                PAGE_3,
                page_body(&["wid_5"], json!({ "self": link(PAGE_3) })),
            ),
    );

    let first = anchor(
        &mock,
        page_body(
            &["wid_1", "wid_2"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
        ),
    );

    let yielded = ids(first.into_cursor(Direction::Forward)).await;
    assert_eq!(yielded, vec!["wid_1", "wid_2", "wid_5"]);
    assert_eq!(mock.calls(), vec![PAGE_2.to_string(), PAGE_3.to_string()]);
}

#[tokio::test]
async fn test_advance_failure_surfaces_once_then_ends() {
    let mock = Arc::new(MockTransport::new().fail(PAGE_2, 503, "upstream busy"));

    let first = anchor(
        &mock,
        page_body(
            &["wid_1", "wid_2"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
        ),
    );
    let mut cursor = first.into_cursor(Direction::Forward);

    // Items ahead of the failure come through untouched.
    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_1");
    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_2");

    let err = cursor.try_next().await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 503, .. }));

    // The failure terminates the stream; it is not retried.
    assert!(cursor.try_next().await.unwrap().is_none());
    assert!(cursor.is_done());
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_loop_back_to_anchor_is_detected() {
    let mock = Arc::new(MockTransport::new());

    let first = anchor(
        &mock,
        page_body(
            &["wid_1"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_1) }),
        ),
    );
    let mut cursor = first.into_cursor(Direction::Forward);

    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_1");
    let err = cursor.try_next().await.unwrap_err();
    assert!(matches!(err, Error::CursorLoop { href } if href == PAGE_1));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_loop_on_followed_link_is_detected() {
    let mock = Arc::new(MockTransport::new().on(
        PAGE_2,
        page_body(&["wid_3"], json!({ "self": link(PAGE_2), "next": link(PAGE_2) })),
    ));

    let first = anchor(
        &mock,
        page_body(
            &["wid_1"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
        ),
    );
    let mut cursor = first.into_cursor(Direction::Forward);

    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_1");
    assert_eq!(cursor.try_next().await.unwrap().unwrap().id, "wid_3");

    let err = cursor.try_next().await.unwrap_err();
    assert!(matches!(err, Error::CursorLoop { href } if href == PAGE_2));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_collect_drains_everything() {
    let mock = Arc::new(MockTransport::new().on(
        PAGE_2,
        page_body(&["wid_3", "wid_4"], json!({ "self": link(PAGE_2) })),
    ));

    let first = anchor(
        &mock,
        page_body(
            &["wid_1", "wid_2"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
        ),
    );

    let widgets = first.into_cursor(Direction::Forward).collect().await.unwrap();
    let yielded: Vec<&str> = widgets.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(yielded, vec!["wid_1", "wid_2", "wid_3", "wid_4"]);
}

#[tokio::test]
async fn test_into_stream_adapter() {
    let mock = Arc::new(MockTransport::new().on(
        PAGE_2,
        page_body(&["wid_3"], json!({ "self": link(PAGE_2) })),
    ));

    let first = anchor(
        &mock,
        page_body(
            &["wid_1", "wid_2"],
            json!({ "self": link(PAGE_1), "next": link(PAGE_2) }),
        ),
    );

    let widgets: Vec<Widget> = first
        .into_cursor(Direction::Forward)
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    let yielded: Vec<&str> = widgets.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(yielded, vec!["wid_1", "wid_2", "wid_3"]);
}

#[test]
fn test_direction_defaults_forward() {
    assert_eq!(Direction::default(), Direction::Forward);
}

#[tokio::test]
async fn test_direction_accessor() {
    let mock = Arc::new(MockTransport::new());
    let page = anchor(&mock, page_body(&[], json!({})));
    let cursor = page.into_cursor(Direction::Backward);

    assert_eq!(cursor.direction(), Direction::Backward);
}
