//! API contract tests against a local mock server.
//!
//! Each test asserts what went over the wire (method, path, auth/accept
//! headers, metadata headers, body) and how the response is decoded.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use swift_objects::{
    CopyOpts, CreateOpts, DeleteOpts, DownloadOpts, Error, GetOpts, ListOpts, ObjectMetadata,
    ObjectOperations, SwiftClient, SwiftConfig, UpdateOpts,
};
use time::macros::datetime;
use url::Url;

const TOKEN: &str = "abcabcabcabc";

/// One request as seen by the mock server.
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .as_deref()?
            .split('&')
            .find_map(|kv| kv.strip_prefix(name)?.strip_prefix('='))
    }
}

#[derive(Clone)]
struct MockState {
    records: Arc<Mutex<Vec<Recorded>>>,
    respond: Arc<dyn Fn(&Recorded) -> Response + Send + Sync>,
}

async fn record(State(state): State<MockState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    let recorded = Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts.headers,
        body,
    };

    let response = (state.respond)(&recorded);
    state.records.lock().unwrap().push(recorded);
    response
}

/// Spawns a mock endpoint and returns the account URL plus the request log.
async fn mock_server(
    respond: impl Fn(&Recorded) -> Response + Send + Sync + 'static,
) -> (Url, Arc<Mutex<Vec<Recorded>>>) {
    let records = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        records: records.clone(),
        respond: Arc::new(respond),
    };
    let app = Router::new().fallback(record).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let url = Url::parse(&format!("http://{addr}/v1/AUTH_test")).unwrap();
    (url, records)
}

fn operations(endpoint: Url) -> ObjectOperations {
    let config = SwiftConfig::new(endpoint, TOKEN).unwrap();
    ObjectOperations::new(SwiftClient::new(config).unwrap())
}

fn json_listing(body: &'static str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

const LISTING_PAGE: &str = r#"[
    {
        "hash": "451e372e48e0f6b1114fa0724aa79fa1",
        "last_modified": "2009-11-10T23:00:00.000000",
        "bytes": 14,
        "name": "goodbye",
        "content_type": "application/octet-stream"
    }
]"#;

#[tokio::test]
async fn download_object() {
    let (url, records) =
        mock_server(|_| (StatusCode::OK, "Successful download content").into_response()).await;

    let content = operations(url)
        .download("testContainer", "testObject", &DownloadOpts::default())
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(content, "Successful download content");

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].method, "GET");
    assert_eq!(records[0].path, "/v1/AUTH_test/testContainer/testObject");
    assert_eq!(records[0].header("x-auth-token"), Some(TOKEN));
    assert_eq!(records[0].header("accept"), Some("application/json"));
}

#[tokio::test]
async fn download_with_range() {
    let (url, records) = mock_server(|_| {
        (StatusCode::PARTIAL_CONTENT, "Succ").into_response()
    })
    .await;

    let result = operations(url)
        .download(
            "testContainer",
            "testObject",
            &DownloadOpts::default().with_range("bytes=0-3"),
        )
        .await
        .unwrap();
    assert_eq!(result.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(result.bytes().await.unwrap().as_ref(), b"Succ");

    let records = records.lock().unwrap();
    assert_eq!(records[0].header("range"), Some("bytes=0-3"));
}

#[tokio::test]
async fn download_with_conditions() {
    let (url, records) = mock_server(|_| (StatusCode::OK, "content").into_response()).await;

    let opts = DownloadOpts::default()
        .with_if_match("451e372e48e0f6b1114fa0724aa79fa1")
        .with_if_none_match("d692a23acf7b9a8f3b1d103a7a0b4a26")
        .with_if_modified_since(datetime!(2009-11-10 23:00:00 UTC))
        .with_if_unmodified_since(datetime!(2009-11-11 23:00:00 UTC));
    operations(url)
        .download("testContainer", "testObject", &opts)
        .await
        .unwrap();

    let records = records.lock().unwrap();
    assert_eq!(
        records[0].header("if-match"),
        Some("451e372e48e0f6b1114fa0724aa79fa1")
    );
    assert_eq!(
        records[0].header("if-none-match"),
        Some("d692a23acf7b9a8f3b1d103a7a0b4a26")
    );
    assert_eq!(
        records[0].header("if-modified-since"),
        Some("Tue, 10 Nov 2009 23:00:00 GMT")
    );
    assert_eq!(
        records[0].header("if-unmodified-since"),
        Some("Wed, 11 Nov 2009 23:00:00 GMT")
    );
}

#[tokio::test]
async fn list_object_info() {
    let (url, records) = mock_server(|_| json_listing(LISTING_PAGE)).await;

    let page = operations(url)
        .list("testContainer", &ListOpts::default().full())
        .await
        .unwrap();

    let objects = page.objects().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].name, "goodbye");
    assert_eq!(objects[0].hash, "451e372e48e0f6b1114fa0724aa79fa1");
    assert_eq!(objects[0].bytes, 14);
    assert_eq!(objects[0].content_type, "application/octet-stream");
    assert_eq!(objects[0].last_modified, datetime!(2009-11-10 23:00:00 UTC));

    let records = records.lock().unwrap();
    assert_eq!(records[0].method, "GET");
    assert_eq!(records[0].path, "/v1/AUTH_test/testContainer");
    assert_eq!(records[0].header("x-auth-token"), Some(TOKEN));
    assert_eq!(records[0].header("accept"), Some("application/json"));
}

#[tokio::test]
async fn list_object_names() {
    let (url, records) = mock_server(|_| {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain")],
            "helloworld\ngoodbye\n",
        )
            .into_response()
    })
    .await;

    let page = operations(url)
        .list("testContainer", &ListOpts::default())
        .await
        .unwrap();
    assert_eq!(page.names().unwrap(), vec!["helloworld", "goodbye"]);

    let records = records.lock().unwrap();
    assert_eq!(records[0].header("accept"), Some("text/plain"));
}

#[tokio::test]
async fn list_pagination_advances_marker() {
    let (url, records) = mock_server(|rec| match rec.query_param("marker") {
        None => json_listing(LISTING_PAGE),
        Some("goodbye") => json_listing("[]"),
        Some(other) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("unexpected marker {other}"),
        )
            .into_response(),
    })
    .await;

    let mut pager = operations(url).pages("testContainer", ListOpts::default().full());

    let first = pager.next_page().await.unwrap().unwrap();
    assert_eq!(first.names().unwrap(), vec!["goodbye"]);
    assert!(pager.next_page().await.unwrap().is_none());
    assert!(pager.next_page().await.unwrap().is_none());

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].query_param("marker"), None);
    assert_eq!(records[1].query_param("marker"), Some("goodbye"));
}

#[tokio::test]
async fn list_pagination_as_stream() {
    use futures::StreamExt;

    let (url, _records) = mock_server(|rec| match rec.query_param("marker") {
        None => json_listing(LISTING_PAGE),
        Some(_) => json_listing("[]"),
    })
    .await;

    let pager = operations(url).pages("testContainer", ListOpts::default().full());
    let mut stream = Box::pin(pager.into_stream());

    let mut names = Vec::new();
    while let Some(page) = stream.next().await {
        names.extend(page.unwrap().names().unwrap());
    }
    assert_eq!(names, vec!["goodbye"]);
}

#[tokio::test]
async fn create_object() {
    let (url, records) = mock_server(|_| {
        (
            StatusCode::CREATED,
            [(header::ETAG, "d692a23acf7b9a8f3b1d103a7a0b4a26")],
            "",
        )
            .into_response()
    })
    .await;

    let opts = CreateOpts::default()
        .with_content_type("text/plain")
        .with_metadata(ObjectMetadata::new().with_entry("Source", "contract-test"));
    let receipt = operations(url)
        .create(
            "testContainer",
            "testObject",
            "Did gyre and gimble in the wabe",
            &opts,
        )
        .await
        .unwrap();
    assert_eq!(receipt.etag.as_deref(), Some("d692a23acf7b9a8f3b1d103a7a0b4a26"));

    let records = records.lock().unwrap();
    assert_eq!(records[0].method, "PUT");
    assert_eq!(records[0].path, "/v1/AUTH_test/testContainer/testObject");
    assert_eq!(records[0].header("x-auth-token"), Some(TOKEN));
    assert_eq!(records[0].header("content-type"), Some("text/plain"));
    assert_eq!(records[0].header("x-object-meta-source"), Some("contract-test"));
    assert_eq!(records[0].body.as_ref(), b"Did gyre and gimble in the wabe");
}

#[tokio::test]
async fn create_with_checksum_and_expiry() {
    let (url, records) = mock_server(|_| StatusCode::CREATED.into_response()).await;

    let opts = CreateOpts::default()
        .with_etag("d692a23acf7b9a8f3b1d103a7a0b4a26")
        .with_detect_content_type()
        .with_delete_after(3600)
        .with_delete_at(1_257_894_000);
    operations(url)
        .create("testContainer", "testObject", "content", &opts)
        .await
        .unwrap();

    let records = records.lock().unwrap();
    assert_eq!(
        records[0].header("etag"),
        Some("d692a23acf7b9a8f3b1d103a7a0b4a26")
    );
    assert_eq!(records[0].header("x-detect-content-type"), Some("true"));
    assert_eq!(records[0].header("x-delete-after"), Some("3600"));
    assert_eq!(records[0].header("x-delete-at"), Some("1257894000"));
}

#[tokio::test]
async fn copy_object() {
    let (url, records) = mock_server(|_| StatusCode::CREATED.into_response()).await;

    let opts = CopyOpts::new("/newTestContainer/newTestObject".parse().unwrap());
    operations(url)
        .copy("testContainer", "testObject", &opts)
        .await
        .unwrap();

    let records = records.lock().unwrap();
    assert_eq!(records[0].method, "COPY");
    assert_eq!(records[0].path, "/v1/AUTH_test/testContainer/testObject");
    assert_eq!(records[0].header("x-auth-token"), Some(TOKEN));
    assert_eq!(
        records[0].header("destination"),
        Some("/newTestContainer/newTestObject")
    );
}

#[tokio::test]
async fn delete_object() {
    let (url, records) = mock_server(|_| StatusCode::NO_CONTENT.into_response()).await;

    operations(url)
        .delete("testContainer", "testObject", &DeleteOpts::new())
        .await
        .unwrap();

    let records = records.lock().unwrap();
    assert_eq!(records[0].method, "DELETE");
    assert_eq!(records[0].path, "/v1/AUTH_test/testContainer/testObject");
    assert_eq!(records[0].header("x-auth-token"), Some(TOKEN));
}

#[tokio::test]
async fn update_object_metadata() {
    let (url, records) = mock_server(|_| StatusCode::ACCEPTED.into_response()).await;

    let opts = UpdateOpts::default()
        .with_metadata(ObjectMetadata::new().with_entry("Release-State", "objects"));
    operations(url)
        .update("testContainer", "testObject", &opts)
        .await
        .unwrap();

    let records = records.lock().unwrap();
    assert_eq!(records[0].method, "POST");
    assert_eq!(records[0].header("x-auth-token"), Some(TOKEN));
    assert_eq!(
        records[0].header("x-object-meta-release-state"),
        Some("objects")
    );
}

#[tokio::test]
async fn get_object_headers() {
    let (url, records) = mock_server(|_| {
        (
            StatusCode::NO_CONTENT,
            [
                ("X-Object-Meta-Release-State", "objects"),
                ("Etag", "451e372e48e0f6b1114fa0724aa79fa1"),
            ],
            "",
        )
            .into_response()
    })
    .await;

    let result = operations(url)
        .get("testContainer", "testObject", &GetOpts::default())
        .await
        .unwrap();
    assert_eq!(result.metadata().get("Release-State"), Some("objects"));
    assert_eq!(result.etag(), Some("451e372e48e0f6b1114fa0724aa79fa1"));

    let records = records.lock().unwrap();
    assert_eq!(records[0].method, "HEAD");
    assert_eq!(records[0].header("x-auth-token"), Some(TOKEN));
}

#[tokio::test]
async fn missing_object_maps_to_not_found() {
    let (url, _records) = mock_server(|_| StatusCode::NOT_FOUND.into_response()).await;

    let err = operations(url)
        .download("testContainer", "missing", &DownloadOpts::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn rejected_token_maps_to_unauthorized() {
    let (url, _records) = mock_server(|_| StatusCode::UNAUTHORIZED.into_response()).await;

    let err = operations(url)
        .get("testContainer", "testObject", &GetOpts::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unauthorized { status: 401 }));
}

#[tokio::test]
async fn unexpected_status_carries_body_snippet() {
    let (url, _records) = mock_server(|_| {
        (StatusCode::INTERNAL_SERVER_ERROR, "disk full").into_response()
    })
    .await;

    let err = operations(url)
        .delete("testContainer", "testObject", &DeleteOpts::new())
        .await
        .unwrap_err();
    match err {
        Error::UnexpectedStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "disk full");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}
