//! API host endpoints: envelope unwrapping and failure classification

use deno_registry_client::{ModuleQuery, ReportedSort, SortOrder};
use integration_tests::common::{create_test_environment, envelope, failure, module_json};
use integration_tests::error::{DecodeError, NetworkError};
use integration_tests::{json, Error, ErrorCategory, Matcher};

#[tokio::test]
async fn test_stats_unwraps_envelope() {
    let (mut server, client) = create_test_environment().await;
    let mock = server
        .mock("GET", "/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!({
            "total_count": 5,
            "total_versions": 12,
            "recently_added_modules": [module_json("oak", 3000)],
            "recently_uploaded_versions": [
                { "name": "oak", "version": "v6.0.0", "created_at": "2021-01-01T00:00:00Z" }
            ]
        })))
        .create_async()
        .await;

    let stats = client.get_stats().await.unwrap();

    assert_eq!(stats.total_count, 5);
    assert_eq!(stats.recently_added_modules[0].name, "oak");
    assert_eq!(
        stats.recently_uploaded_versions[0].version.as_deref(),
        Some("v6.0.0")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_remote_error() {
    let (mut server, client) = create_test_environment().await;
    let mock = server
        .mock("GET", "/modules/does_not_exist")
        .with_status(404)
        .with_body(failure("not found"))
        .create_async()
        .await;

    let err = client.get_module("does_not_exist").await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Remote);
    assert_eq!(err.remote_message(), Some("not found"));
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "not found");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failure_envelope_with_ok_status() {
    let (mut server, client) = create_test_environment().await;
    let _mock = server
        .mock("GET", "/builds/missing")
        .with_status(200)
        .with_body(r#"{"success": false}"#)
        .create_async()
        .await;

    let err = client.get_build("missing").await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Remote);
    assert_eq!(err.remote_message(), Some("unknown error"));
}

#[tokio::test]
async fn test_success_without_data_is_decode_error() {
    let (mut server, client) = create_test_environment().await;
    let _mock = server
        .mock("GET", "/stats")
        .with_status(200)
        .with_body(r#"{"success": true, "data": null}"#)
        .create_async()
        .await;

    let err = client.get_stats().await.unwrap_err();

    assert!(matches!(err, Error::Decode(DecodeError::MissingData { .. })));
}

#[tokio::test]
async fn test_shape_mismatch_is_decode_error() {
    let (mut server, client) = create_test_environment().await;
    let _mock = server
        .mock("GET", "/stats")
        .with_status(200)
        .with_body(envelope(json!({ "total_count": "many" })))
        .create_async()
        .await;

    let err = client.get_stats().await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Decode);
}

#[tokio::test]
async fn test_html_error_page_is_transport_error() {
    let (mut server, client) = create_test_environment().await;
    let _mock = server
        .mock("GET", "/stats")
        .with_status(502)
        .with_body("<html><body>Bad Gateway</body></html>")
        .create_async()
        .await;

    let err = client.get_stats().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Network(NetworkError::HttpStatus { status: 502, .. })
    ));
    assert!(err.is_temporary());
}

#[tokio::test]
async fn test_rate_limit_keeps_retry_after() {
    let (mut server, client) = create_test_environment().await;
    let _mock = server
        .mock("GET", "/modules")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("retry-after", "30")
        .with_body("slow down")
        .create_async()
        .await;

    let err = client.list_modules(&ModuleQuery::default()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Network(NetworkError::RateLimit {
            retry_after: Some(30)
        })
    ));
}

#[tokio::test]
async fn test_pagination_walks_pages() {
    let (mut server, client) = create_test_environment().await;
    let page = |n: u32, names: &[&str]| {
        envelope(json!({
            "total_count": 3,
            "options": { "limit": 2, "page": n, "sort": "oldest" },
            "results": names.iter().map(|n| module_json(n, 1)).collect::<Vec<_>>()
        }))
    };
    let first = server
        .mock("GET", "/modules")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(page(1, &["a", "b"]))
        .create_async()
        .await;
    let second = server
        .mock("GET", "/modules")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(page(2, &["c"]))
        .create_async()
        .await;

    let mut query = ModuleQuery::new().with_limit(2).with_sort(SortOrder::Oldest);
    let mut names = Vec::new();
    loop {
        let result = client.list_modules(&query).await.unwrap();
        assert_eq!(result.options.sort, ReportedSort::Oldest);
        names.extend(result.results.iter().map(|m| m.name.clone()));
        if !result.has_more() {
            break;
        }
        query = query.with_page(query.page + 1);
    }

    assert_eq!(names, ["a", "b", "c"]);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_invalid_name_never_hits_network() {
    let (mut server, client) = create_test_environment().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client.get_module("..").await.unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(err.category(), ErrorCategory::Data);
    mock.assert_async().await;
}
