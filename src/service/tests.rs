//! Tests for the paging service

use super::*;
use crate::config::ServiceConfig;
use crate::error::{DecodeError, Error, TransportError};
use crate::transport::{StubTransport, Transport};
use serde_json::json;
use std::sync::Arc;

fn three_shows() -> serde_json::Value {
    json!({
        "total": "3",
        "page": 1,
        "pages": 1,
        "tv_shows": [
            {"id": 1, "name": "Seinfeld", "network": "NBC", "status": "Ended", "start_date": "1989-07-05", "end_date": "1998-05-14", "image_thumbnail_path": "https://e.com/1.jpg"},
            {"id": 2, "name": "Rick and Morty", "network": "Adult Swim", "status": "Running", "start_date": "2013-12-02", "image_thumbnail_path": "https://e.com/2.jpg"},
            {"id": 3, "name": "White Lotus", "network": "HBO", "status": "Running", "start_date": "2021-07-11", "image_thumbnail_path": "https://e.com/3.jpg"}
        ]
    })
}

fn service_with(stub: &Arc<StubTransport>) -> ShowService {
    let transport: Arc<dyn Transport> = stub.clone();
    ShowService::new(transport, ServiceConfig::default())
}

#[tokio::test]
async fn test_popular_returns_shows_in_order() {
    let stub = Arc::new(StubTransport::json(&three_shows()));
    let service = service_with(&stub);

    let shows = tokio_test::assert_ok!(service.popular(1).await);
    let names: Vec<&str> = shows.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Seinfeld", "Rick and Morty", "White Lotus"]);
}

#[tokio::test]
async fn test_popular_issues_one_exchange_per_page() {
    let stub = Arc::new(StubTransport::json(&three_shows()));
    let service = service_with(&stub);

    for page in [1_u32, 2, 10, 457] {
        service.popular(page).await.unwrap();
    }

    let requests = stub.requests();
    assert_eq!(requests.len(), 4);
    let pages: Vec<&str> = requests
        .iter()
        .map(|r| r.query_value("page").unwrap())
        .collect();
    assert_eq!(pages, vec!["1", "2", "10", "457"]);

    for request in &requests {
        assert_eq!(request.scheme, "https");
        assert_eq!(request.host, "www.episodate.com");
        assert_eq!(request.path, "/api/most-popular");
        assert_eq!(request.query.len(), 1);
    }
}

#[tokio::test]
async fn test_popular_uses_configured_host() {
    let stub = Arc::new(StubTransport::json(&three_shows()));
    let transport: Arc<dyn Transport> = stub.clone();
    let service = ShowService::new(transport, ServiceConfig::with_host("episodate.com"));

    service.popular(1).await.unwrap();
    assert_eq!(stub.requests()[0].host, "episodate.com");
}

#[tokio::test]
async fn test_popular_envelope_keeps_counters() {
    let stub = Arc::new(StubTransport::json(&three_shows()));
    let service = service_with(&stub);

    let envelope = service.popular_envelope(1).await.unwrap();
    assert_eq!(envelope.total.as_deref(), Some("3"));
    assert_eq!(envelope.pages, Some(1));
    assert_eq!(envelope.len(), 3);
}

#[tokio::test]
async fn test_popular_propagates_transport_error() {
    let stub = Arc::new(StubTransport::failure(TransportError::http_status(
        500,
        "boom",
    )));
    let service = service_with(&stub);

    let err = tokio_test::assert_err!(service.popular(1).await);
    match err {
        Error::Transport(TransportError::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
    assert_eq!(stub.request_count(), 1);
}

#[tokio::test]
async fn test_popular_propagates_decode_error() {
    let mut payload = three_shows();
    payload["tv_shows"][2]["start_date"] = json!("July 11, 2021");
    let stub = Arc::new(StubTransport::json(&payload));
    let service = service_with(&stub);

    let err = service.popular(1).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Decode(DecodeError::InvalidValue { .. })
    ));
}

#[tokio::test]
async fn test_popular_malformed_payload() {
    let stub = Arc::new(StubTransport::success("{not json"));
    let service = service_with(&stub);

    let err = service.popular(1).await.unwrap_err();
    assert!(matches!(err, Error::Decode(DecodeError::Malformed { .. })));
}

#[test]
fn test_http_service_rejects_invalid_config() {
    let err = ShowService::http(
        ServiceConfig::with_host(""),
        crate::transport::TransportConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_service_debug() {
    let stub = Arc::new(StubTransport::success("{}"));
    let service = service_with(&stub);
    assert!(format!("{service:?}").contains("www.episodate.com"));
}
