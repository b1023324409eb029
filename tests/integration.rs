// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use geolens::application::port::transport::{HttpTransport, TransportError, TransportResponse};
use geolens::{config, FetchError, ImageReference, ProviderConfig, SearchClient, SearchParameters};
use tempfile::tempdir;
use url::Url;

/// Transport that answers the search endpoint with a scripted page and
/// every other URL with scripted image bytes.
struct RoutedTransport {
    search_body: &'static str,
    image_bytes: Vec<u8>,
}

#[async_trait]
impl HttpTransport for RoutedTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let body = if url.path() == "/services/rest" {
            self.search_body.as_bytes().to_vec()
        } else {
            self.image_bytes.clone()
        };
        Ok(TransportResponse { status: 200, body })
    }
}

const SEARCH_PAGE: &str = r#"{
    "photos": {
        "page": 1,
        "pages": 3,
        "perpage": 21,
        "photo": [
            {"id": "101", "owner": "a", "title": "fountain", "url_m": "https://live.example.com/101_m.jpg"},
            {"id": "102", "owner": "b", "title": "palace", "url_m": "https://live.example.com/102_m.jpg"},
            {"id": "103", "owner": "c", "title": "park", "url_m": "https://live.example.com/103_m.jpg"}
        ]
    },
    "stat": "ok"
}"#;

fn pinned_location() -> SearchParameters {
    SearchParameters::new(48.2082, 16.3738, 5.0)
}

#[tokio::test]
async fn search_then_download_round_trip() {
    let jpeg_magic = vec![0xFF, 0xD8, 0xFF, 0xE0];
    let transport = RoutedTransport {
        search_body: SEARCH_PAGE,
        image_bytes: jpeg_magic.clone(),
    };
    let client = SearchClient::with_transport(ProviderConfig::with_api_key("test-key"), transport);

    let references = client.search_images(&pinned_location()).await.unwrap();
    assert_eq!(references.len(), 3);
    assert_eq!(references[0].as_str(), "https://live.example.com/101_m.jpg");
    assert_eq!(references[2].as_str(), "https://live.example.com/103_m.jpg");

    let bytes = client.download_bytes(&references[0]).await.unwrap();
    assert_eq!(bytes, jpeg_magic);
}

#[tokio::test]
async fn repeated_searches_yield_structurally_equal_pages() {
    let transport = RoutedTransport {
        search_body: SEARCH_PAGE,
        image_bytes: Vec::new(),
    };
    let client = SearchClient::with_transport(ProviderConfig::with_api_key("test-key"), transport);

    let first = client.search_images(&pinned_location()).await.unwrap();
    let second = client.search_images(&pinned_location()).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_downloads_are_independent() {
    let transport = RoutedTransport {
        search_body: SEARCH_PAGE,
        image_bytes: vec![0xAB; 32],
    };
    let client = SearchClient::with_transport(ProviderConfig::with_api_key("test-key"), transport);

    let a = ImageReference::parse("https://live.example.com/101_m.jpg").unwrap();
    let b = ImageReference::parse("https://live.example.com/102_m.jpg").unwrap();

    let (first, second) = tokio::join!(client.download_bytes(&a), client.download_bytes(&b));
    assert_eq!(first.unwrap(), vec![0xAB; 32]);
    assert_eq!(second.unwrap(), vec![0xAB; 32]);
}

/// Failing transport used to check that errors cross the public API
/// boundary intact.
struct RefusingTransport;

#[async_trait]
impl HttpTransport for RefusingTransport {
    async fn get(&self, _url: &Url) -> Result<TransportResponse, TransportError> {
        Err(TransportError("connection refused (os error 111)".to_string()))
    }
}

#[tokio::test]
async fn transport_failures_surface_with_their_message() {
    let client =
        SearchClient::with_transport(ProviderConfig::with_api_key("test-key"), RefusingTransport);

    let err = client.search_images(&pinned_location()).await.unwrap_err();
    match err {
        FetchError::Transport(msg) => assert!(msg.contains("connection refused")),
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[test]
fn config_round_trips_through_the_filesystem() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = ProviderConfig {
        api_key: "0123456789abcdef".to_string(),
        page_size: 30,
        ..ProviderConfig::default()
    };
    config::save_to_path(&saved, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded, saved);

    dir.close().expect("failed to close temporary directory");
}
