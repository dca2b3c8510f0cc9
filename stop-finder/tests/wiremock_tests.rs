//! End-to-end tests against mock HTTP servers (wiremock-based).

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stop_finder::fetch::{FetchError, FetchJson, FetcherConfig, JsonFetcher};
use stop_finder::geocode::GeocoderConfig;
use stop_finder::stops::StopsConfig;
use stop_finder::{ErrorKind, StopFinder};

const FENWAY_PATH: &str = "/geocoding/v5/mapbox.places/Fenway%20Park.json";

fn fenway_places_json() -> Value {
    json!({
        "type": "FeatureCollection",
        "query": ["fenway", "park"],
        "features": [
            {
                "id": "poi.1",
                "place_name": "Fenway Park, 4 Jersey St, Boston, Massachusetts 02215",
                "geometry": { "type": "Point", "coordinates": [-71.0972, 42.3467] }
            },
            {
                "id": "poi.2",
                "place_name": "Fenway Park Gift Shop, Boston",
                "geometry": { "type": "Point", "coordinates": [-71.0980, 42.3460] }
            }
        ]
    })
}

fn stops_json(name: &str, wheelchair_boarding: i64) -> Value {
    json!({
        "data": [
            {
                "type": "stop",
                "id": "place-kencl",
                "attributes": {
                    "name": name,
                    "latitude": 42.348949,
                    "longitude": -71.095169,
                    "wheelchair_boarding": wheelchair_boarding
                }
            },
            {
                "type": "stop",
                "id": "place-fenwy",
                "attributes": {
                    "name": "Fenway",
                    "wheelchair_boarding": 2
                }
            }
        ],
        "jsonapi": { "version": "1.0" }
    })
}

fn finder_for(server: &MockServer) -> StopFinder<JsonFetcher> {
    let fetcher = JsonFetcher::new(&FetcherConfig::default().with_timeout(5)).unwrap();
    StopFinder::new(
        GeocoderConfig::new("pk.test").with_base_url(server.uri()),
        StopsConfig::new("mbta-test").with_base_url(server.uri()),
        fetcher,
    )
    .unwrap()
}

async fn mount_geocoding(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(FENWAY_PATH))
        .and(query_param("access_token", "pk.test"))
        .and(query_param("types", "poi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_stops(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/stops"))
        .and(query_param("filter[latitude]", "42.3467"))
        .and(query_param("filter[longitude]", "-71.0972"))
        .and(query_param("sort", "distance"))
        .and(query_param("api_key", "mbta-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fenway_park_resolves_to_kenmore() {
    let server = MockServer::start().await;
    mount_geocoding(&server, fenway_places_json()).await;
    mount_stops(&server, stops_json("Kenmore", 1)).await;

    let stop = finder_for(&server)
        .find_stop_near("Fenway Park")
        .await
        .unwrap();

    assert_eq!(stop.station_name, "Kenmore");
    assert!(stop.wheelchair_accessible);
}

#[tokio::test]
async fn inaccessible_stop_is_reported() {
    let server = MockServer::start().await;
    mount_geocoding(&server, fenway_places_json()).await;
    mount_stops(&server, stops_json("Ruggles", 2)).await;

    let stop = finder_for(&server)
        .find_stop_near("Fenway Park")
        .await
        .unwrap();

    assert_eq!(stop.station_name, "Ruggles");
    assert!(!stop.wheelchair_accessible);
}

#[tokio::test]
async fn no_features_is_no_match() {
    let server = MockServer::start().await;
    mount_geocoding(&server, json!({ "type": "FeatureCollection", "features": [] })).await;

    let err = finder_for(&server)
        .find_stop_near("Fenway Park")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoMatch);
}

#[tokio::test]
async fn no_stops_is_no_stop_found() {
    let server = MockServer::start().await;
    mount_geocoding(&server, fenway_places_json()).await;
    mount_stops(&server, json!({ "data": [] })).await;

    let err = finder_for(&server)
        .find_stop_near("Fenway Park")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoStopFound);
}

#[tokio::test]
async fn unauthorized_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FENWAY_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"Not Authorized - Invalid Token"}"#))
        .mount(&server)
        .await;

    let err = finder_for(&server)
        .find_stop_near("Fenway Park")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn html_body_is_parse_error() {
    let server = MockServer::start().await;
    mount_geocoding(&server, fenway_places_json()).await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = finder_for(&server)
        .find_stop_near("Fenway Park")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn empty_place_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = finder_for(&server).find_stop_near("").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Nothing listens on the discard port
    let fetcher = JsonFetcher::new(&FetcherConfig::default().with_timeout(2)).unwrap();
    let finder = StopFinder::new(
        GeocoderConfig::new("pk.test").with_base_url("http://127.0.0.1:9"),
        StopsConfig::new("mbta-test").with_base_url("http://127.0.0.1:9"),
        fetcher,
    )
    .unwrap();

    let err = finder.find_stop_near("Fenway Park").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn fetcher_reports_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&server)
        .await;

    let fetcher = JsonFetcher::new(&FetcherConfig::default()).unwrap();
    let url = url::Url::parse(&format!("{}/broken", server.uri())).unwrap();

    let err = fetcher.fetch_json(&url).await.unwrap_err();

    match err {
        FetchError::Status { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "try later");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
