//! Integration tests for the port adapters
//!
//! Drives `GeocodingAdapter` and `TransitAdapter` against wiremock servers
//! and checks that failures arrive as the right `ApplicationError` kind.

use std::sync::Arc;

use application::{ApplicationError, GeocodingPort, NearestStopService, StopLocatorPort};
use domain::{GeoLocation, PlaceQuery, WheelchairAccessibility};
use infrastructure::{AppConfig, GeocodingAdapter, TransitAdapter};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Helpers
// ============================================================================

fn config_for(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.mapbox.base_url = format!("{}/geocode", server.uri());
    config.mapbox.access_token = Some(SecretString::from("pk.test"));
    config.mbta.base_url = format!("{}/stops", server.uri());
    config.mbta.api_key = Some(SecretString::from("mbta-test"));
    config
}

fn geocoding_adapter(config: &AppConfig) -> GeocodingAdapter {
    GeocodingAdapter::new(&config.mapbox.to_client_config()).unwrap()
}

fn transit_adapter(config: &AppConfig) -> TransitAdapter {
    TransitAdapter::new(&config.mbta.to_client_config()).unwrap()
}

fn boston_common_body() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [-71.0695, 42.3555] },
            "properties": { "name": "Boston Common" }
        }]
    })
}

fn park_street_body() -> serde_json::Value {
    json!({
        "data": [{
            "id": "place-pktrm",
            "type": "stop",
            "attributes": {
                "name": "Park Street",
                "wheelchair_boarding": 1,
                "latitude": 42.356_395,
                "longitude": -71.062_424
            }
        }]
    })
}

// ============================================================================
// Geocoding Adapter Tests
// ============================================================================

mod geocoding_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn geocodes_place() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .and(query_param("q", "Boston Common"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_common_body()))
            .mount(&server)
            .await;

        let adapter = geocoding_adapter(&config_for(&server));
        let place = PlaceQuery::parse("Boston Common").unwrap();

        let location = adapter.geocode(&place).await.unwrap();
        assert!((location.latitude() - 42.3555).abs() < 1e-9);
        assert!((location.longitude() - -71.0695).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_features_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "features": [] })))
            .mount(&server)
            .await;

        let adapter = geocoding_adapter(&config_for(&server));
        let place = PlaceQuery::parse("Atlantis").unwrap();

        let err = adapter.geocode(&place).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
        assert_eq!(err.to_string(), "Could not find coordinates for 'Atlantis'");
    }

    #[tokio::test]
    async fn missing_token_is_configuration_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.mapbox.access_token = None;
        let adapter = geocoding_adapter(&config);
        assert!(!adapter.is_configured());

        let place = PlaceQuery::parse("Boston Common").unwrap();
        let err = adapter.geocode(&place).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[tokio::test]
    async fn server_error_is_external_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let adapter = geocoding_adapter(&config_for(&server));
        let place = PlaceQuery::parse("Boston Common").unwrap();

        let err = adapter.geocode(&place).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}

// ============================================================================
// Transit Adapter Tests
// ============================================================================

mod transit_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn finds_nearest_stop() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stops"))
            .and(query_param("sort", "distance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(park_street_body()))
            .mount(&server)
            .await;

        let adapter = transit_adapter(&config_for(&server));
        let location = GeoLocation::new(42.3555, -71.0695).unwrap();

        let stop = adapter.nearest_stop(&location).await.unwrap();
        assert_eq!(stop.name, "Park Street");
        assert_eq!(stop.wheelchair_accessible, WheelchairAccessibility::Accessible);
    }

    #[tokio::test]
    async fn missing_accessibility_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stops"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "id": "1", "attributes": { "name": "Boylston" } }]
            })))
            .mount(&server)
            .await;

        let adapter = transit_adapter(&config_for(&server));
        let location = GeoLocation::new(42.3555, -71.0695).unwrap();

        let stop = adapter.nearest_stop(&location).await.unwrap();
        assert_eq!(stop.wheelchair_accessible, WheelchairAccessibility::Unknown);
    }

    #[tokio::test]
    async fn empty_data_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stops"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let adapter = transit_adapter(&config_for(&server));
        let location = GeoLocation::new(0.0, 0.0).unwrap();

        let err = adapter.nearest_stop(&location).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_external_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stops"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let adapter = transit_adapter(&config_for(&server));
        let location = GeoLocation::new(42.3555, -71.0695).unwrap();

        let err = adapter.nearest_stop(&location).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}

// ============================================================================
// Full Pipeline Tests
// ============================================================================

mod pipeline_tests {
    use super::*;

    fn service(config: &AppConfig) -> NearestStopService {
        NearestStopService::new(
            Arc::new(geocoding_adapter(config)),
            Arc::new(transit_adapter(config)),
        )
    }

    #[tokio::test]
    async fn boston_common_resolves_to_park_street() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_common_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stops"))
            .and(query_param("filter[latitude]", "42.3555"))
            .and(query_param("filter[longitude]", "-71.0695"))
            .respond_with(ResponseTemplate::new(200).set_body_json(park_street_body()))
            .expect(1)
            .mount(&server)
            .await;

        let lookup = service(&config_for(&server))
            .find_nearest_stop("  Boston Common  ")
            .await
            .unwrap();

        assert_eq!(lookup.place.as_str(), "Boston Common");
        assert_eq!(lookup.stop.name, "Park Street");
        assert_eq!(lookup.stop.wheelchair_accessible.is_accessible(), Some(true));
    }

    #[tokio::test]
    async fn unknown_place_never_queries_stops() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "features": [] })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stops"))
            .respond_with(ResponseTemplate::new(200).set_body_json(park_street_body()))
            .expect(0)
            .mount(&server)
            .await;

        let err = service(&config_for(&server))
            .find_nearest_stop("Atlantis")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn blank_place_sends_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = service(&config_for(&server))
            .find_nearest_stop("   ")
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(_)));
    }
}
