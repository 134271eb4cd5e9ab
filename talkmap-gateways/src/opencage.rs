use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use talkmap_core::{
    entities::Coordinates,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};

use crate::http;

pub const DEFAULT_API_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

const USER_AGENT: &str = concat!("talkmap/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct OpenCage {
    client: Client,
    api_url: String,
    api_key: String,
}

impl OpenCage {
    pub fn try_new(api_key: String, api_url: Option<String>) -> reqwest::Result<Self> {
        let client = http::client(USER_AGENT)?;
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn first_result_coordinates(res: Response) -> Result<Option<Coordinates>, GeocodingError> {
    res.results
        .into_iter()
        .next()
        .map(|Place { geometry }| http::coordinates(geometry.lat, geometry.lng))
        .transpose()
}

impl GeoCodingGateway for OpenCage {
    fn forward(
        &self,
        query: &str,
        timeout: Duration,
    ) -> Result<Option<Coordinates>, GeocodingError> {
        let req = self.client.get(&self.api_url).query(&[
            ("q", query),
            ("key", self.api_key.as_str()),
            ("limit", "1"),
            ("no_annotations", "1"),
        ]);
        let res = http::fetch_json(req, timeout)?;
        let pos = first_result_coordinates(res)?;
        debug!("Resolved location '{query}': {pos:?}");
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{api_url, serve_once};

    const SINGAPORE: &str = r#"{
        "documentation": "https://opencagedata.com/api",
        "results": [{
            "components": { "country": "Singapore", "_type": "country" },
            "confidence": 1,
            "formatted": "Singapore",
            "geometry": { "lat": 1.2899175, "lng": 103.8519072 }
        }],
        "status": { "code": 200, "message": "OK" },
        "total_results": 1
    }"#;

    const NO_RESULTS: &str = r#"{
        "results": [],
        "status": { "code": 200, "message": "OK" },
        "total_results": 0
    }"#;

    fn gateway(api_url: String) -> OpenCage {
        OpenCage::try_new("secret".into(), Some(api_url)).unwrap()
    }

    #[test]
    fn parse_first_result() {
        let res: Response = serde_json::from_str(SINGAPORE).unwrap();
        assert_eq!(
            first_result_coordinates(res).unwrap(),
            Some(Coordinates::new_unchecked(1.2899175, 103.8519072))
        );
    }

    #[test]
    fn parse_empty_result() {
        let res: Response = serde_json::from_str(NO_RESULTS).unwrap();
        assert_eq!(first_result_coordinates(res).unwrap(), None);
    }

    #[test]
    fn forward_query() {
        let address = serve_once("200 OK", SINGAPORE, Duration::ZERO);
        let pos = gateway(api_url(address))
            .forward("Singapore", Duration::from_secs(5))
            .unwrap();
        assert_eq!(pos, Some(Coordinates::new_unchecked(1.2899175, 103.8519072)));
    }

    #[test]
    fn report_rejected_api_key_as_service_error() {
        let address = serve_once(
            "401 Unauthorized",
            r#"{"results":[],"status":{"code":401,"message":"invalid API key"}}"#,
            Duration::ZERO,
        );
        let err = gateway(api_url(address))
            .forward("Singapore", Duration::from_secs(5))
            .unwrap_err();
        assert!(matches!(err, GeocodingError::Service(_)));
    }
}
