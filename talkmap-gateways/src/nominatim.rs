use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use talkmap_core::{
    entities::Coordinates,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};

use crate::http;

pub const DEFAULT_API_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Geocoding with the OpenStreetMap Nominatim API.
///
/// The usage policy requires an identifying user agent
/// and at most one request per second.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    api_url: String,
}

impl Nominatim {
    pub fn try_new(user_agent: &str, api_url: Option<String>) -> reqwest::Result<Self> {
        let client = http::client(user_agent)?;
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Ok(Self { client, api_url })
    }
}

// Nominatim encodes the coordinates as strings
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

fn first_place_coordinates(places: Vec<Place>) -> Result<Option<Coordinates>, GeocodingError> {
    let Some(Place { lat, lon }) = places.into_iter().next() else {
        return Ok(None);
    };
    let parse = |deg: &str| {
        deg.trim()
            .parse::<f64>()
            .map_err(|_| GeocodingError::InvalidResponse(format!("Invalid coordinate '{deg}'")))
    };
    http::coordinates(parse(&lat)?, parse(&lon)?).map(Some)
}

impl GeoCodingGateway for Nominatim {
    fn forward(
        &self,
        query: &str,
        timeout: Duration,
    ) -> Result<Option<Coordinates>, GeocodingError> {
        let req = self
            .client
            .get(&self.api_url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")]);
        let places = http::fetch_json(req, timeout)?;
        let pos = first_place_coordinates(places)?;
        debug!("Resolved location '{query}': {pos:?}");
        Ok(pos)
    }
}
