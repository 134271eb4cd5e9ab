use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use talkmap_core::{entities::Coordinates, gateways::geocode::GeocodingError};

pub fn client(user_agent: &str) -> reqwest::Result<Client> {
    Client::builder().user_agent(user_agent).build()
}

/// Sends the request and decodes the JSON answer.
pub fn fetch_json<T>(req: RequestBuilder, timeout: Duration) -> Result<T, GeocodingError>
where
    T: DeserializeOwned,
{
    let res = req.timeout(timeout).send().map_err(geocoding_error)?;
    let status = res.status();
    if !status.is_success() {
        return Err(GeocodingError::Service(format!(
            "Unexpected response status: {status}"
        )));
    }
    res.json().map_err(geocoding_error)
}

/// Undecodable bodies (e.g. an HTML error page) count as service errors.
pub fn geocoding_error(err: reqwest::Error) -> GeocodingError {
    if err.is_timeout() {
        GeocodingError::TimedOut
    } else {
        GeocodingError::Service(err.to_string())
    }
}

pub fn coordinates(lat: f64, lng: f64) -> Result<Coordinates, GeocodingError> {
    Coordinates::try_new(lat, lng).map_err(|err| GeocodingError::InvalidResponse(err.to_string()))
}
