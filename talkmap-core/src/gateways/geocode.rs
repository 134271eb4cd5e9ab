use std::time::Duration;
use thiserror::Error;

use crate::entities::Coordinates;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Geocoding service timed out")]
    TimedOut,
    #[error("Geocoding service error: {0}")]
    Service(String),
    #[error("Invalid geocoding response: {0}")]
    InvalidResponse(String),
}

impl GeocodingError {
    /// Timeouts and service failures are transient and worth another try.
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::TimedOut | Self::Service(_))
    }
}

pub trait GeoCodingGateway {
    /// Look up a free-text location.
    ///
    /// Returns `Ok(None)` if the service answered but did not know the place.
    fn forward(&self, query: &str, timeout: Duration)
        -> Result<Option<Coordinates>, GeocodingError>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn forward(
        &self,
        query: &str,
        timeout: Duration,
    ) -> Result<Option<Coordinates>, GeocodingError> {
        (**self).forward(query, timeout)
    }
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn forward(
        &self,
        query: &str,
        timeout: Duration,
    ) -> Result<Option<Coordinates>, GeocodingError> {
        (**self).forward(query, timeout)
    }
}
