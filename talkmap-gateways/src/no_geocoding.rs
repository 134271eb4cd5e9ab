use std::time::Duration;

use talkmap_core::{
    entities::Coordinates,
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};

/// Used if no geocoding service has been configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeoCoding;

impl GeoCodingGateway for NoGeoCoding {
    fn forward(&self, query: &str, _: Duration) -> Result<Option<Coordinates>, GeocodingError> {
        warn!("Cannot geocode '{query}' because no geocoding gateway was configured");
        Ok(None)
    }
}
