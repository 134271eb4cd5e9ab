use super::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of geocoding requests per location.
    pub max_attempts: u32,
    /// Upper bound for a single geocoding request.
    pub timeout: Duration,
    /// Pause before every request.
    pub pacing_delay: Duration,
    /// Additional pause after a failed request.
    pub retry_delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_PACING_DELAY: Duration = Duration::from_secs(1);
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            timeout: Self::DEFAULT_TIMEOUT,
            pacing_delay: Self::DEFAULT_PACING_DELAY,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
        }
    }
}

/// Resolves location names to coordinates, preferring the
/// static table over the external geocoder.
pub struct LocationResolver<G, P> {
    table: StaticCoordinateTable,
    geo_gw: G,
    pause: P,
    retry: RetryPolicy,
}

impl<G, P> LocationResolver<G, P>
where
    G: GeoCodingGateway,
    P: Pause,
{
    pub fn new(table: StaticCoordinateTable, geo_gw: G, pause: P, retry: RetryPolicy) -> Self {
        Self {
            table,
            geo_gw,
            pause,
            retry,
        }
    }

    /// `Ok(None)` means the location cannot be placed on the map.
    pub fn resolve(&self, location: &str) -> Result<Option<Coordinates>> {
        match self.table.lookup(location) {
            Lookup::Found(pos) => Ok(Some(pos)),
            Lookup::FoundNoCoordinates => {
                log::debug!("No coordinates for '{location}'");
                Ok(None)
            }
            Lookup::NotFound => self.geocode(location),
        }
    }

    /// Asks the external geocoder, retrying on timeouts and service errors.
    ///
    /// Any other geocoding error is returned immediately.
    pub fn geocode(&self, location: &str) -> Result<Option<Coordinates>> {
        let RetryPolicy {
            max_attempts,
            timeout,
            pacing_delay,
            retry_delay,
        } = self.retry;
        for attempt in 1..=max_attempts {
            self.pause.pause(pacing_delay);
            match self.geo_gw.forward(location, timeout) {
                Ok(Some(pos)) => {
                    log::info!("Geocoded {location}: {pos}");
                    return Ok(Some(pos));
                }
                Ok(None) => {
                    log::debug!("Attempt {attempt} for {location} returned no result");
                }
                Err(err) if err.is_retriable() => {
                    log::warn!("Attempt {attempt} failed for {location}: {err}");
                    self.pause.pause(retry_delay);
                }
                Err(source) => {
                    return Err(Error::Geocoding {
                        location: location.to_string(),
                        source,
                    });
                }
            }
        }
        log::warn!("Could not geocode: {location}");
        Ok(None)
    }
}
