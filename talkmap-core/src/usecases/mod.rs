use std::collections::HashSet;

mod aggregate_locations;
mod error;
mod generate_talkmap;
mod render_address_points;
mod resolve_location;
mod scan_records;


pub type Result<T> = std::result::Result<T, Error>;

pub use self::{
    aggregate_locations::*, error::Error, generate_talkmap::*, render_address_points::*,
    resolve_location::*, scan_records::*,
};

/// Location values that are valid but never placed on the map.
pub const DEFAULT_EXCLUDED_LOCATIONS: &[&str] = &["Virtual", "Location TBD"];

pub fn default_excluded_locations() -> HashSet<String> {
    DEFAULT_EXCLUDED_LOCATIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::geocode::{GeoCodingGateway, GeocodingError},
        pause::Pause,
        static_table::{Lookup, StaticCoordinateTable},
    };
}
