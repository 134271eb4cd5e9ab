use std::collections::HashMap;

use crate::entities::Coordinates;

/// Curated locations that never need an external lookup.
///
/// `None` marks places that are valid talk locations
/// but cannot be placed on a map.
#[rustfmt::skip]
const BUILTIN_LOCATIONS: &[(&str, Option<(f64, f64)>)] = &[
    ("Honolulu, Hawaii"              , Some((21.3099, -157.8581))),
    ("Location TBD"                  , None),
    ("Atlanta, Georgia"              , Some((33.7490,  -84.3880))),
    ("Bentonville, Arkansas"         , Some((36.3729,  -94.2088))),
    ("Dallas, Texas"                 , Some((32.7767,  -96.7970))),
    ("Denver, Colorado"              , Some((39.7392, -104.9903))),
    ("Long Beach, California"        , Some((33.7701, -118.1937))),
    ("Washington, DC"                , Some((38.9072,  -77.0369))),
    ("Phoenix, Arizona"              , Some((33.4484, -112.0740))),
    ("Tempe, Arizona"                , Some((33.4255, -111.9400))),
    ("Manhattan, Kansas"             , Some((39.1836,  -96.5717))),
    ("Virtual"                       , None),
    ("Nashville, Tennessee"          , Some((36.1627,  -86.7816))),
    ("Seattle, Washington"           , Some((47.6062, -122.3321))),
    ("Gainesville, Florida"          , Some((29.6516,  -82.3248))),
    ("Riverside, California"         , Some((33.9806, -117.3755))),
    ("St. Louis, Missouri"           , Some((38.6270,  -90.1994))),
    ("New York, New York"            , Some((40.7128,  -74.0060))),
    ("Hanover, New Hampshire"        , Some((43.7022,  -72.2896))),
    ("Houston, Texas"                , Some((29.7604,  -95.3698))),
    ("Lawrence, Kansas"              , Some((38.9717,  -95.2353))),
    ("Salt Lake City, Utah"          , Some((40.7608, -111.8910))),
    ("South Bend, Indiana"           , Some((41.6764,  -86.2520))),
    ("University Park, Pennsylvania" , Some((40.7982,  -77.8599))),
    ("National Harbor, Maryland"     , Some((38.7829,  -77.0174))),
    ("Rotterdam, Netherlands"        , Some((51.9225,    4.4792))),
    ("College Park, Maryland"        , Some((38.9807,  -76.9370))),
    ("Orlando, Florida"              , Some((28.5383,  -81.3792))),
    ("Singapore"                     , Some(( 1.3521,  103.8198))),
    ("Glasgow, Scotland"             , Some((55.8642,   -4.2518))),
    ("Boston, Massachusetts"         , Some((42.3601,  -71.0589))),
    ("Chicago, Illinois"             , Some((41.8781,  -87.6298))),
    ("Coral Gables, Florida"         , Some((25.7617,  -80.1918))),
    ("Boulder, Colorado"             , Some((40.0150, -105.2705))),
    ("San Diego, California"         , Some((32.7157, -117.1611))),
    ("Miami, Florida"                , Some((25.7617,  -80.1918))),
    ("London, United Kingdom"        , Some((51.5074,   -0.1278))),
    ("Columbia, Missouri"            , Some((38.9517,  -92.3341))),
    ("Tucson, Arizona"               , Some((32.2226, -110.9747))),
    ("San Francisco, California"     , Some((37.7749, -122.4194))),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    Found(Coordinates),
    FoundNoCoordinates,
    NotFound,
}

/// Exact, case-sensitive mapping from location names to coordinates.
#[derive(Debug, Clone, Default)]
pub struct StaticCoordinateTable {
    entries: HashMap<String, Option<Coordinates>>,
}

impl StaticCoordinateTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let entries = BUILTIN_LOCATIONS
            .iter()
            .map(|(name, pos)| (name.to_string(), pos.map(Coordinates::from)))
            .collect();
        Self { entries }
    }

    /// Adds or replaces a location with known coordinates.
    pub fn with_coordinates(mut self, name: impl Into<String>, pos: Coordinates) -> Self {
        self.entries.insert(name.into(), Some(pos));
        self
    }

    /// Adds or replaces a location that must never be geocoded.
    pub fn with_no_coordinates(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), None);
        self
    }

    pub fn lookup(&self, name: &str) -> Lookup {
        match self.entries.get(name) {
            Some(Some(pos)) => Lookup::Found(*pos),
            Some(None) => Lookup::FoundNoCoordinates,
            None => Lookup::NotFound,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
