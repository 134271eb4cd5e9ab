use std::{io, path::PathBuf};
use thiserror::Error;

use crate::gateways::geocode::GeocodingError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to list record directory '{}'", dir.display())]
    ScanDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to read record file '{}'", path.display())]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to geocode '{location}'")]
    Geocoding {
        location: String,
        #[source]
        source: GeocodingError,
    },
    #[error("Unable to write output file '{}'", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
