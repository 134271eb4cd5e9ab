#[macro_use]
extern crate log;

mod http;

pub mod no_geocoding;
pub mod nominatim;
pub mod opencage;

#[cfg(test)]
mod test_server;
