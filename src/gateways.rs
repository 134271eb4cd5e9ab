use anyhow::Result;
use talkmap_core::gateways::geocode::GeoCodingGateway;
use talkmap_gateways::{no_geocoding::NoGeoCoding, nominatim::Nominatim, opencage::OpenCage};

use crate::config::GeocodingGateway;

pub type GeoCodingGw = Box<dyn GeoCodingGateway>;

pub fn geocoding_gateway(cfg: Option<GeocodingGateway>) -> Result<GeoCodingGw> {
    let gw: GeoCodingGw = match cfg {
        Some(GeocodingGateway::Nominatim {
            user_agent,
            api_url,
        }) => {
            log::debug!("Use Nominatim geocoding gateway");
            Box::new(Nominatim::try_new(&user_agent, api_url)?)
        }
        Some(GeocodingGateway::OpenCage { api_key, api_url }) => {
            log::debug!("Use OpenCage geocoding gateway");
            Box::new(OpenCage::try_new(api_key, api_url)?)
        }
        None => {
            log::warn!(
                "No geocoding gateway was configured: only known locations can be resolved"
            );
            Box::new(NoGeoCoding)
        }
    };
    Ok(gw)
}
