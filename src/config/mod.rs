use anyhow::{anyhow, Context as _, Result};
use std::{env, fs, io::ErrorKind, path::Path};
use talkmap_core::{
    entities::Coordinates,
    static_table::StaticCoordinateTable,
    usecases::{RetryPolicy, TalkmapSettings},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "talkmap.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub talkmap: TalkmapSettings,
    pub geocoding: Geocoding,
    pub static_table: StaticCoordinateTable,
}

impl Config {
    /// Loads the given file, or `talkmap.toml` if it exists.
    ///
    /// An explicitly given file must exist.
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let explicit = file_path.is_some();
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
                log::debug!("{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration.");
                raw::Config::default()
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Unable to read configuration file {}", file_path.display())
                });
            }
        };
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            let gateway = raw_config.gateway.get_or_insert_with(Default::default);
            let opencage = gateway.opencage.get_or_insert_with(|| raw::OpenCage {
                api_key: None,
                api_url: None,
            });
            opencage.api_key = Some(api_key);
        }
        Self::try_from(raw_config)
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Nominatim {
        user_agent: String,
        api_url: Option<String>,
    },
    OpenCage {
        api_key: String,
        api_url: Option<String>,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            talks,
            output,
            geocoding,
            gateway,
            static_coordinates,
        } = from;

        let defaults = TalkmapSettings::default();

        let raw::Talks {
            dir,
            extension,
            excluded_locations,
        } = talks.unwrap_or_default();

        let raw::Output { file, variable } = output.unwrap_or_default();

        let talkmap = TalkmapSettings {
            records_dir: dir.unwrap_or(defaults.records_dir),
            record_extension: extension.unwrap_or(defaults.record_extension),
            excluded_locations: excluded_locations
                .map(|names| names.into_iter().collect())
                .unwrap_or(defaults.excluded_locations),
            output_file: file.unwrap_or(defaults.output_file),
            variable_name: variable.unwrap_or(defaults.variable_name),
        };
        if talkmap.variable_name.is_empty() {
            return Err(anyhow!("Missing output variable name"));
        }

        let raw::Geocoding {
            gateway: gw_name,
            max_attempts,
            timeout,
            pacing_delay,
            retry_delay,
        } = geocoding.unwrap_or_default();

        let retry = RetryPolicy {
            max_attempts: max_attempts.unwrap_or(RetryPolicy::DEFAULT_MAX_ATTEMPTS),
            timeout: timeout.unwrap_or(RetryPolicy::DEFAULT_TIMEOUT),
            pacing_delay: pacing_delay.unwrap_or(RetryPolicy::DEFAULT_PACING_DELAY),
            retry_delay: retry_delay.unwrap_or(RetryPolicy::DEFAULT_RETRY_DELAY),
        };
        if retry.max_attempts == 0 {
            return Err(anyhow!("At least one geocoding attempt is required"));
        }

        let geo_gateway = match gw_name {
            Some(gw_name) => {
                let toml_name = toml::Value::try_from(gw_name)?;
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Nominatim => {
                        let raw::Nominatim {
                            user_agent,
                            api_url,
                        } = gateway.nominatim.ok_or_else(|| {
                            anyhow!("Missing {toml_name} gateway configuration")
                        })?;
                        if user_agent.trim().is_empty() {
                            return Err(anyhow!("Nominatim requires a user agent"));
                        }
                        GeocodingGateway::Nominatim {
                            user_agent,
                            api_url,
                        }
                    }
                    raw::GeocodingGateway::Opencage => {
                        let raw::OpenCage { api_key, api_url } =
                            gateway.opencage.ok_or_else(|| {
                                anyhow!("Missing {toml_name} gateway configuration")
                            })?;
                        let api_key = api_key
                            .filter(|key| !key.is_empty())
                            .ok_or_else(|| anyhow!("Missing OpenCage API key"))?;
                        GeocodingGateway::OpenCage { api_key, api_url }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
            retry,
        };

        let raw::StaticCoordinates {
            no_coordinates,
            location,
        } = static_coordinates.unwrap_or_default();
        let mut static_table = StaticCoordinateTable::builtin();
        for raw::Location { name, lat, lng } in location {
            let pos = Coordinates::try_new(lat, lng)
                .with_context(|| format!("Invalid static coordinates of '{name}'"))?;
            static_table = static_table.with_coordinates(name, pos);
        }
        for name in no_coordinates {
            static_table = static_table.with_no_coordinates(name);
        }

        Ok(Self {
            talkmap,
            geocoding,
            static_table,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{path::PathBuf, time::Duration};
    use talkmap_core::static_table::Lookup;
    use tempfile::TempDir;

    fn parse(cfg: &str) -> Result<Config> {
        Config::try_from(toml::from_str::<raw::Config>(cfg).unwrap())
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.talkmap.records_dir, PathBuf::from("_talks"));
        assert_eq!(cfg.talkmap.record_extension, "md");
        assert_eq!(
            cfg.talkmap.output_file,
            PathBuf::from("talkmap/org-locations.js")
        );
        assert_eq!(cfg.talkmap.variable_name, "addressPoints");
        assert!(cfg.talkmap.excluded_locations.contains("Virtual"));
        assert!(cfg.talkmap.excluded_locations.contains("Location TBD"));
        assert_eq!(cfg.geocoding.retry, RetryPolicy::default());
        assert_eq!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::Nominatim {
                user_agent: "academic_website_talkmap".into(),
                api_url: None,
            })
        );
    }

    #[test]
    fn fail_on_missing_explicit_config_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::try_load_from_file_or_default(Some(&missing)).is_err());
    }

    #[test]
    fn load_config_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("talkmap.toml");
        fs::write(
            &file,
            r#"
            [talks]
            dir = "content/talks"

            [geocoding]
            max-attempts = 1
            "#,
        )
        .unwrap();
        let cfg = Config::try_load_from_file_or_default(Some(&file)).unwrap();
        assert_eq!(cfg.talkmap.records_dir, PathBuf::from("content/talks"));
        assert_eq!(cfg.talkmap.record_extension, "md");
        assert_eq!(cfg.geocoding.retry.max_attempts, 1);
        assert_eq!(cfg.geocoding.retry.timeout, Duration::from_secs(10));
        assert!(cfg.geocoding.gateway.is_none());
    }

    #[test]
    fn use_default_gateway_section() {
        let cfg = parse(
            r#"
            [geocoding]
            gateway = "nominatim"
            "#,
        )
        .unwrap();
        assert!(matches!(
            cfg.geocoding.gateway,
            Some(GeocodingGateway::Nominatim { .. })
        ));
    }

    #[test]
    fn require_opencage_api_key() {
        let cfg = r#"
            [geocoding]
            gateway = "opencage"

            [gateway.opencage]
            "#;
        assert!(parse(cfg).is_err());

        let cfg = r#"
            [geocoding]
            gateway = "opencage"

            [gateway.opencage]
            api-key = "secret"
            "#;
        assert_eq!(
            parse(cfg).unwrap().geocoding.gateway,
            Some(GeocodingGateway::OpenCage {
                api_key: "secret".into(),
                api_url: None,
            })
        );
    }

    #[test]
    fn reject_zero_attempts() {
        let cfg = r#"
            [geocoding]
            max-attempts = 0
            "#;
        assert!(parse(cfg).is_err());
    }

    #[test]
    fn extend_static_table() {
        let cfg = parse(
            r#"
            [static-coordinates]
            no-coordinates = ["Online"]

            [[static-coordinates.location]]
            name = "Paris, France"
            lat = 48.8566
            lng = 2.3522
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.static_table.lookup("Paris, France"),
            Lookup::Found(Coordinates::new_unchecked(48.8566, 2.3522))
        );
        assert_eq!(cfg.static_table.lookup("Online"), Lookup::FoundNoCoordinates);
        assert_eq!(
            cfg.static_table.lookup("Singapore"),
            Lookup::Found(Coordinates::new_unchecked(1.3521, 103.8198))
        );
    }

    #[test]
    fn reject_invalid_static_coordinates() {
        let cfg = r#"
            [[static-coordinates.location]]
            name = "Nowhere"
            lat = 123.0
            lng = 0.0
            "#;
        assert!(parse(cfg).is_err());
    }
}
