use super::{
    aggregate_locations, default_excluded_locations, prelude::*, render_address_points,
    scan_records, LocationResolver, DEFAULT_RECORD_EXTENSION, DEFAULT_VARIABLE_NAME,
};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_RECORDS_DIR: &str = "_talks";
pub const DEFAULT_OUTPUT_FILE: &str = "talkmap/org-locations.js";

#[derive(Debug, Clone)]
pub struct TalkmapSettings {
    pub records_dir: PathBuf,
    pub record_extension: String,
    pub excluded_locations: HashSet<String>,
    pub output_file: PathBuf,
    pub variable_name: String,
}

impl Default for TalkmapSettings {
    fn default() -> Self {
        Self {
            records_dir: DEFAULT_RECORDS_DIR.into(),
            record_extension: DEFAULT_RECORD_EXTENSION.into(),
            excluded_locations: default_excluded_locations(),
            output_file: DEFAULT_OUTPUT_FILE.into(),
            variable_name: DEFAULT_VARIABLE_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub record_files: usize,
    pub unique_locations: usize,
    pub output_file: PathBuf,
}

/// Scans all talk records and writes the map data file.
///
/// Returns `None` if there are no records at all;
/// nothing is written in this case.
pub fn generate_talkmap<G, P>(
    settings: &TalkmapSettings,
    resolver: &LocationResolver<G, P>,
) -> Result<Option<Summary>>
where
    G: GeoCodingGateway,
    P: Pause,
{
    let TalkmapSettings {
        records_dir,
        record_extension,
        excluded_locations,
        output_file,
        variable_name,
    } = settings;

    let records = scan_records(records_dir, record_extension)?;
    if records.is_empty() {
        log::info!("No record files found in {}", records_dir.display());
        return Ok(None);
    }
    log::info!("Found {} talk files", records.len());

    let locations = aggregate_locations(&records, excluded_locations, resolver)?;
    let js = render_address_points(variable_name, &locations);
    write_output(output_file, &js)?;

    Ok(Some(Summary {
        record_files: records.len(),
        unique_locations: locations.len(),
        output_file: output_file.clone(),
    }))
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}
