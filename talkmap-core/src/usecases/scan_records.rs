use super::prelude::*;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

/// The field that holds the location of a talk, e.g. `location: "Singapore"`.
pub const LOCATION_FIELD_MARKER: &str = "location: \"";

const LOCATION_FIELD_DELIMITER: char = '"';

pub const DEFAULT_RECORD_EXTENSION: &str = "md";

/// Returns the quoted value that follows the location marker.
///
/// A missing marker or an unterminated value yields `None`.
pub fn extract_location(content: &str) -> Option<&str> {
    let start = content.find(LOCATION_FIELD_MARKER)? + LOCATION_FIELD_MARKER.len();
    let value = &content[start..];
    let end = value.find(LOCATION_FIELD_DELIMITER)?;
    Some(&value[..end])
}

/// Lists all record files of a directory in the order
/// the file system returns them. Hidden files are ignored.
pub fn list_record_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let scan_err = |source| Error::ScanDir {
        dir: dir.to_path_buf(),
        source,
    };
    let mut files = vec![];
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let path = entry.map_err(scan_err)?.path();
        let hidden = path
            .file_name()
            .is_some_and(|name| name.as_encoded_bytes().starts_with(b"."));
        if !hidden && path.is_file() && path.extension() == Some(OsStr::new(extension)) {
            files.push(path);
        }
    }
    Ok(files)
}

pub fn read_record(path: PathBuf) -> Result<Record> {
    let content = fs::read_to_string(&path).map_err(|source| Error::ReadRecord {
        path: path.clone(),
        source,
    })?;
    let location = extract_location(&content).map(ToString::to_string);
    if location.is_none() {
        log::debug!("No location found in {}", path.display());
    }
    Ok(Record { path, location })
}

pub fn scan_records(dir: &Path, extension: &str) -> Result<Vec<Record>> {
    list_record_files(dir, extension)?
        .into_iter()
        .map(read_record)
        .collect()
}
