use std::path::PathBuf;

/// A single talk record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub path: PathBuf,
    /// The raw value of the location field, if the file has one.
    pub location: Option<String>,
}
