// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::errors::Result;

/// Load a description file and return the raw, unvalidated `RawGraphFile`.
///
/// Use [`load_and_validate`] to also check edge targets and acyclicity.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraphFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let raw: RawGraphFile = toml::from_str(&contents)?;
    Ok(raw)
}

/// Load a description file and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<GraphFile> {
    let raw = load_from_path(&path)?;
    let file = GraphFile::try_from(raw)?;
    Ok(file)
}
