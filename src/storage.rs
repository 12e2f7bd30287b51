use crate::error::{Error, Result};
use crate::models::ChartRequest;
use std::fs;
use std::path::Path;

/// Read and decode a chart request from a JSON file.
///
/// Either the whole document decodes or the call fails; nothing is filled in
/// beyond the empty defaults for absent fields.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ChartRequest> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_request(&bytes, path)
}

/// Decode a chart request from raw bytes; `path` is only used for error reporting.
pub fn parse_request(bytes: &[u8], path: &Path) -> Result<ChartRequest> {
    serde_json::from_slice(bytes).map_err(|source| Error::FileParse {
        path: path.to_path_buf(),
        source,
    })
}
