//! Request definitions stored on disk as YAML or JSON, tagged by `kind`.
//!
//! ```yaml
//! kind: directions
//! destination:
//!   query: Golden Gate Bridge
//! travel_mode: walking
//! ```
//!
//! Map layers are listed by name:
//!
//! ```yaml
//! kind: map
//! query_string: Pizza
//! view_options: [satellite, traffic]
//! ```

use std::path::Path;

use gmlink_core::{DirectionsRequest, MapRequest, StreetViewRequest};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestFile {
    Map(MapRequest),
    StreetView(StreetViewRequest),
    Directions(DirectionsRequest),
}

#[derive(Debug, Error)]
pub enum RequestFileError {
    #[error("failed to read request file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML request: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported request file extension for {path}; expected .yaml, .yml or .json")]
    UnsupportedExtension { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Yaml,
    Json,
}

impl RequestFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(RequestFormat::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(RequestFormat::Json)
        } else {
            None
        }
    }
}

/// Load a request definition, picking the format from the file extension.
///
/// # Errors
///
/// Returns `RequestFileError` if the extension is unknown, the file cannot be
/// read, or its content does not describe a request.
pub fn load_request_file(path: &Path) -> Result<RequestFile, RequestFileError> {
    let format =
        RequestFormat::from_path(path).ok_or_else(|| RequestFileError::UnsupportedExtension {
            path: path.display().to_string(),
        })?;

    let content = std::fs::read_to_string(path).map_err(|e| RequestFileError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_request(&content, format)
}

/// # Errors
///
/// Returns `RequestFileError::Yaml` or `RequestFileError::Json` when the
/// content does not describe a request.
pub fn parse_request(
    content: &str,
    format: RequestFormat,
) -> Result<RequestFile, RequestFileError> {
    match format {
        RequestFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        RequestFormat::Json => Ok(serde_json::from_str(content)?),
    }
}
