//! Generation requests stored as JSON files.
//!
//! Every field is optional; missing ones take the [`GenerationRequest`]
//! defaults (root `Api`, path `/`, `GET`, response + model, built-in sample).
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::generate::GenerationRequest;
use crate::path_de::{PathDeError, from_str_with_path};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read request file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid request file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PathDeError,
    },
}

pub fn load_request(path: &Path) -> Result<GenerationRequest, ConfigError> {
    let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let request = parse_request(&src).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), root = %request.root_type_name, "loaded request file");
    Ok(request)
}

pub fn parse_request(src: &str) -> Result<GenerationRequest, PathDeError> {
    from_str_with_path(src)
}
