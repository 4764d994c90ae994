use serde::de::DeserializeOwned;
use thiserror::Error;

/// A deserialization failure annotated with the JSON path it happened at.
#[derive(Debug, Error)]
#[error("at JSON path {path} → {source}")]
pub struct PathDeError {
    pub path: String,
    #[source]
    pub source: serde_json::Error,
}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, PathDeError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| PathDeError {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}
