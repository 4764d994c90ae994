use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method `{0}` (expected one of GET, POST, PATCH, PUT, DELETE)")]
pub struct MethodParseError(pub String);

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Patch,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| MethodParseError(s.to_string()))
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = MethodParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("GET".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("patch".parse::<HttpMethod>(), Ok(HttpMethod::Patch));
        assert_eq!(" Delete ".parse::<HttpMethod>(), Ok(HttpMethod::Delete));
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = "HEAD".parse::<HttpMethod>().unwrap_err();
        assert!(err.to_string().contains("HEAD"));
    }

    #[test]
    fn serde_uses_upper_case_tokens() {
        assert_eq!(serde_json::to_string(&HttpMethod::Put).unwrap(), "\"PUT\"");
        let m: HttpMethod = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(m, HttpMethod::Post);
    }

    #[test]
    fn serde_accepts_the_same_tokens_as_from_str() {
        let m: HttpMethod = serde_json::from_str("\"put\"").unwrap();
        assert_eq!(m, HttpMethod::Put);
        let m: HttpMethod = serde_json::from_str("\" Delete \"").unwrap();
        assert_eq!(m, HttpMethod::Delete);
        let err = serde_json::from_str::<HttpMethod>("\"HEAD\"").unwrap_err();
        assert!(err.to_string().contains("HEAD"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for m in HttpMethod::ALL {
            assert_eq!(m.to_string().parse::<HttpMethod>(), Ok(m));
        }
    }
}
