//! Generation front API: one request in, one complete result out.
//!
//! Pipeline:
//! 1. parse the sample into the value model (must be an object)
//! 2. infer the response namespace once, if wire types or models are wanted
//! 3. infer the request namespace separately, if request bodies are wanted
//! 4. run the selected emitters; the route needs no inference
//!
//! Nothing is retained between calls.
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::codegen::{self, Artifact, ModelEmitter, RequestEmitter, WireEmitter, route};
use crate::http::HttpMethod;
use crate::inference::{self, Namespace};
use crate::value::Value;

/// Sample offered when the caller has none of their own.
pub const SAMPLE_JSON: &str = r#"{
    "status": "success",
    "message": "Successfully message",
    "data": {
        "id": 123,
        "name": "John Doe",
        "email": "john.doe@example.com"
    },
    "user": {
        "id": 123
    }
}"#;

pub const DEFAULT_ROOT_TYPE: &str = "Api";

// ------------------------------- Types ------------------------------------ //

/// Which artifact categories to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub emit_wire_type: bool,
    pub emit_domain_model: bool,
    pub emit_request_body: bool,
    pub emit_route: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            emit_wire_type: true,
            emit_domain_model: true,
            emit_request_body: false,
            emit_route: false,
        }
    }
}

impl GenerateOptions {
    pub fn all() -> Self {
        Self {
            emit_wire_type: true,
            emit_domain_model: true,
            emit_request_body: true,
            emit_route: true,
        }
    }

    pub fn none() -> Self {
        Self {
            emit_wire_type: false,
            emit_domain_model: false,
            emit_request_body: false,
            emit_route: false,
        }
    }

    /// At least one category is switched on.
    pub fn any_enabled(&self) -> bool {
        self.emit_wire_type || self.emit_domain_model || self.emit_request_body || self.emit_route
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub root_type_name: String,
    pub json_text: String,
    pub url: String,
    pub http_method: HttpMethod,
    pub options: GenerateOptions,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            root_type_name: DEFAULT_ROOT_TYPE.to_string(),
            json_text: SAMPLE_JSON.to_string(),
            url: route::DEFAULT_PATH.to_string(),
            http_method: HttpMethod::default(),
            options: GenerateOptions::default(),
        }
    }
}

impl GenerationRequest {
    pub fn new(root_type_name: impl Into<String>, json_text: impl Into<String>) -> Self {
        Self {
            root_type_name: root_type_name.into(),
            json_text: json_text.into(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_route(mut self, method: HttpMethod, url: impl Into<String>) -> Self {
        self.http_method = method;
        self.url = url.into();
        self
    }
}

/// Artifacts per category; a disabled category stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub wire_types: Vec<Artifact>,
    pub domain_models: Vec<Artifact>,
    pub request_bodies: Vec<Artifact>,
    pub route: Option<Artifact>,
}

impl GenerationResult {
    /// Every artifact, category by category.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.wire_types
            .iter()
            .chain(&self.domain_models)
            .chain(&self.request_bodies)
            .chain(&self.route)
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts().next().is_none()
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

#[derive(Debug, Error)]
pub enum InvalidInput {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected a JSON object at the root, found {found}")]
    NotAnObject { found: &'static str },
}

// ------------------------------- Front API -------------------------------- //

pub fn generate(request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
    let value = Value::parse(&request.json_text).map_err(InvalidInput::Malformed)?;
    let Value::Object(root) = &value else {
        return Err(InvalidInput::NotAnObject { found: value.kind_name() }.into());
    };

    let options = request.options;
    if !options.any_enabled() {
        warn!("no output category enabled; nothing to generate");
    }

    let mut result = GenerationResult::default();

    if options.emit_wire_type || options.emit_domain_model {
        let schema = inference::infer(root, &request.root_type_name, Namespace::Response);
        if options.emit_wire_type {
            result.wire_types = codegen::emit_all(&WireEmitter, &schema);
        }
        if options.emit_domain_model {
            result.domain_models = codegen::emit_all(&ModelEmitter, &schema);
        }
    }

    if options.emit_request_body {
        let schema = inference::infer(root, &request.root_type_name, Namespace::Request);
        result.request_bodies = codegen::emit_all(&RequestEmitter, &schema);
    }

    if options.emit_route {
        result.route = Some(route::emit(request.http_method, &request.url, &request.root_type_name));
    }

    debug!(
        root = %request.root_type_name,
        wire_types = result.wire_types.len(),
        domain_models = result.domain_models.len(),
        request_bodies = result.request_bodies.len(),
        route = result.route.is_some(),
        "generated artifacts"
    );
    Ok(result)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    fn names(artifacts: &[Artifact]) -> Vec<&str> {
        artifacts.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn end_to_end_all_categories() {
        let request = GenerationRequest::new("Api", r#"{"id": 123, "user": {"id": 1}}"#)
            .with_options(GenerateOptions::all());
        let result = generate(&request).unwrap();

        assert_eq!(names(&result.wire_types), ["ApiResponse", "UserResponse"]);
        assert_eq!(names(&result.domain_models), ["ApiModel", "UserModel"]);
        assert_eq!(names(&result.request_bodies), ["ApiRequest", "UserRequest"]);
        assert_eq!(result.route.as_ref().map(|r| r.name.as_str()), Some("ApiRoute"));

        let api = &result.wire_types[0].source_text;
        assert!(api.contains("guard let user = user.toDomainModel() else {\n            return nil\n        }"));
        assert!(api.contains("return ApiModel(\n            id: id,\n            user: user\n        )"));
    }

    #[test]
    fn default_options_mirror_the_original_toggles() {
        let result = generate(&GenerationRequest::default()).unwrap();
        assert_eq!(names(&result.wire_types), ["ApiResponse", "DataResponse", "UserResponse"]);
        assert_eq!(names(&result.domain_models), ["ApiModel", "DataModel", "UserModel"]);
        assert!(result.request_bodies.is_empty());
        assert!(result.route.is_none());
    }

    #[test]
    fn request_body_alone_touches_nothing_else() {
        let options = GenerateOptions { emit_request_body: true, ..GenerateOptions::none() };
        let request = GenerationRequest::new("Api", r#"{"user": {"id": 1}}"#).with_options(options);
        let result = generate(&request).unwrap();
        assert!(result.wire_types.is_empty());
        assert!(result.domain_models.is_empty());
        assert!(result.route.is_none());
        assert_eq!(names(&result.request_bodies), ["ApiRequest", "UserRequest"]);
    }

    #[test]
    fn wire_alone_has_no_request_bodies() {
        let options = GenerateOptions { emit_wire_type: true, ..GenerateOptions::none() };
        let request = GenerationRequest::new("Api", r#"{"user": {"id": 1}}"#).with_options(options);
        let result = generate(&request).unwrap();
        assert_eq!(names(&result.wire_types), ["ApiResponse", "UserResponse"]);
        assert!(result.domain_models.is_empty());
        assert!(result.request_bodies.is_empty());
    }

    #[test]
    fn nothing_enabled_is_an_empty_success() {
        let request = GenerationRequest::default().with_options(GenerateOptions::none());
        assert!(generate(&request).unwrap().is_empty());
    }

    #[test]
    fn non_object_roots_are_invalid_input() {
        for text in ["[1, 2]", "42", "\"s\"", "null", "true", "{\"a\":", ""] {
            let request = GenerationRequest::new("Api", text).with_options(GenerateOptions::all());
            let err = generate(&request).unwrap_err();
            assert!(matches!(err, GenerationError::InvalidInput(_)), "{text}: {err}");
        }
    }

    #[test]
    fn not_an_object_names_the_kind() {
        let err = generate(&GenerationRequest::new("Api", "[]")).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: expected a JSON object at the root, found array");
    }

    #[test]
    fn empty_array_is_a_string_array() {
        let request = GenerationRequest::new("Api", r#"{"tags": []}"#);
        let result = generate(&request).unwrap();
        assert!(result.wire_types[0].source_text.contains("var tags: [String]"));
        assert!(result.domain_models[0].source_text.contains("var tags: [String]"));
    }

    #[test]
    fn identical_shapes_under_different_keys_stay_distinct() {
        let request = GenerationRequest::new("Root", r#"{"a": {"x": 1}, "b": {"x": 1}}"#);
        let result = generate(&request).unwrap();
        assert_eq!(names(&result.wire_types), ["RootResponse", "AResponse", "BResponse"]);
    }

    #[test]
    fn repeated_keys_never_produce_a_self_containing_model() {
        let request = GenerationRequest::new("Root", r#"{"node": {"node": {"leaf": true}}}"#);
        let result = generate(&request).unwrap();
        assert_eq!(names(&result.domain_models), ["RootModel", "NodeModel"]);
        let node = &result.domain_models[1].source_text;
        assert!(node.contains("var leaf: Bool"));
        assert!(!node.contains("var node: NodeModel"));

        let request = GenerationRequest::new("Data", r#"{"data": {"id": 1}}"#);
        let result = generate(&request).unwrap();
        assert_eq!(names(&result.domain_models), ["DataModel", "Data2Model"]);
        assert!(result.domain_models[0].source_text.contains("var data: Data2Model"));
        assert!(result.domain_models[1].source_text.contains("var id: Int"));
    }

    #[test]
    fn route_defaults_path_and_names_root_types() {
        let options = GenerateOptions { emit_route: true, ..GenerateOptions::none() };
        let request = GenerationRequest::new("Api", "{}")
            .with_options(options)
            .with_route(HttpMethod::Get, "");
        let route = generate(&request).unwrap().route.unwrap();
        assert!(route.source_text.contains("\"/\""));
        for needle in ["ApiResponse", "ApiModel", "GET"] {
            assert!(route.source_text.contains(needle));
        }
    }

    #[test]
    fn request_round_trips_through_json_config() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"root_type_name": "Feed", "http_method": "POST", "options": {"emit_route": true}}"#,
        )
        .unwrap();
        assert_eq!(request.root_type_name, "Feed");
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.json_text, SAMPLE_JSON);
        assert!(request.options.emit_route && request.options.emit_wire_type);
    }
}
