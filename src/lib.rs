//! Sample-driven Swift code generation.
//!
//! One JSON response sample goes in; `<Name>Response` wire types,
//! `<Name>Model` domain models, `<Name>Request` bodies and a route stub come
//! out. See [`generate::generate`].
pub mod cli;
pub mod codegen;
pub mod config;
pub mod generate;
pub mod http;
pub mod inference;
pub mod ir;
pub mod jq_exec;
pub mod naming;
pub mod path_de;
pub mod value;

pub use codegen::Artifact;
pub use generate::{
    GenerateOptions, GenerationError, GenerationRequest, GenerationResult, InvalidInput, generate,
};
pub use http::HttpMethod;
