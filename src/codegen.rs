//! Swift source emission.
//!
//! Each emitter renders one [`NamedType`] into one file-sized [`Artifact`]:
//! - `wire`: `<Name>Response`, decodable, with a fallible `toDomainModel()`
//! - `model`: `<Name>Model`, a plain value type
//! - `request`: `<Name>Request`, an encodable input body
//! - `route`: one endpoint stub for the whole request
pub mod model;
pub mod request;
pub mod route;
pub mod swift;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::ir::{FieldSchema, NamedType, Schema};
use crate::naming;

pub use model::ModelEmitter;
pub use request::RequestEmitter;
pub use wire::WireEmitter;

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub source_text: String,
}

/// Renders a single named type.
pub trait Emit {
    /// Name of the Swift type (and artifact) produced for `named`.
    fn artifact_name(&self, named: &NamedType) -> String;
    fn emit(&self, named: &NamedType) -> String;
}

/// Run `emitter` over every type of `schema`, in registry order.
pub fn emit_all<E: Emit>(emitter: &E, schema: &Schema) -> Vec<Artifact> {
    schema
        .iter()
        .map(|named| Artifact {
            name: emitter.artifact_name(named),
            source_text: emitter.emit(named),
        })
        .collect()
}

// ------------------------------- Members ---------------------------------- //

/// A field paired with its Swift property identifier.
pub struct Member<'a> {
    pub ident: String,
    pub key: &'a str,
    pub schema: &'a FieldSchema,
}

pub fn members(named: &NamedType) -> Vec<Member<'_>> {
    let idents = naming::property_names(named.fields.iter().map(|f| f.key.as_str()));
    named
        .fields
        .iter()
        .zip(idents)
        .map(|(field, ident)| Member {
            ident,
            key: &field.key,
            schema: &field.schema,
        })
        .collect()
}
