//! Single-sample structural inference.
//!
//! Walks one JSON object and produces a [`Schema`]: the root type plus one
//! [`NamedType`] per nested object, keyed by derived name. The walk is a
//! single pass with no joins; the first sample of a shape is the shape.
//!
//! Policy:
//! - Scalars map to their kind; `null` falls back to `String`.
//! - Arrays are typed by their first element (`arr`).
//! - Nested objects are named from their key and deduplicated by that name
//!   within one namespace, never by structure (`obj`). The first object to
//!   finish walking under a name owns it; a descendant reusing an ancestor's
//!   key therefore wins over the ancestor, and no type contains itself.
//! - The root name is reserved for the root object. A nested object whose
//!   derived name equals it is renamed `<Name>2`.
pub mod arr;
pub mod obj;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::ir::{NamedType, ScalarKind, Schema};
use crate::naming;
use crate::value::Value;

// ------------------------------ Namespace --------------------------------- //

/// Dedup scope and naming strategy for one inference pass.
///
/// Response wire types and domain models share `Response`; request bodies
/// get their own scope so a `user` in the request never aliases a `user` in
/// the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Response,
    Request,
}

impl Namespace {
    /// Registry name for an object found under `key`.
    pub fn type_name(self, key: &str) -> String {
        self.qualify(&naming::derive_type_name(key))
    }

    /// Registry name for the root object. The caller's name is kept verbatim.
    pub fn root_name(self, root: &str) -> String {
        self.qualify(root)
    }

    fn qualify(self, base: &str) -> String {
        match self {
            Namespace::Response => base.to_string(),
            Namespace::Request => format!("{base}Request"),
        }
    }
}

// ------------------------------ State ------------------------------------- //

/// Dedup state for one pass. Lives only as long as one [`infer`] call.
///
/// A slot is `None` while its first object is still being walked.
struct Inference {
    namespace: Namespace,
    root: String,
    slots: IndexMap<String, Option<NamedType>>,
}

impl Inference {
    fn new(namespace: Namespace, root: String) -> Self {
        Self { namespace, root, slots: IndexMap::new() }
    }

    /// Only finished types are dedup hits; a pending slot is not.
    fn is_registered(&self, name: &str) -> bool {
        matches!(self.slots.get(name), Some(Some(_)))
    }

    /// Registry name for a nested object under `key`, steering clear of the
    /// root's name.
    fn nested_name(&self, key: &str) -> String {
        let name = self.namespace.type_name(key);
        if name != self.root {
            return name;
        }
        let derived = naming::derive_type_name(key);
        let renamed = (2..)
            .map(|n| self.namespace.qualify(&format!("{derived}{n}")))
            .find(|candidate| *candidate != self.root)
            .unwrap_or_else(|| name.clone());
        trace!(%name, %renamed, key, "nested type shares the root name");
        renamed
    }

    /// Infer the fields of `object` and store them under `name`, unless an
    /// object below it finished under the same name first. The slot is
    /// reserved up front so registry order stays parents-before-children.
    fn register(&mut self, name: &str, object: &IndexMap<String, Value>) {
        self.slots.entry(name.to_string()).or_insert(None);
        let fields = self.observe_object(object);
        match self.slots.get_mut(name) {
            Some(slot) if slot.is_none() => {
                *slot = Some(NamedType { name: name.to_string(), fields });
            }
            _ => trace!(%name, "kept the shape that finished first"),
        }
    }

    fn into_schema(self) -> Schema {
        let types = self
            .slots
            .into_iter()
            .filter_map(|(name, slot)| slot.map(|named| (name, named)))
            .collect();
        Schema { root: self.root, types }
    }
}

fn scalar_kind(v: &Value) -> Option<ScalarKind> {
    match v {
        Value::Bool(_) => Some(ScalarKind::Bool),
        Value::Integer(_) => Some(ScalarKind::Int),
        Value::Float(_) => Some(ScalarKind::Float),
        Value::String(_) => Some(ScalarKind::String),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// ------------------------------- Front API -------------------------------- //

/// Infer the schema of `root` under `root_name` in `namespace`.
pub fn infer(root: &IndexMap<String, Value>, root_name: &str, namespace: Namespace) -> Schema {
    let root_name = namespace.root_name(root_name);
    let mut inf = Inference::new(namespace, root_name.clone());
    inf.register(&root_name, root);
    debug!(?namespace, root = %root_name, types = inf.slots.len(), "inferred schema");
    inf.into_schema()
}

// ------------------------------- Tests ------------------------------------ //
