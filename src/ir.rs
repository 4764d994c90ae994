// Strongly-typed schema IR for codegen. No `Value` here.
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int,
    Float,
    String,
    Bool,
}

/// Inferred type of one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSchema {
    Scalar(ScalarKind),
    /// Name of a type registered in the same namespace.
    ObjectRef(String),
    /// Homogeneous array, typed by its first element.
    Array(ElementSchema),
}

/// Element type of an array field. Nested arrays never get here; they
/// fall back to `Scalar(String)` during inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementSchema {
    Scalar(ScalarKind),
    ObjectRef(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// JSON key, verbatim.
    pub key: String,
    pub schema: FieldSchema,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub fields: Vec<Field>, // source order of the sample
}

impl FieldSchema {
    /// Name of the nested type this field points at, if it is a single object.
    pub fn object_ref(&self) -> Option<&str> {
        match self {
            FieldSchema::ObjectRef(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl NamedType {
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// Every named type inferred for one namespace, in discovery order
/// (root first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub root: String,
    pub types: IndexMap<String, NamedType>,
}

impl Schema {
    pub fn root_type(&self) -> Option<&NamedType> {
        self.types.get(&self.root)
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }
}
