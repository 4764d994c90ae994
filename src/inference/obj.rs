use indexmap::IndexMap;
use tracing::trace;

use super::{Inference, scalar_kind};
use crate::ir::{Field, FieldSchema, ScalarKind};
use crate::value::Value;

impl Inference {
    pub(super) fn observe_object(&mut self, object: &IndexMap<String, Value>) -> Vec<Field> {
        object
            .iter()
            .map(|(key, value)| Field {
                key: key.clone(),
                schema: self.observe_field(key, value),
            })
            .collect()
    }

    fn observe_field(&mut self, key: &str, value: &Value) -> FieldSchema {
        match value {
            Value::Object(nested) => FieldSchema::ObjectRef(self.object_ref(key, nested)),
            Value::Array(xs) => FieldSchema::Array(self.observe_array(key, xs)),
            // null has no kind of its own
            other => FieldSchema::Scalar(scalar_kind(other).unwrap_or(ScalarKind::String)),
        }
    }

    /// Name for the object under `key`, walking it unless a finished type
    /// already holds that name.
    pub(super) fn object_ref(&mut self, key: &str, nested: &IndexMap<String, Value>) -> String {
        let name = self.nested_name(key);
        if self.is_registered(&name) {
            trace!(%name, key, "reusing registered type");
        } else {
            trace!(%name, key, "registering type");
            self.register(&name, nested);
        }
        name
    }
}
