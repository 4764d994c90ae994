use super::{Inference, scalar_kind};
use crate::ir::{ElementSchema, ScalarKind};
use crate::value::Value;

impl Inference {
    /// Element type of the array under `key`, decided by its first element.
    ///
    /// Empty arrays, leading nulls and nested arrays have no usable element
    /// type and fall back to `String`. Object elements take the array key's
    /// derived name.
    pub(super) fn observe_array(&mut self, key: &str, xs: &[Value]) -> ElementSchema {
        match xs.first() {
            Some(Value::Object(first)) => ElementSchema::ObjectRef(self.object_ref(key, first)),
            Some(first) => ElementSchema::Scalar(scalar_kind(first).unwrap_or(ScalarKind::String)),
            None => ElementSchema::Scalar(ScalarKind::String),
        }
    }
}
