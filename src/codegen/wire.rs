//! `<Name>Response`: the decodable wire type and its conversion to the
//! domain model.
//!
//! Conversion is all-or-nothing over single nested objects: each one is
//! converted first, and if any yields `nil` the whole conversion does.
//! Arrays of nested objects are not guarded; failed elements are dropped by
//! `compactMap` and the conversion carries on.
use super::swift::SwiftWriter;
use super::{Emit, Member, members};
use crate::ir::{ElementSchema, FieldSchema, NamedType};

pub const SUFFIX: &str = "Response";

#[derive(Debug, Clone, Copy, Default)]
pub struct WireEmitter;

impl Emit for WireEmitter {
    fn artifact_name(&self, named: &NamedType) -> String {
        format!("{}{SUFFIX}", named.name)
    }

    fn emit(&self, named: &NamedType) -> String {
        let members = members(named);
        let model = format!("{}{}", named.name, super::model::SUFFIX);

        let mut w = SwiftWriter::new();
        w.imports(&["Foundation", "RemoteRequest"]);
        w.open(format!("class {}: ObjectMappable", self.artifact_name(named)));
        w.blank();
        w.line(format!("typealias MappableOutput = {model}"));
        w.blank();
        w.properties(&members, SUFFIX);
        w.coding_keys(&members);
        w.blank();
        conversion(&mut w, &members, &model);
        w.close();
        w.into_string()
    }
}

fn conversion(w: &mut SwiftWriter, members: &[Member<'_>], model: &str) {
    w.open(format!("func toDomainModel() -> {model}?"));
    for m in members {
        if m.schema.object_ref().is_some() {
            w.open(format!("guard let {0} = {0}.toDomainModel() else", m.ident));
            w.line("return nil");
            w.close();
        }
    }
    if members.is_empty() {
        w.line(format!("return {model}()"));
    } else {
        w.line(format!("return {model}("));
        w.indent();
        let last = members.len() - 1;
        for (i, m) in members.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            w.line(format!("{}: {}{sep}", m.ident, argument(m)));
        }
        w.dedent();
        w.line(")");
    }
    w.close();
}

/// Expression passed for `m` when building the model. Guarded objects are
/// already shadowed by their converted value.
fn argument(m: &Member<'_>) -> String {
    match m.schema {
        FieldSchema::Array(ElementSchema::ObjectRef(_)) => {
            format!("{}.compactMap {{ $0.toDomainModel() }}", m.ident)
        }
        FieldSchema::Scalar(_) | FieldSchema::ObjectRef(_) | FieldSchema::Array(ElementSchema::Scalar(_)) => {
            m.ident.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{Namespace, infer};
    use crate::value::Value;
    use serde_json::json;

    fn emit_root(sample: serde_json::Value) -> String {
        let v = Value::from(sample);
        let schema = infer(v.as_object().unwrap(), "Api", Namespace::Response);
        WireEmitter.emit(schema.root_type().unwrap())
    }

    #[test]
    fn renders_the_full_class() {
        let src = emit_root(json!({"id": 123, "user": {"id": 1}}));
        let expected = "\
import Foundation
import RemoteRequest

class ApiResponse: ObjectMappable {

    typealias MappableOutput = ApiModel

    var id: Int
    var user: UserResponse

    enum CodingKeys: String, CodingKey {
        case id = \"id\"
        case user = \"user\"
    }

    func toDomainModel() -> ApiModel? {
        guard let user = user.toDomainModel() else {
            return nil
        }
        return ApiModel(
            id: id,
            user: user
        )
    }
}
";
        assert_eq!(src, expected);
    }

    #[test]
    fn only_single_objects_are_guarded() {
        let src = emit_root(json!({"items": [{"n": 1}], "meta": {"page": 1}, "tags": ["a"]}));
        assert!(src.contains("guard let meta = meta.toDomainModel() else {"));
        assert!(!src.contains("guard let items"));
        assert!(src.contains("items: items.compactMap { $0.toDomainModel() },"));
        assert!(src.contains("tags: tags\n"));
        assert!(src.contains("var items: [ItemsResponse]"));
    }

    #[test]
    fn scalar_only_type_has_no_guard() {
        let src = emit_root(json!({"ok": true, "ratio": 0.5}));
        assert!(!src.contains("guard"));
        assert!(src.contains("var ratio: Double"));
    }

    #[test]
    fn renamed_properties_keep_the_json_key() {
        let src = emit_root(json!({"first-name": "a", "default": 1}));
        assert!(src.contains("var firstName: String"));
        assert!(src.contains("case firstName = \"first-name\""));
        assert!(src.contains("case `default` = \"default\""));
    }

    #[test]
    fn empty_object_converts_without_arguments() {
        let src = emit_root(json!({}));
        assert!(!src.contains("CodingKeys"));
        assert!(src.contains("return ApiModel()"));
    }
}
