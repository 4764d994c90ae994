//! `<Name>Request`: encodable input body. Types come from the request
//! namespace, whose names already carry the `Request` suffix.
use super::swift::SwiftWriter;
use super::{Emit, members};
use crate::ir::NamedType;

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestEmitter;

impl Emit for RequestEmitter {
    fn artifact_name(&self, named: &NamedType) -> String {
        named.name.clone()
    }

    fn emit(&self, named: &NamedType) -> String {
        let members = members(named);

        let mut w = SwiftWriter::new();
        w.imports(&["Foundation"]);
        w.open(format!("struct {}: Encodable", self.artifact_name(named)));
        w.properties(&members, "");
        w.coding_keys(&members);
        w.close();
        w.into_string()
    }
}
