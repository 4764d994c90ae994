//! `<Name>Model`: plain value type with a positional initializer.
use super::swift::{SwiftWriter, type_name};
use super::{Emit, members};
use crate::ir::NamedType;

pub const SUFFIX: &str = "Model";

#[derive(Debug, Clone, Copy, Default)]
pub struct ModelEmitter;

impl Emit for ModelEmitter {
    fn artifact_name(&self, named: &NamedType) -> String {
        format!("{}{SUFFIX}", named.name)
    }

    fn emit(&self, named: &NamedType) -> String {
        let members = members(named);
        let params = members
            .iter()
            .map(|m| format!("{}: {}", m.ident, type_name(m.schema, SUFFIX)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut w = SwiftWriter::new();
        w.open(format!("struct {}", self.artifact_name(named)));
        w.properties(&members, SUFFIX);
        w.blank();
        w.open(format!("init({params})"));
        for m in &members {
            w.line(format!("self.{0} = {0}", m.ident));
        }
        w.close();
        w.close();
        w.into_string()
    }
}
