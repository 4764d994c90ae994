//! Indented Swift text builder and type spelling.
use std::fmt::Write as _;

use super::Member;
use crate::ir::{ElementSchema, FieldSchema, ScalarKind};

const TAB: &str = "    ";

#[derive(Debug, Default)]
pub struct SwiftWriter {
    out: String,
    depth: usize,
}

impl SwiftWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(TAB);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// `header {` and indent.
    pub fn open(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Dedent and `}`.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub fn imports(&mut self, modules: &[&str]) {
        for module in modules {
            self.line(format!("import {module}"));
        }
        self.blank();
    }

    /// One `var` per member.
    pub fn properties(&mut self, members: &[Member<'_>], suffix: &str) {
        for m in members {
            self.line(format!("var {}: {}", m.ident, type_name(m.schema, suffix)));
        }
    }

    /// `CodingKeys` mapping each property to its verbatim JSON key. Swift
    /// rejects a raw-valued enum with no cases, so nothing is written for an
    /// empty type.
    pub fn coding_keys(&mut self, members: &[Member<'_>]) {
        if members.is_empty() {
            return;
        }
        self.blank();
        self.open("enum CodingKeys: String, CodingKey");
        for m in members {
            self.line(format!("case {} = {}", m.ident, string_literal(m.key)));
        }
        self.close();
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

fn scalar_name(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Int => "Int",
        ScalarKind::Float => "Double",
        ScalarKind::String => "String",
        ScalarKind::Bool => "Bool",
    }
}

/// Swift spelling of `schema`; object references get `suffix` appended.
pub fn type_name(schema: &FieldSchema, suffix: &str) -> String {
    match schema {
        FieldSchema::Scalar(kind) => scalar_name(*kind).to_string(),
        FieldSchema::ObjectRef(name) => format!("{name}{suffix}"),
        FieldSchema::Array(ElementSchema::Scalar(kind)) => format!("[{}]", scalar_name(*kind)),
        FieldSchema::Array(ElementSchema::ObjectRef(name)) => format!("[{name}{suffix}]"),
    }
}

/// Quoted Swift string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_indents_blocks() {
        let mut w = SwiftWriter::new();
        w.open("struct A");
        w.line("var x: Int");
        w.blank();
        w.open("init()");
        w.close();
        w.close();
        assert_eq!(w.into_string(), "struct A {\n    var x: Int\n\n    init() {\n    }\n}\n");
    }

    #[test]
    fn type_names_take_suffix_only_on_refs() {
        assert_eq!(type_name(&FieldSchema::Scalar(ScalarKind::Float), "Response"), "Double");
        assert_eq!(type_name(&FieldSchema::ObjectRef("User".into()), "Model"), "UserModel");
        assert_eq!(
            type_name(&FieldSchema::Array(ElementSchema::ObjectRef("Item".into())), "Response"),
            "[ItemResponse]"
        );
        assert_eq!(type_name(&FieldSchema::Array(ElementSchema::Scalar(ScalarKind::Bool)), "Model"), "[Bool]");
    }

    #[test]
    fn string_literals_escape() {
        assert_eq!(string_literal("id"), "\"id\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(string_literal("x\u{1}"), "\"x\\u{1}\"");
    }
}
