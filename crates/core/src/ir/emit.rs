//! Go code emission via the Emit trait.
//!
//! Each IR node renders itself to source text; a whole file is the
//! concatenation of its parts in declaration order.

use std::fmt::Write;

use super::decl::{EnumKind, GoConst, GoDecl, GoEnum, GoField, GoFile, GoFunc, GoLiteral, GoStruct};
use super::docs::{section_heading, DocMode};
use super::naming::return_slot;
use super::runtime::{client_prelude, STD_IMPORTS, THIRD_PARTY_IMPORTS};

/// Trait for emitting Go code from IR nodes.
pub trait Emit {
    /// Convert the IR node to its Go source representation.
    fn emit(&self) -> String;
}

/// Quote a string as a Go interpreted string literal.
pub fn quote_go_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            c if c.is_control() && u32::from(c) < 0x80 => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c if c.is_control() && u32::from(c) <= 0xffff => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c if c.is_control() => {
                let _ = write!(out, "\\U{:08x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl Emit for GoLiteral {
    fn emit(&self) -> String {
        match self {
            GoLiteral::Int(n) => n.to_string(),
            GoLiteral::String(s) => quote_go_string(s),
        }
    }
}

impl Emit for GoField {
    fn emit(&self) -> String {
        let mut out = self.docs.leading("\t", DocMode::Adaptive);
        out.push_str(&format!("\t{} {}", self.name, self.ty));
        if let Some(tag) = self.tag() {
            out.push(' ');
            out.push_str(&tag);
        }
        out.push_str(&self.docs.trailing(DocMode::Adaptive));
        out.push('\n');
        out
    }
}

impl Emit for GoStruct {
    fn emit(&self) -> String {
        let mut out = self.docs.leading("", DocMode::Block);
        out.push_str(&format!("type {} struct {{\n", self.name));
        for field in &self.fields {
            out.push_str(&field.emit());
        }
        out.push_str("}\n\n");
        out
    }
}

impl GoConst {
    fn emit_in(&self, type_name: &str) -> String {
        let mut out = self.docs.leading("\t", DocMode::Adaptive);
        out.push_str(&format!(
            "\t{} {} = {}",
            self.name,
            type_name,
            self.value.emit()
        ));
        out.push_str(&self.docs.trailing(DocMode::Adaptive));
        out.push('\n');
        out
    }
}

impl Emit for GoEnum {
    fn emit(&self) -> String {
        let underlying = match self.kind {
            EnumKind::Int => "int",
            EnumKind::String => "string",
        };
        let mut out = self.docs.leading("", DocMode::Block);
        out.push_str(&format!("type {} {underlying}\n", self.name));
        if !self.values.is_empty() {
            out.push_str("\nconst (\n");
            for value in &self.values {
                out.push_str(&value.emit_in(&self.name));
            }
            out.push_str(")\n");
        }
        out.push('\n');
        out
    }
}

impl Emit for GoFunc {
    fn emit(&self) -> String {
        let mut params = vec!["ctx context.Context".to_string()];
        params.extend(self.params.iter().map(|p| format!("{} {}", p.name, p.ty)));

        let slots: Vec<String> = (0..self.returns.len()).map(return_slot).collect();
        let mut result_types: Vec<String> = self.returns.iter().map(|t| t.to_string()).collect();
        result_types.push("error".to_string());
        let results = if result_types.len() == 1 {
            "error".to_string()
        } else {
            format!("({})", result_types.join(", "))
        };

        let mut out = self.docs.leading("", DocMode::Block);
        out.push_str(&format!(
            "func (c *Client) {}({}) {results} {{\n",
            self.name,
            params.join(", ")
        ));
        if !slots.is_empty() {
            out.push_str("\tvar (\n");
            for (slot, ty) in slots.iter().zip(&self.returns) {
                out.push_str(&format!("\t\t{slot} {ty}\n"));
            }
            out.push_str("\t)\n");
        }

        let args: Vec<&str> = self.params.iter().map(|p| p.name.as_str()).collect();
        let refs: Vec<String> = slots.iter().map(|slot| format!("&{slot}")).collect();
        out.push_str(&format!(
            "\terr := c.call(ctx, {}, []interface{{}}{{{}}}, []interface{{}}{{{}}})\n",
            quote_go_string(&self.wire_name),
            args.join(", "),
            refs.join(", ")
        ));

        let mut returned = slots;
        returned.push("err".to_string());
        out.push_str(&format!("\treturn {}\n", returned.join(", ")));
        out.push_str("}\n\n");
        out
    }
}

impl Emit for GoDecl {
    fn emit(&self) -> String {
        match self {
            GoDecl::Struct(s) => s.emit(),
            GoDecl::Enum(e) => e.emit(),
            GoDecl::Func(f) => f.emit(),
        }
    }
}

impl Emit for GoFile {
    fn emit(&self) -> String {
        let mut out = String::from("// Code generated by apigen. DO NOT EDIT.\n\n");

        for entry in &self.outline {
            if entry.depth > 0 {
                out.push_str(&section_heading(entry.depth, &entry.name));
            }
            out.push_str(&entry.docs.leading("", DocMode::Block));
        }

        out.push_str(&format!("package {}\n\n", self.package));
        out.push_str("import (\n");
        for (i, group) in [&STD_IMPORTS[..], &THIRD_PARTY_IMPORTS[..]].iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for import in *group {
                out.push_str(&format!("\t{}\n", quote_go_string(import)));
            }
        }
        out.push_str(")\n\n");

        out.push_str(&client_prelude(&quote_go_string(&self.base_url)));
        out.push('\n');

        for decl in &self.decls {
            out.push_str(&decl.emit());
        }
        out
    }
}
