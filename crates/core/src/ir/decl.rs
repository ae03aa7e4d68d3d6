//! Go declaration IR.
//!
//! Codegen lowers the schema tree into these nodes; `Emit` turns them into
//! source text. Everything here is already named and typed for Go.

use super::docs::Docs;
use super::types::GoType;

/// A complete generated Go file.
#[derive(Debug, Clone)]
pub struct GoFile {
    /// Outline of the API shown in the header comment.
    pub outline: Vec<OutlineEntry>,
    /// Package clause name.
    pub package: String,
    /// Base URL baked into `NewClient`.
    pub base_url: String,
    /// Declarations in emission order.
    pub decls: Vec<GoDecl>,
}

/// One section in the header outline. The root section has depth 0.
#[derive(Debug, Clone)]
pub struct OutlineEntry {
    pub depth: usize,
    pub name: String,
    pub docs: Docs,
}

/// A top-level declaration.
#[derive(Debug, Clone)]
pub enum GoDecl {
    Struct(GoStruct),
    Enum(GoEnum),
    Func(GoFunc),
}

/// `type Name struct { ... }`
#[derive(Debug, Clone)]
pub struct GoStruct {
    pub name: String,
    pub docs: Docs,
    pub fields: Vec<GoField>,
}

/// A struct field with its JSON tag information.
#[derive(Debug, Clone)]
pub struct GoField {
    pub name: String,
    pub ty: GoType,
    /// JSON key, set when it differs from the Go field name.
    pub json_name: Option<String>,
    /// Whether the value travels as a JSON string (`,string`).
    pub string_hint: bool,
    pub docs: Docs,
}

impl GoField {
    /// The struct tag, if the field needs one.
    pub fn tag(&self) -> Option<String> {
        if self.json_name.is_none() && !self.string_hint {
            return None;
        }
        let name = self.json_name.as_deref().unwrap_or_default();
        let hint = if self.string_hint { ",string" } else { "" };
        Some(format!("`json:\"{name}{hint}\"`"))
    }
}

/// Underlying type of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
    Int,
    String,
}

/// `type Name int` or `type Name string`, plus its constants.
#[derive(Debug, Clone)]
pub struct GoEnum {
    pub name: String,
    pub kind: EnumKind,
    pub docs: Docs,
    pub values: Vec<GoConst>,
}

/// A typed constant in an enumeration's const block.
#[derive(Debug, Clone)]
pub struct GoConst {
    pub name: String,
    pub value: GoLiteral,
    pub docs: Docs,
}

/// Literal value of a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoLiteral {
    Int(i64),
    String(String),
}

/// A client method calling one API function.
#[derive(Debug, Clone)]
pub struct GoFunc {
    /// Go method name.
    pub name: String,
    /// Function name as sent to the server.
    pub wire_name: String,
    pub docs: Docs,
    pub params: Vec<GoParam>,
    pub returns: Vec<GoType>,
}

/// A method parameter.
#[derive(Debug, Clone)]
pub struct GoParam {
    pub name: String,
    pub ty: GoType,
}
