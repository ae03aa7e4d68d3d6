//! Sherpadoc schema structs for serde deserialization.
//!
//! The document is a tree of sections. Each section carries its own
//! documentation, declarations and nested sections, in declaration order.

use serde::{Deserialize, Deserializer};

use crate::error::GenError;

/// The only sherpadoc format version this generator understands.
pub const SUPPORTED_SCHEMA_VERSION: i64 = 1;

/// A section of the API, the root of the document included.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Section {
    /// Section name, used as heading in the generated outline.
    pub name: String,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    /// Functions declared in this section.
    #[serde(deserialize_with = "null_as_default")]
    pub functions: Vec<Function>,
    /// Nested sections.
    #[serde(deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
    /// Struct types declared in this section.
    #[serde(deserialize_with = "null_as_default")]
    pub structs: Vec<Struct>,
    /// Integer enumerations declared in this section.
    #[serde(deserialize_with = "null_as_default")]
    pub ints: Vec<Ints>,
    /// String enumerations declared in this section.
    #[serde(deserialize_with = "null_as_default")]
    pub strings: Vec<Strings>,
    /// API version, only set on the root section.
    pub version: String,
    /// Sherpa protocol version, only set on the root section.
    pub sherpa_version: i64,
    /// Document format version, only set on the root section.
    pub sherpadoc_version: i64,
}

/// An API function.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Function {
    /// Function name as called over the wire.
    pub name: String,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    /// Parameters, in call order.
    #[serde(deserialize_with = "null_as_default")]
    pub params: Vec<Arg>,
    /// Return values, in result order.
    #[serde(deserialize_with = "null_as_default")]
    pub returns: Vec<Arg>,
}

/// A function parameter or return value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Arg {
    /// Name, may be empty for return values.
    pub name: String,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    /// Type token sequence.
    #[serde(deserialize_with = "null_as_default")]
    pub typewords: Vec<String>,
}

/// A struct type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Struct {
    /// Type name.
    pub name: String,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    /// Fields, in declaration order.
    #[serde(deserialize_with = "null_as_default")]
    pub fields: Vec<Field>,
}

/// A struct field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Field {
    /// Field name as it appears in JSON.
    pub name: String,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    /// Type token sequence.
    #[serde(deserialize_with = "null_as_default")]
    pub typewords: Vec<String>,
}

/// An enumeration with integer values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ints {
    /// Type name.
    pub name: String,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    /// Named values, in declaration order.
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<IntValue>,
}

/// A named integer enumeration value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IntValue {
    /// Constant name.
    pub name: String,
    /// Literal value.
    pub value: i64,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
}

/// An enumeration with string values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Strings {
    /// Type name.
    pub name: String,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
    /// Named values, in declaration order.
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<StringValue>,
}

/// A named string enumeration value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StringValue {
    /// Constant name.
    pub name: String,
    /// Literal value.
    pub value: String,
    /// Free-text documentation.
    #[serde(deserialize_with = "null_as_default")]
    pub docs: String,
}

impl Section {
    /// Parse a sherpadoc document and check its format version.
    pub fn from_json(json: &str) -> Result<Self, GenError> {
        let doc: Self = serde_json::from_str(json)?;
        if doc.sherpadoc_version != SUPPORTED_SCHEMA_VERSION {
            return Err(GenError::SchemaVersionMismatch {
                found: doc.sherpadoc_version,
                expected: SUPPORTED_SCHEMA_VERSION,
            });
        }
        Ok(doc)
    }

    /// This section followed by all nested sections, depth-first in declaration order.
    pub fn walk(&self) -> Vec<&Section> {
        let mut out = vec![self];
        for sub in &self.sections {
            out.extend(sub.walk());
        }
        out
    }
}

/// Go encodes nil slices as `null`; treat those like absent fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
