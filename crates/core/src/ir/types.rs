//! Type expressions: parsing sherpadoc type words into Go types.
//!
//! The grammar is tiny and closed:
//!
//! ```text
//! type := "nullable" type | "[]" type | "{}" type | base | identifier
//! ```
//!
//! Each wrapper consumes one token and recurses; base types and identifiers
//! must be the final token.

use std::fmt;

use crate::error::GenError;

/// Wrapper token for optional values.
pub const NULLABLE: &str = "nullable";
/// Wrapper token for arrays.
pub const ARRAY: &str = "[]";
/// Wrapper token for string-keyed objects.
pub const MAP: &str = "{}";

/// Base type names recognized by the grammar.
pub const BASE_TYPES: [&str; 16] = [
    "any",
    "bool",
    "int8",
    "uint8",
    "int16",
    "uint16",
    "int32",
    "uint32",
    "int64",
    "uint64",
    "int64s",
    "uint64s",
    "float32",
    "float64",
    "string",
    "timestamp",
];

/// Deepest wrapper nesting accepted, keeping parsing and rendering recursion bounded.
pub const MAX_WRAPPER_DEPTH: usize = 64;

/// Base types that travel as JSON strings to survive 53-bit JSON number precision.
const STRING_ENCODED: [&str; 2] = ["int64s", "uint64s"];

/// Check whether a token names a recognized base type.
pub fn is_base_type(token: &str) -> bool {
    BASE_TYPES.contains(&token)
}

/// Check whether a token is one of the wrapper tokens.
pub fn is_wrapper(token: &str) -> bool {
    matches!(token, NULLABLE | ARRAY | MAP)
}

/// A parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
    /// Base type by its sherpadoc name: "int32", "timestamp".
    Base(String),
    /// Optional value: *T
    Nullable(Box<GoType>),
    /// Array: []T
    Array(Box<GoType>),
    /// Object with string keys: map[string]V
    Map(Box<GoType>),
    /// Reference to a declared struct or enum.
    Named(String),
}

impl GoType {
    /// Parse a type token sequence.
    ///
    /// `context` names the declaration the type belongs to and only shows up in errors.
    /// More than [`MAX_WRAPPER_DEPTH`] leading wrappers are rejected up front.
    pub fn parse(context: &str, tokens: &[String]) -> Result<Self, GenError> {
        let depth = tokens.iter().take_while(|t| is_wrapper(t)).count();
        if depth > MAX_WRAPPER_DEPTH {
            return Err(GenError::MalformedType {
                context: context.to_string(),
                reason: "too many nested wrappers",
                tokens: tokens[..=MAX_WRAPPER_DEPTH].to_vec(),
            });
        }
        Self::parse_tokens(context, tokens)
    }

    fn parse_tokens(context: &str, tokens: &[String]) -> Result<Self, GenError> {
        let malformed = |reason: &'static str, rest: &[String]| GenError::MalformedType {
            context: context.to_string(),
            reason,
            tokens: rest.to_vec(),
        };

        let Some((first, rest)) = tokens.split_first() else {
            return Err(malformed("need at least one element", tokens));
        };

        match first.as_str() {
            NULLABLE => Ok(Self::Nullable(Box::new(Self::parse_tokens(context, rest)?))),
            ARRAY => Ok(Self::Array(Box::new(Self::parse_tokens(context, rest)?))),
            MAP => Ok(Self::Map(Box::new(Self::parse_tokens(context, rest)?))),
            base if is_base_type(base) => {
                if !rest.is_empty() {
                    return Err(malformed("leftover tokens after base type", rest));
                }
                Ok(Self::Base(base.to_string()))
            }
            ident => {
                if !rest.is_empty() {
                    return Err(malformed("leftover tokens after identifier type", rest));
                }
                Ok(Self::Named(ident.to_string()))
            }
        }
    }

    /// The canonical token sequence for this type.
    pub fn tokens(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Nullable(inner) => {
                    out.push(NULLABLE.to_string());
                    current = &**inner;
                }
                Self::Array(inner) => {
                    out.push(ARRAY.to_string());
                    current = &**inner;
                }
                Self::Map(inner) => {
                    out.push(MAP.to_string());
                    current = &**inner;
                }
                Self::Base(name) | Self::Named(name) => {
                    out.push(name.clone());
                    return out;
                }
            }
        }
    }

    /// The base type or identifier the wrappers bottom out at.
    pub fn terminal(&self) -> &str {
        match self {
            Self::Nullable(inner) | Self::Array(inner) | Self::Map(inner) => inner.terminal(),
            Self::Base(name) | Self::Named(name) => name,
        }
    }

    /// Whether struct fields of this type need the `,string` JSON option.
    pub fn needs_string_hint(&self) -> bool {
        STRING_ENCODED.contains(&self.terminal())
    }
}

/// Go spelling of a base type.
fn go_base_type(name: &str) -> &str {
    match name {
        "any" => "interface{}",
        "timestamp" => "time.Time",
        "int64s" => "int64",
        "uint64s" => "uint64",
        other => other,
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(name) => f.write_str(go_base_type(name)),
            Self::Nullable(inner) => write!(f, "*{inner}"),
            Self::Array(inner) => write!(f, "[]{inner}"),
            Self::Map(value) => write!(f, "map[string]{value}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn go(s: &str) -> String {
        GoType::parse("test", &words(s)).unwrap().to_string()
    }

    #[test]
    fn test_parse_nullable_array_of_string() {
        let ty = GoType::parse("test", &words("nullable [] string")).unwrap();
        assert_eq!(
            ty,
            GoType::Nullable(Box::new(GoType::Array(Box::new(GoType::Base(
                "string".into()
            )))))
        );
        assert_eq!(ty.to_string(), "*[]string");
    }

    #[test]
    fn test_render_base_types() {
        assert_eq!(go("any"), "interface{}");
        assert_eq!(go("timestamp"), "time.Time");
        assert_eq!(go("int64s"), "int64");
        assert_eq!(go("uint64s"), "uint64");
        assert_eq!(go("float32"), "float32");
        assert_eq!(go("bool"), "bool");
        assert_eq!(go("uint8"), "uint8");
    }

    #[test]
    fn test_render_wrappers() {
        assert_eq!(go("{} [] nullable Item"), "map[string][]*Item");
        assert_eq!(go("[] {} timestamp"), "[]map[string]time.Time");
        assert_eq!(go("nullable nullable int32"), "**int32");
        assert_eq!(go("Item"), "Item");
    }

    #[test]
    fn test_unknown_base_name_renders_verbatim() {
        assert_eq!(GoType::Base("complex128".into()).to_string(), "complex128");
    }

    #[test]
    fn test_empty_sequence_is_malformed() {
        let err = GoType::parse("field x of struct T", &[]).unwrap_err();
        match err {
            GenError::MalformedType {
                context,
                reason,
                tokens,
            } => {
                assert_eq!(context, "field x of struct T");
                assert_eq!(reason, "need at least one element");
                assert!(tokens.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_wrapper_is_malformed() {
        for input in ["nullable", "[]", "{}", "[] nullable"] {
            let err = GoType::parse("test", &words(input)).unwrap_err();
            assert!(
                matches!(err, GenError::MalformedType { reason: "need at least one element", .. }),
                "{input}: {err}"
            );
        }
    }

    #[test]
    fn test_leftover_tokens_are_malformed() {
        let err = GoType::parse("test", &words("string int32")).unwrap_err();
        match err {
            GenError::MalformedType { reason, tokens, .. } => {
                assert_eq!(reason, "leftover tokens after base type");
                assert_eq!(tokens, vec!["int32"]);
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = GoType::parse("test", &words("[] Item string")).unwrap_err();
        assert!(matches!(
            err,
            GenError::MalformedType {
                reason: "leftover tokens after identifier type",
                ..
            }
        ));
    }

    #[test]
    fn test_wrapper_depth_is_bounded() {
        let nested = |depth: usize| {
            let mut tokens = vec![NULLABLE.to_string(); depth];
            tokens.push("string".into());
            tokens
        };

        let ty = GoType::parse("test", &nested(MAX_WRAPPER_DEPTH)).unwrap();
        assert_eq!(ty.to_string(), format!("{}string", "*".repeat(MAX_WRAPPER_DEPTH)));

        let err = GoType::parse("field deep of struct T", &nested(200_000)).unwrap_err();
        match err {
            GenError::MalformedType {
                context,
                reason,
                tokens,
            } => {
                assert_eq!(context, "field deep of struct T");
                assert_eq!(reason, "too many nested wrappers");
                assert_eq!(tokens.len(), MAX_WRAPPER_DEPTH + 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tokens_round_trip() {
        for input in [
            "string",
            "Item",
            "nullable [] string",
            "{} nullable int64s",
            "[] [] {} Item",
        ] {
            let ty = GoType::parse("test", &words(input)).unwrap();
            assert_eq!(ty.tokens(), words(input));
            let again = GoType::parse("test", &ty.tokens()).unwrap();
            assert_eq!(again, ty);
            assert_eq!(again.to_string(), ty.to_string());
        }
    }

    #[test]
    fn test_string_hint_follows_terminal_token() {
        let hint = |s: &str| GoType::parse("test", &words(s)).unwrap().needs_string_hint();
        assert!(hint("int64s"));
        assert!(hint("uint64s"));
        assert!(hint("nullable int64s"));
        assert!(!hint("int64"));
        assert!(!hint("string"));
        assert!(!hint("Item"));
    }
}
