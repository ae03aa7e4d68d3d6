//! Identifier naming for generated Go code.
//!
//! Schema names are camelCase JSON names. Exported Go names get an upper-case
//! first letter and canonical initialisms (`userId` becomes `UserID`); local
//! names get a lower-case first letter and are kept clear of Go keywords and
//! of the identifiers generated method bodies use themselves.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Initialisms that Go style spells in a consistent case.
pub static COMMON_INITIALISMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
        "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
        "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF",
        "XSS",
    ]
    .into_iter()
    .collect()
});

/// Go keywords, plus the identifiers generated method bodies refer to, which parameters must not shadow.
static GO_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
        // Predeclared types and values that return slot types may refer to.
        "any",
        "bool",
        "byte",
        "complex64",
        "complex128",
        "error",
        "false",
        "float32",
        "float64",
        "int",
        "int8",
        "int16",
        "int32",
        "int64",
        "iota",
        "nil",
        "rune",
        "string",
        "true",
        "uint",
        "uint8",
        "uint16",
        "uint32",
        "uint64",
        "uintptr",
        // Identifiers used by the generated method body.
        "c",
        "ctx",
        "err",
        "time",
    ]
    .into_iter()
    .collect()
});

/// Go identifier for an exported name: type, field, constant or method.
pub fn exported_name(name: &str) -> String {
    lint_initialisms(&capitalize_first(name))
}

/// Go identifier for a function parameter.
pub fn local_name(name: &str) -> String {
    let local = lowercase_first(name);
    if GO_RESERVED_WORDS.contains(local.as_str()) || is_return_slot(&local) {
        format!("_{local}")
    } else {
        local
    }
}

/// Name of the temporary holding return value `index`.
pub fn return_slot(index: usize) -> String {
    format!("r{index}")
}

fn is_return_slot(name: &str) -> bool {
    name.strip_prefix('r')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Replace known initialisms by their canonical spelling.
///
/// Words end at a lower-case letter followed by anything else, and at
/// underscores. Underscores are dropped, except a single one between two
/// digits. A word that is a known initialism in any case is upper-cased,
/// or lower-cased when it starts the name in lower case. Other all-lower
/// words after the first get an upper-case first letter.
pub fn lint_initialisms(name: &str) -> String {
    if name == "_" || name.chars().all(char::is_lowercase) {
        return name.to_string();
    }

    let mut runes: Vec<char> = name.chars().collect();
    let mut start = 0;
    let mut i = 0;
    while i < runes.len() {
        let mut end_of_word = false;
        if i + 1 == runes.len() {
            end_of_word = true;
        } else if runes[i + 1] == '_' {
            end_of_word = true;
            let mut n = 1;
            while i + n + 1 < runes.len() && runes[i + n + 1] == '_' {
                n += 1;
            }
            if i + n + 1 < runes.len()
                && runes[i].is_ascii_digit()
                && runes[i + n + 1].is_ascii_digit()
            {
                n -= 1;
            }
            runes.drain(i + 1..i + 1 + n);
        } else if runes[i].is_lowercase() && !runes[i + 1].is_lowercase() {
            end_of_word = true;
        }
        i += 1;
        if !end_of_word {
            continue;
        }

        let word: String = runes[start..i].iter().collect();
        let upper = word.to_uppercase();
        if COMMON_INITIALISMS.contains(upper.as_str()) {
            let replacement = if start == 0 && runes[0].is_lowercase() {
                word.to_lowercase()
            } else {
                upper
            };
            runes.splice(start..i, replacement.chars());
        } else if start > 0 && word.to_lowercase() == word {
            runes[start] = runes[start].to_uppercase().next().unwrap_or(runes[start]);
        }
        start = i;
    }
    runes.into_iter().collect()
}
