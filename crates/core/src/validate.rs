//! Structural checks on a decoded schema document.
//!
//! Runs before any Go code is built. Grammar errors in type token sequences
//! are left to the type parser, which knows the declaration they belong to.

use std::collections::HashSet;

use tracing::debug;

use crate::error::GenError;
use crate::ir::types::{is_base_type, is_wrapper};
use crate::schema::{Arg, Section};

/// Check names, uniqueness and type references across the whole document.
pub fn validate(doc: &Section) -> Result<(), GenError> {
    let sections = doc.walk();

    let mut types = HashSet::new();
    let mut functions = HashSet::new();
    for section in &sections {
        let declared = section
            .structs
            .iter()
            .map(|s| ("struct", s.name.as_str()))
            .chain(section.ints.iter().map(|e| ("ints", e.name.as_str())))
            .chain(section.strings.iter().map(|e| ("strings", e.name.as_str())));
        for (kind, name) in declared {
            let context = format!("{kind} {name}");
            check_identifier(&context, name)?;
            if !types.insert(name) {
                return Err(GenError::validation(context, "duplicate type name"));
            }
        }
        for f in &section.functions {
            let context = format!("function {}", f.name);
            check_identifier(&context, &f.name)?;
            if !functions.insert(f.name.as_str()) {
                return Err(GenError::validation(context, "duplicate function name"));
            }
        }
    }

    for section in &sections {
        for s in &section.structs {
            let mut seen = HashSet::new();
            for f in &s.fields {
                let context = format!("field {} of struct {}", f.name, s.name);
                check_member(&context, &f.name, &mut seen)?;
                check_reference(&context, &f.typewords, &types)?;
            }
        }
        for e in &section.ints {
            let mut seen = HashSet::new();
            for v in &e.values {
                check_member(&format!("value {} of ints {}", v.name, e.name), &v.name, &mut seen)?;
            }
        }
        for e in &section.strings {
            let mut seen = HashSet::new();
            for v in &e.values {
                check_member(
                    &format!("value {} of strings {}", v.name, e.name),
                    &v.name,
                    &mut seen,
                )?;
            }
        }
        for f in &section.functions {
            let mut seen = HashSet::new();
            for p in &f.params {
                let context = format!("parameter {} of function {}", p.name, f.name);
                check_member(&context, &p.name, &mut seen)?;
                check_reference(&context, &p.typewords, &types)?;
            }
            check_returns(&f.name, &f.returns, &types)?;
        }
    }

    debug!(
        sections = sections.len(),
        types = types.len(),
        functions = functions.len(),
        "Schema validated"
    );
    Ok(())
}

fn check_returns(function: &str, returns: &[Arg], types: &HashSet<&str>) -> Result<(), GenError> {
    for (index, r) in returns.iter().enumerate() {
        let context = format!("return value {index} of function {function}");
        if !r.name.is_empty() {
            check_identifier(&context, &r.name)?;
        }
        check_reference(&context, &r.typewords, types)?;
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_identifier(context: &str, name: &str) -> Result<(), GenError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(GenError::validation(
            context,
            format!("{name:?} is not a valid identifier"),
        ))
    }
}

fn check_member<'a>(
    context: &str,
    name: &'a str,
    seen: &mut HashSet<&'a str>,
) -> Result<(), GenError> {
    check_identifier(context, name)?;
    if !seen.insert(name) {
        return Err(GenError::validation(context, "duplicate name"));
    }
    Ok(())
}

/// Only the terminal token can name a type; the parser checks the rest.
fn check_reference(
    context: &str,
    typewords: &[String],
    types: &HashSet<&str>,
) -> Result<(), GenError> {
    let Some(last) = typewords.last() else {
        return Ok(());
    };
    if is_wrapper(last) || is_base_type(last) || types.contains(last.as_str()) {
        return Ok(());
    }
    Err(GenError::validation(
        context,
        format!("unknown type {last:?}"),
    ))
}
