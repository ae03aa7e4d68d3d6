//! Lowering of a sherpadoc section tree into the Go declaration IR.
//!
//! Sections are visited depth first. Within a section, structs come first,
//! then int enums, then string enums, then functions, so the output follows
//! the document's own order and is byte-for-byte reproducible.

use std::collections::HashMap;

use tracing::debug;

use super::decl::{
    EnumKind, GoConst, GoDecl, GoEnum, GoField, GoFile, GoFunc, GoLiteral, GoParam, GoStruct,
    OutlineEntry,
};
use super::docs::Docs;
use super::naming::{exported_name, local_name};
use super::types::GoType;
use crate::config::GenerateOptions;
use crate::error::GenError;
use crate::schema::{Function, Ints, Section, Strings, Struct};

/// Identifiers the runtime prelude declares at package level.
const RESERVED_PACKAGE_IDENTIFIERS: [&str; 2] = ["Client", "NewClient"];
/// Fields of the generated `Client` type, which share its method namespace.
const RESERVED_METHOD_IDENTIFIERS: [&str; 2] = ["BaseURL", "Client"];

/// A namespace in which every generated identifier must be unique.
#[derive(Debug)]
struct Scope {
    name: String,
    claimed: HashMap<String, String>,
}

impl Scope {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            claimed: HashMap::new(),
        }
    }

    fn with_reserved(name: impl Into<String>, reserved: &[&str]) -> Self {
        let mut scope = Self::new(name);
        for ident in reserved {
            scope
                .claimed
                .insert((*ident).to_string(), "(generated client)".to_string());
        }
        scope
    }

    /// Record that `source` from the schema produced `ident`.
    fn claim(&mut self, ident: &str, source: &str) -> Result<(), GenError> {
        if let Some(first) = self.claimed.get(ident) {
            return Err(GenError::DuplicateIdentifier {
                scope: self.name.clone(),
                identifier: ident.to_string(),
                first: first.clone(),
                second: source.to_string(),
            });
        }
        self.claimed.insert(ident.to_string(), source.to_string());
        Ok(())
    }
}

/// Mutable state while walking the section tree.
#[derive(Debug)]
struct Codegen {
    package: Scope,
    methods: Scope,
    decls: Vec<GoDecl>,
}

/// Lower a validated schema document into a Go file.
pub fn codegen_file(doc: &Section, options: &GenerateOptions) -> Result<GoFile, GenError> {
    let mut outline = Vec::new();
    collect_outline(doc, 0, &mut outline);

    let mut cx = Codegen {
        package: Scope::with_reserved("package", &RESERVED_PACKAGE_IDENTIFIERS),
        methods: Scope::with_reserved("client methods", &RESERVED_METHOD_IDENTIFIERS),
        decls: Vec::new(),
    };
    cx.section(doc)?;

    Ok(GoFile {
        outline,
        package: options.package_name().to_string(),
        base_url: options.base_url().to_string(),
        decls: cx.decls,
    })
}

fn collect_outline(section: &Section, depth: usize, out: &mut Vec<OutlineEntry>) {
    out.push(OutlineEntry {
        depth,
        name: section.name.clone(),
        docs: Docs::new(&section.docs),
    });
    for sub in &section.sections {
        collect_outline(sub, depth + 1, out);
    }
}

/// Named types are declared under their exported name, so references must follow.
fn export_named(ty: GoType) -> GoType {
    match ty {
        GoType::Named(name) => GoType::Named(exported_name(&name)),
        GoType::Nullable(inner) => GoType::Nullable(Box::new(export_named(*inner))),
        GoType::Array(inner) => GoType::Array(Box::new(export_named(*inner))),
        GoType::Map(inner) => GoType::Map(Box::new(export_named(*inner))),
        base @ GoType::Base(_) => base,
    }
}

fn parse_type(context: &str, tokens: &[String]) -> Result<GoType, GenError> {
    GoType::parse(context, tokens).map(export_named)
}

impl Codegen {
    fn section(&mut self, section: &Section) -> Result<(), GenError> {
        debug!(
            section = %section.name,
            structs = section.structs.len(),
            ints = section.ints.len(),
            strings = section.strings.len(),
            functions = section.functions.len(),
            subsections = section.sections.len(),
            "Lowering section"
        );

        for s in &section.structs {
            let decl = self.lower_struct(s)?;
            self.decls.push(GoDecl::Struct(decl));
        }
        for e in &section.ints {
            let decl = self.lower_ints(e)?;
            self.decls.push(GoDecl::Enum(decl));
        }
        for e in &section.strings {
            let decl = self.lower_strings(e)?;
            self.decls.push(GoDecl::Enum(decl));
        }
        for f in &section.functions {
            let decl = self.lower_function(f)?;
            self.decls.push(GoDecl::Func(decl));
        }
        for sub in &section.sections {
            self.section(sub)?;
        }
        Ok(())
    }

    fn lower_struct(&mut self, s: &Struct) -> Result<GoStruct, GenError> {
        let name = exported_name(&s.name);
        self.package.claim(&name, &s.name)?;

        let mut scope = Scope::new(format!("struct {}", s.name));
        let mut fields = Vec::with_capacity(s.fields.len());
        for f in &s.fields {
            let context = format!("field {} of struct {}", f.name, s.name);
            let ty = parse_type(&context, &f.typewords)?;
            let field_name = exported_name(&f.name);
            scope.claim(&field_name, &f.name)?;
            fields.push(GoField {
                json_name: (field_name != f.name).then(|| f.name.clone()),
                string_hint: ty.needs_string_hint(),
                name: field_name,
                ty,
                docs: Docs::new(&f.docs),
            });
        }

        Ok(GoStruct {
            name,
            docs: Docs::new(&s.docs),
            fields,
        })
    }

    fn lower_ints(&mut self, e: &Ints) -> Result<GoEnum, GenError> {
        let values = e
            .values
            .iter()
            .map(|v| (v.name.as_str(), GoLiteral::Int(v.value), v.docs.as_str()));
        self.lower_enum(&e.name, &e.docs, EnumKind::Int, values)
    }

    fn lower_strings(&mut self, e: &Strings) -> Result<GoEnum, GenError> {
        let values = e
            .values
            .iter()
            .map(|v| (v.name.as_str(), GoLiteral::String(v.value.clone()), v.docs.as_str()));
        self.lower_enum(&e.name, &e.docs, EnumKind::String, values)
    }

    /// Constants live in the package namespace next to the types.
    fn lower_enum<'a>(
        &mut self,
        schema_name: &str,
        docs: &str,
        kind: EnumKind,
        values: impl Iterator<Item = (&'a str, GoLiteral, &'a str)>,
    ) -> Result<GoEnum, GenError> {
        let name = exported_name(schema_name);
        self.package.claim(&name, schema_name)?;

        let mut consts = Vec::new();
        for (value_name, value, value_docs) in values {
            let const_name = exported_name(value_name);
            self.package
                .claim(&const_name, &format!("{schema_name}.{value_name}"))?;
            consts.push(GoConst {
                name: const_name,
                value,
                docs: Docs::new(value_docs),
            });
        }

        Ok(GoEnum {
            name,
            kind,
            docs: Docs::new(docs),
            values: consts,
        })
    }

    fn lower_function(&mut self, f: &Function) -> Result<GoFunc, GenError> {
        let name = exported_name(&f.name);
        self.methods.claim(&name, &f.name)?;

        let mut scope = Scope::new(format!("function {}", f.name));
        let mut params = Vec::with_capacity(f.params.len());
        for p in &f.params {
            let context = format!("parameter {} of function {}", p.name, f.name);
            let ty = parse_type(&context, &p.typewords)?;
            let param_name = local_name(&p.name);
            scope.claim(&param_name, &p.name)?;
            params.push(GoParam {
                name: param_name,
                ty,
            });
        }

        let mut returns = Vec::with_capacity(f.returns.len());
        for (index, r) in f.returns.iter().enumerate() {
            let context = format!("return value {index} of function {}", f.name);
            returns.push(parse_type(&context, &r.typewords)?);
        }

        Ok(GoFunc {
            name,
            wire_name: f.name.clone(),
            docs: Docs::new(&f.docs),
            params,
            returns,
        })
    }
}
