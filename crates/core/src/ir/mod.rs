//! Intermediate representation for sherpadoc to Go code generation.
//!
//! Two layers:
//! 1. Building blocks: type expressions, identifier naming, doc comments
//! 2. Go declaration IR, built by codegen and rendered by the `Emit` trait
//!
//! ## Module Structure
//!
//! - `types`: type token parsing and Go type rendering
//! - `naming`: exported and local Go identifiers
//! - `docs`: documentation as Go comments
//! - `decl`: Go declaration IR (GoFile, GoStruct, GoEnum, GoFunc)
//! - `codegen`: schema sections -> Go declaration IR
//! - `emit`: Go declaration IR -> code strings (via Emit trait)
//! - `runtime`: the fixed client prelude every generated file embeds

mod codegen;
mod decl;
pub mod docs;
mod emit;
pub mod naming;
mod runtime;
pub mod types;

pub use codegen::codegen_file;
pub use emit::Emit;
