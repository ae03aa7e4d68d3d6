//! Typed Go client generation for sherpa JSON RPC APIs.
//!
//! Takes a sherpadoc document, the machine-readable description of a sherpa
//! API, and produces one Go source file: a type per struct and enumeration,
//! and a method on `Client` per API function.
//!
//! ```no_run
//! use apigen_core::{generate, GenerateOptions};
//!
//! # fn main() -> Result<(), apigen_core::GenError> {
//! let schema = std::fs::read_to_string("example.json").unwrap_or_default();
//! let options = GenerateOptions::new("Example", "https://example.com/example/")?;
//! let code = generate(&schema, &options)?;
//! print!("{code}");
//! # Ok(())
//! # }
//! ```

mod config;
mod emitter;
mod error;
mod ir;
mod schema;
mod validate;

pub use config::GenerateOptions;
pub use emitter::generate;
pub use error::GenError;
pub use ir::docs::{section_heading, DocMode, Docs};
pub use ir::naming::{exported_name, local_name};
pub use ir::types::GoType;
pub use schema::{
    Arg, Field, Function, IntValue, Ints, Section, StringValue, Strings, Struct,
    SUPPORTED_SCHEMA_VERSION,
};
pub use validate::validate;
