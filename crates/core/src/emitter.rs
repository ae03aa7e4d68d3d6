//! Go client emitter for sherpadoc documents.
//!
//! The pipeline is:
//! 1. Parse: sherpadoc JSON -> Section tree
//! 2. Validate: names, uniqueness and type references
//! 3. Codegen: Section tree -> GoFile (Go declaration IR)
//! 4. Emit: GoFile -> String (via Emit trait)

use tracing::info;

use crate::config::GenerateOptions;
use crate::error::GenError;
use crate::ir::{codegen_file, Emit};
use crate::schema::Section;
use crate::validate::validate;

/// Generate a Go client package from a sherpadoc JSON string.
///
/// Either the complete source file is returned, or an error and no output at all.
pub fn generate(schema_json: &str, options: &GenerateOptions) -> Result<String, GenError> {
    let doc = Section::from_json(schema_json)?;
    validate(&doc)?;

    let code = codegen_file(&doc, options)?.emit();
    info!(
        api = %doc.name,
        package = options.package_name(),
        bytes = code.len(),
        "Generated Go client"
    );
    Ok(code)
}
