//! Fields command implementation

use super::resolve_type;
use crate::cli::error::CliError;
use crate::cli::output::format_field_list;

/// Handle the fields command
pub fn handle_fields(type_name: &str) -> Result<(), CliError> {
    let entry = resolve_type(type_name)?;
    let keys = entry.field_names();
    print!("{}", format_field_list(entry, &keys));
    Ok(())
}
