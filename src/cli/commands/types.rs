//! Types command implementation

use crate::cli::catalog;
use crate::cli::error::CliError;
use crate::cli::output::format_type_list;

/// Handle the types command
pub fn handle_types() -> Result<(), CliError> {
    print!("{}", format_type_list(catalog::entries()));
    Ok(())
}
