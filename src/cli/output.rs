//! Output formatting for CLI

use super::catalog::CatalogEntry;

/// Report for the `decode` command
pub fn format_decode_report(
    requested: &str,
    resolved: &str,
    additional_keys: &[String],
    json: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Type: {} (resolved {})\n", requested, resolved));
    if additional_keys.is_empty() {
        output.push_str("Additional data: none\n");
    } else {
        output.push_str(&format!("Additional data: {}\n", additional_keys.join(", ")));
    }
    output.push('\n');
    output.push_str(json);
    output.push('\n');
    output
}

/// One key per line
pub fn format_field_list(entry: &CatalogEntry, keys: &[&str]) -> String {
    let mut output = format!("{} ({} fields)\n", entry.name, keys.len());
    for key in keys {
        output.push_str(&format!("  {}\n", key));
    }
    output
}

pub fn format_type_list(entries: &[CatalogEntry]) -> String {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let mut output = String::new();
    for entry in entries {
        let kind = if entry.polymorphic {
            "family"
        } else {
            "concrete"
        };
        output.push_str(&format!("{:width$}  {}\n", entry.name, kind, width = width));
    }
    output
}

/// Differences found by `roundtrip`, one per line
pub fn format_differences(differences: &[String]) -> String {
    let mut output = String::new();
    for difference in differences {
        output.push_str(&format!("  - {}\n", difference));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::catalog::lookup;

    #[test]
    fn test_decode_report_lists_additional_keys() {
        let report = format_decode_report(
            "entity",
            "OnenotePage",
            &["futureField".to_string()],
            "{}",
        );
        assert!(report.starts_with("Type: entity (resolved OnenotePage)\n"));
        assert!(report.contains("Additional data: futureField\n"));
    }

    #[test]
    fn test_field_list() {
        let entry = lookup("externalLink").unwrap();
        let text = format_field_list(entry, &["@odata.type", "href"]);
        assert_eq!(text, "externalLink (2 fields)\n  @odata.type\n  href\n");
    }
}
