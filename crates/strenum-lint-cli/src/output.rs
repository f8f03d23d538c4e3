//! Output formatting for lint results.

use anyhow::Result;
use strenum_lint_core::LintResult;

use crate::OutputFormat;

/// Prints lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

/// One line per diagnostic, message verbatim, plus a summary line.
///
/// Wrapper scripts match on the message substring, so nothing is inserted
/// between the location prefix and the message text.
fn print_text(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }

    if result.violations.is_empty() {
        println!("No StrEnum inconsistencies found");
    } else {
        let (errors, warnings, infos) = result.count_by_severity();
        println!(
            "\nFound {} error(s), {} warning(s), {} info(s) in {} file(s)",
            errors, warnings, infos, result.files_checked
        );
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}
