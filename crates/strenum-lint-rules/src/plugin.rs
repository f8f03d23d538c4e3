//! Flake8-style plugin adapter for the casing rule.
//!
//! Lint frameworks with a flake8-like protocol consume per-violation
//! tuples of `(line, column, message, reporter-identity)`. This module
//! maps [`StrEnumCasing`] onto that contract so the checker can be hosted
//! as a rule plugin rather than a standalone binary.

use std::path::Path;

use strenum_lint_core::{FileContext, Rule, RuleError};

use crate::casing::StrEnumCasing;

/// One reported violation in the host framework's tuple convention:
/// 1-indexed line, 1-indexed column, message, reporter-identity token.
pub type PluginDiagnostic = (usize, usize, String, &'static str);

/// Hosts the casing rule behind a flake8-style `run` entry point.
pub struct StrEnumCasingPlugin;

impl StrEnumCasingPlugin {
    /// Plugin name, used as the reporter-identity token.
    pub const NAME: &'static str = "strenum-lint";

    /// Plugin version.
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Runs the casing check over an already-parsed tree.
    ///
    /// The optional file path is carried through to diagnostics but plays
    /// no part in the analysis. Tuples are yielded in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if the tree is structurally invalid; no
    /// partial tuple sequence is produced in that case.
    pub fn run(
        tree: &tree_sitter::Tree,
        source: &str,
        filename: Option<&Path>,
    ) -> Result<Vec<PluginDiagnostic>, RuleError> {
        let path = filename.unwrap_or_else(|| Path::new(""));
        let ctx = FileContext::new(path, source, Path::new(""));
        let violations = StrEnumCasing::new().check(&ctx, tree)?;

        Ok(violations
            .into_iter()
            .map(|v| (v.location.line, v.location.column, v.message, Self::NAME))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strenum_lint_core::parse_python;

    #[test]
    fn run_yields_tuples_in_traversal_order() {
        let source = r#"
class Colors(StrEnum):
    red = "RED"
    BLUE = "BLUE"

class Status(enum.StrEnum):
    success = "SUCCESS"
"#;
        let tree = parse_python(source).expect("parse");
        let diagnostics = StrEnumCasingPlugin::run(&tree, source, None).expect("run");

        assert_eq!(diagnostics.len(), 2);

        let (line, column, message, reporter) = &diagnostics[0];
        assert_eq!(*line, 3);
        assert_eq!(*column, 5);
        assert_eq!(
            message,
            "SE001 StrEnum 'Colors' has member 'red' with inconsistent casing: value is 'RED'"
        );
        assert_eq!(*reporter, StrEnumCasingPlugin::NAME);

        assert!(diagnostics[1].2.contains("'success'"));
    }

    #[test]
    fn clean_source_yields_no_tuples() {
        let source = "class Valid(StrEnum):\n    A = \"A\"\n";
        let tree = parse_python(source).expect("parse");
        let diagnostics = StrEnumCasingPlugin::run(&tree, source, None).expect("run");
        assert!(diagnostics.is_empty());
    }
}
