//! Rule trait for defining per-file lint rules over Python syntax trees.

use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// Error raised when a rule cannot traverse the tree it was handed.
///
/// This is a hard failure: the file's diagnostics are withheld entirely
/// rather than reported partially. Expression and base-reference shapes a
/// rule merely does not recognize are never errors; they are silently
/// under-approximated.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A node was missing a field the grammar guarantees for its kind.
    #[error("malformed syntax tree: {kind} node at line {line} is missing its `{field}` field")]
    MalformedTree {
        /// Node kind that was malformed.
        kind: String,
        /// 1-indexed line of the offending node.
        line: usize,
        /// Grammar field that was absent.
        field: &'static str,
    },
}

/// A per-file lint rule over a Tree-sitter parse of Python source.
///
/// Rules receive the parsed tree plus a [`FileContext`] holding the raw
/// source and walk the tree to produce violations.
///
/// # Example
///
/// ```ignore
/// use strenum_lint_core::{FileContext, Rule, RuleError, Violation};
///
/// pub struct StrEnumCasing;
///
/// impl Rule for StrEnumCasing {
///     fn name(&self) -> &'static str { "str-enum-casing" }
///     fn code(&self) -> &'static str { "SE001" }
///
///     fn check(
///         &self,
///         ctx: &FileContext,
///         tree: &tree_sitter::Tree,
///     ) -> Result<Vec<Violation>, RuleError> {
///         let mut visitor = CasingVisitor::new(ctx);
///         visitor.visit(tree.root_node())?;
///         Ok(visitor.violations)
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "str-enum-casing").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "SE001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] if the tree is structurally invalid for this
    /// analysis. No partial results are returned in that case.
    fn check(
        &self,
        ctx: &FileContext,
        tree: &tree_sitter::Tree,
    ) -> Result<Vec<Violation>, RuleError>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
