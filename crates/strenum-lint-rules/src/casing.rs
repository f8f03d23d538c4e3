//! Rule to flag `StrEnum` members whose name and string value differ only
//! in letter case.
//!
//! # Rationale
//!
//! A `StrEnum` member named `red` backed by the value `"RED"` is almost
//! always a slip: the name and value denote the same word, and readers of
//! either will assume the other matches. Members whose value is a different
//! word entirely are a deliberate name/value divergence and are left alone.
//!
//! # Limitations
//!
//! Detection is purely syntactic. Aliased imports of `StrEnum` are not
//! recognized, and values built from concatenation, f-strings, or other
//! expressions are never flagged.

use strenum_lint_core::{FileContext, Location, Rule, RuleError, Severity, Violation};
use tracing::debug;
use tree_sitter::Node;

use crate::classify::{classify, ValueClassification};
use crate::detect::is_string_backed_enum;
use crate::syntax::{base_refs, node_text};

/// Rule code for str-enum-casing.
pub const CODE: &str = "SE001";

/// Rule name for str-enum-casing.
pub const NAME: &str = "str-enum-casing";

/// Flags `StrEnum` members whose name and value are the same word in a
/// different case.
#[derive(Debug, Clone)]
pub struct StrEnumCasing {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for StrEnumCasing {
    fn default() -> Self {
        Self::new()
    }
}

impl StrEnumCasing {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for StrEnumCasing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires StrEnum member names to match the casing of their string values"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(
        &self,
        ctx: &FileContext,
        tree: &tree_sitter::Tree,
    ) -> Result<Vec<Violation>, RuleError> {
        let mut visitor = CasingVisitor {
            ctx,
            src: ctx.content.as_bytes(),
            severity: self.severity,
            violations: Vec::new(),
        };

        visitor.visit(tree.root_node())?;
        Ok(visitor.violations)
    }
}

/// Depth-first, pre-order walker over the whole tree.
///
/// Every class definition is inspected exactly once, at the point it
/// lexically occurs, including classes nested inside non-qualifying
/// classes, functions, or any other construct. No state carries between
/// sibling class definitions.
struct CasingVisitor<'a> {
    ctx: &'a FileContext<'a>,
    src: &'a [u8],
    severity: Severity,
    violations: Vec<Violation>,
}

impl CasingVisitor<'_> {
    fn visit(&mut self, node: Node<'_>) -> Result<(), RuleError> {
        if node.kind() == "class_definition" {
            self.check_class(node)?;
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child)?;
        }
        Ok(())
    }

    /// Checks the direct member assignments of one class definition.
    ///
    /// Recursion into the class body is left to [`Self::visit`], so nested
    /// class definitions are checked independently of their enclosing
    /// class's status.
    fn check_class(&mut self, class: Node<'_>) -> Result<(), RuleError> {
        let name_node = class
            .child_by_field_name("name")
            .ok_or_else(|| malformed(class, "name"))?;
        let class_name = node_text(name_node, self.src);

        let bases = class
            .child_by_field_name("superclasses")
            .map(|supers| base_refs(supers, self.src))
            .unwrap_or_default();

        if !is_string_backed_enum(&bases) {
            return Ok(());
        }

        debug!(class = class_name, "checking StrEnum class");

        let body = class
            .child_by_field_name("body")
            .ok_or_else(|| malformed(class, "body"))?;

        let mut cursor = body.walk();
        for stmt in body.named_children(&mut cursor) {
            if stmt.kind() != "expression_statement" {
                continue;
            }
            let Some(assignment) = stmt.named_child(0).filter(|n| n.kind() == "assignment")
            else {
                continue;
            };
            self.check_member(class_name, assignment);
        }

        Ok(())
    }

    /// Applies the casing rule to one candidate member assignment.
    fn check_member(&mut self, class_name: &str, assignment: Node<'_>) {
        // Annotated declarations and compound/tuple/chained targets are
        // not member definitions for this rule.
        if assignment.child_by_field_name("type").is_some() {
            return;
        }
        let Some(target) = assignment
            .child_by_field_name("left")
            .filter(|n| n.kind() == "identifier")
        else {
            return;
        };
        let Some(value) = assignment.child_by_field_name("right") else {
            return;
        };

        let text = match classify(value, self.src) {
            ValueClassification::Auto | ValueClassification::Opaque => return,
            ValueClassification::Literal(text) => text,
        };

        let name = node_text(target, self.src);
        if name == text || name.to_lowercase() != text.to_lowercase() {
            return;
        }

        let position = assignment.start_position();
        let location = Location::new(
            self.ctx.relative_path.clone(),
            position.row + 1,
            position.column + 1,
        )
        .with_span(
            assignment.start_byte(),
            assignment.end_byte() - assignment.start_byte(),
        );

        self.violations.push(Violation::new(
            CODE,
            NAME,
            self.severity,
            location,
            format!(
                "{CODE} StrEnum '{class_name}' has member '{name}' with inconsistent casing: value is '{text}'"
            ),
        ));
    }
}

fn malformed(node: Node<'_>, field: &'static str) -> RuleError {
    RuleError::MalformedTree {
        kind: node.kind().to_owned(),
        line: node.start_position().row + 1,
        field,
    }
}
