//! Classification of member value expressions.

use tree_sitter::Node;

use crate::syntax::{decode_string, node_text};

/// Name of the enum module whose qualified references are recognized.
pub const ENUM_MODULE: &str = "enum";

/// Name of the auto-value generator function.
pub const AUTO_GENERATOR: &str = "auto";

/// Syntactic category of a member's assigned value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueClassification {
    /// Produced by the recognized auto-value generator (`auto()` or
    /// `enum.auto()`); arguments are never inspected.
    Auto,
    /// Exactly one direct string-literal token, carrying its decoded text.
    Literal(String),
    /// Any other expression shape: concatenation, f-strings, arbitrary
    /// calls, numeric literals, attribute access, and so on.
    Opaque,
}

/// Classifies a single assigned expression node.
///
/// Purely syntactic and total: any shape not explicitly recognized falls
/// through to [`ValueClassification::Opaque`]. No folding is performed, so
/// `"A" + "A"` and `"A" "A"` are both opaque even though they reduce to a
/// string constant.
#[must_use]
pub fn classify(expr: Node<'_>, src: &[u8]) -> ValueClassification {
    match expr.kind() {
        "call" => {
            if expr
                .child_by_field_name("function")
                .is_some_and(|callee| is_auto_callee(callee, src))
            {
                ValueClassification::Auto
            } else {
                ValueClassification::Opaque
            }
        }
        "string" => decode_string(expr, src)
            .map_or(ValueClassification::Opaque, ValueClassification::Literal),
        _ => ValueClassification::Opaque,
    }
}

/// Whether a callee node is `auto` or `enum.auto`.
fn is_auto_callee(callee: Node<'_>, src: &[u8]) -> bool {
    match callee.kind() {
        "identifier" => node_text(callee, src) == AUTO_GENERATOR,
        "attribute" => {
            let object = callee.child_by_field_name("object");
            let attribute = callee.child_by_field_name("attribute");
            match (object, attribute) {
                (Some(object), Some(attribute)) => {
                    object.kind() == "identifier"
                        && node_text(object, src) == ENUM_MODULE
                        && node_text(attribute, src) == AUTO_GENERATOR
                }
                _ => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strenum_lint_core::parse_python;

    fn classify_expr(src: &str) -> ValueClassification {
        let tree = parse_python(src).expect("parse");
        let expr = tree
            .root_node()
            .named_child(0)
            .and_then(|s| s.named_child(0))
            .expect("expression");
        classify(expr, src.as_bytes())
    }

    #[test]
    fn bare_auto_call() {
        assert_eq!(classify_expr("auto()"), ValueClassification::Auto);
    }

    #[test]
    fn qualified_auto_call() {
        assert_eq!(classify_expr("enum.auto()"), ValueClassification::Auto);
    }

    #[test]
    fn auto_arguments_are_not_inspected() {
        assert_eq!(classify_expr("auto(1, x=2)"), ValueClassification::Auto);
    }

    #[test]
    fn other_calls_are_opaque() {
        assert_eq!(classify_expr("int()"), ValueClassification::Opaque);
        assert_eq!(classify_expr("other.auto()"), ValueClassification::Opaque);
        assert_eq!(classify_expr("enum.unique()"), ValueClassification::Opaque);
    }

    #[test]
    fn direct_string_is_literal() {
        assert_eq!(
            classify_expr(r#""RED""#),
            ValueClassification::Literal("RED".to_owned())
        );
    }

    #[test]
    fn composed_strings_are_opaque() {
        assert_eq!(classify_expr(r#""A" + "A""#), ValueClassification::Opaque);
        assert_eq!(classify_expr(r#""A" "A""#), ValueClassification::Opaque);
        assert_eq!(classify_expr(r#"f"B""#), ValueClassification::Opaque);
        assert_eq!(classify_expr(r#"f"w{orld}""#), ValueClassification::Opaque);
    }

    #[test]
    fn non_string_values_are_opaque() {
        assert_eq!(classify_expr("1"), ValueClassification::Opaque);
        assert_eq!(classify_expr("name"), ValueClassification::Opaque);
        assert_eq!(classify_expr("enum.auto"), ValueClassification::Opaque);
        assert_eq!(classify_expr(r#"b"A""#), ValueClassification::Opaque);
    }
}
