//! Detection of string-backed enumeration classes.

use crate::classify::ENUM_MODULE;
use crate::syntax::BaseRef;

/// Short name of the string-backed enumeration base type.
pub const STR_ENUM_TYPE: &str = "StrEnum";

/// Decides whether a class with the given base references is a
/// string-backed enumeration.
///
/// Matches a bare `StrEnum` or a qualified `enum.StrEnum` anywhere in the
/// base list; additional unrelated bases do not suppress detection.
/// Aliased imports are not resolved, and inheritance through intermediate
/// classes defined elsewhere is not followed: matching is purely on the
/// syntactically visible names.
#[must_use]
pub fn is_string_backed_enum(bases: &[BaseRef]) -> bool {
    bases.iter().any(|base| match base {
        BaseRef::Bare(name) => name == STR_ENUM_TYPE,
        BaseRef::Qualified(prefix, name) => prefix == ENUM_MODULE && name == STR_ENUM_TYPE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(name: &str) -> BaseRef {
        BaseRef::Bare(name.to_owned())
    }

    fn qualified(prefix: &str, name: &str) -> BaseRef {
        BaseRef::Qualified(prefix.to_owned(), name.to_owned())
    }

    #[test]
    fn bare_str_enum_matches() {
        assert!(is_string_backed_enum(&[bare("StrEnum")]));
    }

    #[test]
    fn qualified_str_enum_matches() {
        assert!(is_string_backed_enum(&[qualified("enum", "StrEnum")]));
    }

    #[test]
    fn str_enum_anywhere_in_base_list_matches() {
        assert!(is_string_backed_enum(&[
            bare("BaseClass"),
            bare("StrEnum"),
            bare("Mixin"),
        ]));
    }

    #[test]
    fn unrelated_bases_do_not_match() {
        assert!(!is_string_backed_enum(&[bare("Enum")]));
        assert!(!is_string_backed_enum(&[qualified("enum", "Enum")]));
        assert!(!is_string_backed_enum(&[]));
    }

    #[test]
    fn wrong_module_prefix_does_not_match() {
        assert!(!is_string_backed_enum(&[qualified("other", "StrEnum")]));
    }

    #[test]
    fn aliased_name_is_not_resolved() {
        // `from enum import StrEnum as S; class C(S)` stays undetected.
        assert!(!is_string_backed_enum(&[bare("S")]));
    }
}
