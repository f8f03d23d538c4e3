//! # strenum-lint-rules
//!
//! Built-in lint rules for strenum-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SE001 | `str-enum-casing` | Requires `StrEnum` member names to match the casing of their string values |
//!
//! ## Usage
//!
//! ```ignore
//! use strenum_lint_core::Analyzer;
//! use strenum_lint_rules::StrEnumCasing;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(StrEnumCasing::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod casing;
mod classify;
mod detect;
mod plugin;
mod syntax;

pub use casing::{StrEnumCasing, CODE, NAME};
pub use classify::{classify, ValueClassification, AUTO_GENERATOR, ENUM_MODULE};
pub use detect::{is_string_backed_enum, STR_ENUM_TYPE};
pub use plugin::{PluginDiagnostic, StrEnumCasingPlugin};
pub use syntax::{base_refs, decode_string, BaseRef};

/// Re-export core types for convenience.
pub use strenum_lint_core::{Rule, Severity, Violation};
