//! # strenum-lint-core
//!
//! Core framework for linting Python `StrEnum` definitions, built on
//! Tree-sitter parsing.
//!
//! This crate provides the foundational traits and types for the
//! strenum-lint rule crates. It includes:
//!
//! - [`Rule`] trait for per-file tree-based rules
//! - [`Analyzer`] for file discovery, parsing, and lint execution
//! - [`Violation`] for representing lint findings
//! - [`Config`] for TOML-based rule enablement and severity overrides
//!
//! ## Example
//!
//! ```ignore
//! use strenum_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub use analyzer::{parse_python, Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox, RuleError};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
