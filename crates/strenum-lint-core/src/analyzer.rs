//! Core analyzer for orchestrating lint execution over Python files.

use crate::config::Config;
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox, RuleError};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to construct the Python parser.
    #[error("Parser error: {0}")]
    Parser(String),

    /// Error parsing a Python source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// A rule hit a structurally invalid tree.
    #[error("Rule error in {path}: {source}")]
    Rule {
        /// Path to the file being checked.
        path: PathBuf,
        /// Underlying rule error.
        source: RuleError,
    },

    /// File discovery error.
    #[error("Discovery error: {0}")]
    Discovery(#[from] ignore::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Parses Python source text into a Tree-sitter tree.
///
/// # Errors
///
/// Returns [`AnalyzerError::Parser`] if the Python grammar cannot be
/// loaded or the parser yields no tree.
pub fn parse_python(source: &str) -> Result<tree_sitter::Tree, AnalyzerError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| AnalyzerError::Parser(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| AnalyzerError::Parser("parser produced no tree".to_string()))
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root path to analyze (directory or single file).
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a per-file rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-file rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether a file with syntax errors aborts the run (default: false,
    /// such files are skipped with a warning).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            config: self.config.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance. Each analyzer
/// holds no cross-file state, so callers may run one instance per file in
/// parallel if they wish.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root path being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// Files are visited in sorted path order; within each file, violations
    /// keep the order the rule emitted them in. No re-sorting happens here:
    /// the diagnostic sequence is part of the rule contract.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails, a rule reports a malformed
    /// tree, or (with `fail_on_parse_error`) a file cannot be parsed.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns its violations.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let tree = parse_python(&content)?;

        if tree.root_node().has_error() {
            return Err(AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: "source contains syntax errors".to_string(),
            });
        }

        let root = if self.root.is_file() {
            self.root.parent().unwrap_or(&self.root)
        } else {
            &self.root
        };
        let ctx = FileContext::new(path, &content, root);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_violations =
                rule.check(&ctx, &tree)
                    .map_err(|source| AnalyzerError::Rule {
                        path: path.to_path_buf(),
                        source,
                    })?;
            let rule_violations = self.apply_severity_override(rule.name(), rule_violations);
            violations.extend(rule_violations);
        }

        Ok(violations)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Discovers all Python source files to analyze.
    ///
    /// A file root yields exactly that file; a directory root is walked
    /// gitignore-aware.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("py") {
                continue;
            }
            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/__pycache__/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builder_defaults() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/__pycache__/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.root().exists());
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn exclude_patterns_match() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/__pycache__/**")
            .exclude("**/.venv/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("/foo/__pycache__/mod.py")));
        assert!(analyzer.should_exclude(Path::new("/foo/.venv/lib/site.py")));
        assert!(!analyzer.should_exclude(Path::new("/foo/src/models.py")));
    }

    #[test]
    fn discovers_only_python_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("a.py"), "x = 1\n").expect("write");
        fs::write(dir.path().join("b.txt"), "not python\n").expect("write");
        fs::create_dir(dir.path().join("sub")).expect("mkdir");
        fs::write(dir.path().join("sub/c.py"), "y = 2\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(dir.path())
            .build()
            .expect("build");
        let files = analyzer.discover_files().expect("discover");

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "py")));
    }

    #[test]
    fn file_root_yields_single_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("only.py");
        fs::write(&file, "x = 1\n").expect("write");

        let analyzer = Analyzer::builder().root(&file).build().expect("build");
        let files = analyzer.discover_files().expect("discover");
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn syntax_error_is_skipped_by_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("bad.py"), "class (:::\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(dir.path())
            .build()
            .expect("build");
        let result = analyzer.analyze().expect("analyze");
        assert_eq!(result.files_checked, 0);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn syntax_error_fails_when_configured() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("bad.py"), "class (:::\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(dir.path())
            .fail_on_parse_error(true)
            .build()
            .expect("build");
        let err = analyzer.analyze().expect_err("should fail");
        assert!(matches!(err, AnalyzerError::Parse { .. }));
    }

    #[test]
    fn parse_python_produces_tree() {
        let tree = parse_python("x = 1\n").expect("parse");
        assert_eq!(tree.root_node().kind(), "module");
        assert!(!tree.root_node().has_error());
    }
}
