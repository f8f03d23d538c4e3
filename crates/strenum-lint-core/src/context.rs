//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Carries the raw source alongside path metadata so rules can decode node
/// text and report locations relative to the checked root.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the checked root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Calculates the byte offset for a 1-indexed line and column.
    ///
    /// Returns the offset of the start of the file's last line if the
    /// position is out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.content.lines().enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len() + 1; // +1 for newline
        }

        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_strips_root() {
        let ctx = FileContext::new(
            Path::new("/project/src/models.py"),
            "",
            Path::new("/project"),
        );
        assert_eq!(ctx.relative_path, PathBuf::from("src/models.py"));
    }

    #[test]
    fn relative_path_falls_back_to_full_path() {
        let ctx = FileContext::new(Path::new("/elsewhere/models.py"), "", Path::new("/project"));
        assert_eq!(ctx.relative_path, PathBuf::from("/elsewhere/models.py"));
    }

    #[test]
    fn offset_calculation() {
        let content = "line1\nline2\nline3";
        let ctx = FileContext::new(Path::new("t.py"), content, Path::new("."));

        assert_eq!(ctx.offset_for(1, 1), 0);
        assert_eq!(ctx.offset_for(2, 1), 6);
        assert_eq!(ctx.offset_for(2, 3), 8);
    }
}
