use std::path::PathBuf;

/// One compiled source file: a path relative to the output root plus
/// the rendered content.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Relative path from the output directory (e.g. `com/example/model/Book.java`).
    pub path: PathBuf,
    /// Rendered file content.
    pub content: String,
}

impl SourceUnit {
    /// Create a new source unit.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
