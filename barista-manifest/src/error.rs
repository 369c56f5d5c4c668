use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for barista-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the schema file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema JSON")]
    #[diagnostic(code(barista::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema is missing required key '{key}'")]
    #[diagnostic(
        code(barista::malformed_schema),
        help("a schema needs top-level 'entities' and 'configurationVariables' objects")
    )]
    MalformedSchema {
        #[source_code]
        src: NamedSource<String>,
        key: &'static str,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_of(src, source.line(), source.column());
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a malformed-schema error for a missing top-level key
    pub fn malformed(key: &'static str, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::MalformedSchema {
            src: NamedSource::new(filename, src.to_string()),
            key,
        })
    }
}

/// Compute a one-byte span at the given 1-based line/column.
///
/// serde_json reports locations as line/column rather than byte
/// offsets, so the offset is recovered by walking the source.
fn span_of(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let mut offset = 0usize;
    for (i, l) in src.split('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(l.len());
            return Some(SourceSpan::from(offset + col));
        }
        offset += l.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_of_first_line() {
        assert_eq!(span_of("abc", 1, 2), Some(SourceSpan::from(1)));
    }

    #[test]
    fn test_span_of_later_line() {
        // "ab\ncd" -> line 2, column 1 is byte 3
        assert_eq!(span_of("ab\ncd", 2, 1), Some(SourceSpan::from(3)));
    }

    #[test]
    fn test_span_of_out_of_range() {
        assert_eq!(span_of("ab", 0, 1), None);
        assert_eq!(span_of("ab", 5, 1), None);
    }
}
