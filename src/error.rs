//! Error handling for XML parsing
use super::{StrSpan, StringSpan};

/// A result type for XML parsing, which can be either a successful value or an error.
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// An error that occurred while parsing or writing a document.
#[derive(Debug)]
pub struct XmlError {
    /// The context of the error
    pub context: Box<ErrorContext>,

    /// The kind of error that occurred while parsing a document
    pub kind: XmlErrorKind,
}
impl XmlError {
    /// Creates a new `XmlError`
    #[must_use]
    pub fn new(kind: XmlErrorKind, context: ErrorContext) -> Self {
        Self {
            context: Box::new(context),
            kind,
        }
    }

    /// Returns the kind of error that occurred.
    #[must_use]
    pub fn kind(&self) -> &XmlErrorKind {
        &self.kind
    }
}
impl std::fmt::Display for XmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.context)?;

        for line in self.kind.to_string().lines() {
            writeln!(f, "= {line}")?;
        }
        Ok(())
    }
}
impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
impl From<std::io::Error> for XmlError {
    fn from(err: std::io::Error) -> Self {
        Self::new(XmlErrorKind::Io(err), ErrorContext::default())
    }
}

/// The kind of error that occurred while parsing a document.
#[derive(Debug, thiserror::Error)]
pub enum XmlErrorKind {
    /// A close tag was found while no element was open
    #[error("Unmatched close tag: {0}")]
    UnmatchedCloseTag(String),

    /// The document did not contain a single tag
    #[error("No root element found")]
    NoRootElement,

    /// A close tag did not match the open element (strict mode)
    #[error("Mismatched close tag: expected </{expected}>, found </{found}>")]
    MismatchedCloseTag {
        /// Name of the element that was open
        expected: String,

        /// Name found in the close tag
        found: String,
    },

    /// A tag in the document was not closed by the end of input (strict mode)
    #[error("Unclosed tag: {0}")]
    UnclosedTag(String),

    /// IO error occurred while writing a document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Context describing the error location in the source code.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Full source code of the document that was parsed, for row/col calculation.
    pub source: String,

    /// Position of the error in the source code.
    pub span: StringSpan,
}
impl ErrorContext {
    /// Creates a new `ErrorContext` with the given source, and span.
    #[must_use]
    pub fn new(source: &str, span: StrSpan<'_>) -> Self {
        Self {
            source: source.to_string(),
            span: span.into(),
        }
    }

    /// Returns the row and column of the error in the source code.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        self.span.position(&self.source)
    }
}
impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let span = self.span.as_ref();
        let line = span.split('\n').next().unwrap_or(span);

        if !line.is_empty() {
            writeln!(f, "| {line}")?;
        }

        if !self.source.is_empty() {
            let (row, col) = self.position();
            writeln!(f, "= At {row}:{col}")?;
        }
        Ok(())
    }
}
