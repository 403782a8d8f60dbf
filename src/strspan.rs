/// A span of a string in the input XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrSpan<'a> {
    /// The string slice.
    pub text: &'a str,

    /// The byte offset of the span in the input XML.
    pub start: usize,
}
impl<'a> StrSpan<'a> {
    /// Create a new span over `text`, located at byte offset `start` of the source.
    #[must_use]
    pub fn new(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }

    /// Slice `src[start..end]` as a span.
    /// Out of range or non-boundary offsets produce an empty span at `start`.
    #[must_use]
    pub fn slice(src: &'a str, start: usize, end: usize) -> Self {
        Self {
            text: src.get(start..end).unwrap_or_default(),
            start,
        }
    }

    /// Returns a sub-span of this span, using offsets relative to the span.
    /// Out of range or non-boundary offsets produce an empty span.
    #[must_use]
    pub fn sub(&self, start: usize, end: usize) -> Self {
        Self {
            text: self.text.get(start..end).unwrap_or_default(),
            start: self.start + start,
        }
    }

    /// Returns the length of the span, in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Return true if len == 0
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the start position of the span in the input XML.
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset just past the end of the span.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    /// Returns this span as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Calculates the row and column of the span in the input XML.
    /// Columns are counted in characters, not bytes.
    ///
    /// Warning: This is an expensive operation, and should be used for error reporting only.
    #[must_use]
    pub fn position(&self, source: &str) -> (usize, usize) {
        Self::position_in_text(self.start, source)
    }

    pub(crate) fn position_in_text(start: usize, source: &str) -> (usize, usize) {
        let mut row = 1;
        let mut col = 1;
        for (i, c) in source.char_indices() {
            if i >= start {
                break;
            }
            if c == '\n' {
                row += 1;
                col = 1;
            } else {
                col += 1;
            }
        }

        (row, col)
    }
}

impl<'a> From<&'a str> for StrSpan<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        StrSpan { text, start: 0 }
    }
}

impl AsRef<str> for StrSpan<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.text
    }
}
impl std::fmt::Display for StrSpan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
impl PartialEq<str> for StrSpan<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}
impl PartialEq<&str> for StrSpan<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
impl PartialEq<StrSpan<'_>> for &str {
    fn eq(&self, other: &StrSpan<'_>) -> bool {
        *self == other.text
    }
}

/// Owned variant of `StrSpan`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StringSpan {
    /// The string slice.
    pub text: String,

    /// The byte offset of the span in the input XML.
    pub start: usize,
}
impl StringSpan {
    /// Create a new owned span
    #[must_use]
    pub fn new(text: String, start: usize) -> Self {
        StringSpan { text, start }
    }

    /// Calculates the row and column of the span in the input XML.
    ///
    /// Warning: This is an expensive operation, and should be used for error reporting only.
    #[must_use]
    pub fn position(&self, source: &str) -> (usize, usize) {
        StrSpan::position_in_text(self.start, source)
    }

    /// Returns the start position of the span in the input XML.
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns this span as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
impl From<StrSpan<'_>> for StringSpan {
    #[inline]
    fn from(span: StrSpan<'_>) -> StringSpan {
        StringSpan {
            text: span.text.to_string(),
            start: span.start,
        }
    }
}
impl AsRef<str> for StringSpan {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.text
    }
}
impl std::fmt::Display for StringSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
