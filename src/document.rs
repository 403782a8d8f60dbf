use crate::{
    Element, StrSpan,
    entities::{EntityDecoder, HtmlEntityDecoder},
    error::XmlResult,
    error::XmlErrorKind,
    scan::{ScannedTag, TagKind, scan_attributes, scan_tag},
};

/// Controls how forgiving the parser is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Reject close tags that do not match the open element, and elements left open
    /// at the end of the input.
    ///
    /// When off (the default), a close tag closes whatever element is open, and open
    /// elements are closed silently at the end of the input.
    pub strict: bool,

    /// Trim surrounding whitespace from leaf text and attribute values once their
    /// entities are decoded. On by default.
    pub trim_values: bool,
}
impl ParserOptions {
    /// The default, lenient options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict mode.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set whether values are trimmed.
    #[must_use]
    pub fn trim_values(mut self, trim_values: bool) -> Self {
        self.trim_values = trim_values;
        self
    }
}
impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict: false,
            trim_values: true,
        }
    }
}

/// Builds an [`Element`] tree from XML text in a single left to right pass.
///
/// The parser is lenient, not validating:
/// - Comments, CDATA, processing instructions, and declarations are not understood;
///   anything between `<` and `>` is treated as a tag.
/// - Text is only kept for elements that end up with no children.
/// - Elements after the root element is closed are dropped.
/// - The only error in the default mode is a close tag with nothing open
///   (or a document with no tags at all).
///
/// Leaf text and attribute values are passed through the parser's [`EntityDecoder`].
#[derive(Debug, Clone, Default)]
pub struct Parser<D = HtmlEntityDecoder> {
    options: ParserOptions,
    decoder: D,
}
impl Parser {
    /// Creates a lenient parser that decodes HTML entities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: ParserOptions::default(),
            decoder: HtmlEntityDecoder,
        }
    }
}
impl<D: EntityDecoder> Parser<D> {
    /// Replace the entity decoder used for text and attribute values.
    #[must_use]
    pub fn with_decoder<E: EntityDecoder>(self, decoder: E) -> Parser<E> {
        Parser {
            options: self.options,
            decoder,
        }
    }

    /// Replace the parser options.
    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options in use.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a document and return its root element.
    ///
    /// # Errors
    /// - [`XmlErrorKind::UnmatchedCloseTag`] if a close tag appears while no element is open.
    /// - [`XmlErrorKind::NoRootElement`] if the document holds no tag.
    /// - In strict mode, [`XmlErrorKind::MismatchedCloseTag`] and [`XmlErrorKind::UnclosedTag`].
    ///
    /// Nothing of the tree is returned on error.
    ///
    /// # Example
    /// ```rust
    /// use tagtree::Parser;
    ///
    /// let root = Parser::new().parse("<a><b>hi</b></a>").unwrap();
    /// assert_eq!(root.name, "a");
    /// assert_eq!(root.children[0].text, "hi");
    /// ```
    #[tracing::instrument(skip_all, fields(len = src.len()))]
    pub fn parse(&self, src: &str) -> XmlResult<Element> {
        let mut stack: Vec<OpenElement<'_>> = vec![];
        let mut root = None;
        let mut tag_start = None;

        for (i, c) in src.char_indices() {
            match c {
                '<' => tag_start = Some(i),

                '>' => {
                    let Some(start) = tag_start.take() else {
                        tracing::debug!("Ignoring stray `>` at byte {i}");
                        continue;
                    };

                    let tag = StrSpan::slice(src, start, i + 1);
                    let scanned = scan_tag(tag);
                    tracing::trace!(kind = ?scanned.kind, name = %scanned.name, "tag");

                    match scanned.kind {
                        TagKind::Close => {
                            let Some(mut open) = stack.pop() else {
                                tracing::debug!("Close tag {tag} with no open element");
                                bail!(
                                    src,
                                    tag,
                                    XmlErrorKind::UnmatchedCloseTag(scanned.name.to_string())
                                );
                            };

                            if open.element.name != scanned.name.as_str() {
                                if self.options.strict {
                                    bail!(
                                        src,
                                        tag,
                                        XmlErrorKind::MismatchedCloseTag {
                                            expected: std::mem::take(&mut open.element.name),
                                            found: scanned.name.to_string(),
                                        }
                                    );
                                }

                                tracing::debug!(
                                    "Closing <{}> with {tag}",
                                    open.element.name
                                );
                            }

                            if open.element.children.is_empty() {
                                let text = StrSpan::slice(src, open.content_start, start);
                                open.element.text = self.decode_value(text.as_str());
                            }

                            attach(open.element, &mut stack, &mut root);
                        }

                        TagKind::Open => {
                            stack.push(OpenElement {
                                element: self.element(&scanned),
                                tag,
                                content_start: i + 1,
                            });
                        }

                        TagKind::SelfClosing => {
                            attach(self.element(&scanned), &mut stack, &mut root);
                        }
                    }
                }

                _ => {}
            }
        }

        if self.options.strict {
            if let Some(open) = stack.last() {
                bail!(
                    src,
                    open.tag,
                    XmlErrorKind::UnclosedTag(open.element.name.clone())
                );
            }
        }

        // Whatever is still open is closed here, without text
        while let Some(open) = stack.pop() {
            tracing::debug!("Unclosed tag {} at end of input", open.tag);
            attach(open.element, &mut stack, &mut root);
        }

        match root {
            Some(root) => Ok(root),
            None => bail!(src, StrSpan::slice(src, 0, 0), XmlErrorKind::NoRootElement),
        }
    }

    /// Create a new element from a scanned open or self-closing tag.
    fn element(&self, tag: &ScannedTag<'_>) -> Element {
        let mut element = Element::new(tag.name.as_str());
        for attribute in scan_attributes(tag.attributes) {
            let value = self.decode_value(attribute.value.as_str());
            element.attributes.insert(attribute.name.as_str(), value);
        }
        element
    }

    /// Decoding comes first, so whitespace written as a reference is trimmed too.
    fn decode_value(&self, raw: &str) -> String {
        let value = self.decoder.decode(raw);
        if self.options.trim_values {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                return trimmed.to_string();
            }
        }
        value
    }
}

/// An element whose close tag has not been seen yet.
struct OpenElement<'src> {
    element: Element,

    /// The open tag, for error reporting.
    tag: StrSpan<'src>,

    /// Byte offset just past the open tag; leaf text starts here.
    content_start: usize,
}

/// Hand a finished element to the open element above it.
/// With nothing open, it becomes the root, or is dropped if the root already exists.
fn attach(element: Element, stack: &mut [OpenElement<'_>], root: &mut Option<Element>) {
    if let Some(parent) = stack.last_mut() {
        parent.element.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        tracing::debug!("Dropping <{}> found after the root element", element.name);
    }
}
