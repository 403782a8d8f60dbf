//! A small, lenient XML to element tree parser.
//!
//! The parser makes one left to right pass over the text. Every `<...>` becomes a tag,
//! which is split into a name and attributes, and an explicit stack of open elements
//! assembles the tree. Leaf text and attribute values are entity decoded on the way in,
//! and encoded again when a tree is written back out.
//!
//! It is deliberately forgiving: malformed input produces a best-effort tree rather than
//! an error. See [`Parser`] for the exact rules, and [`ParserOptions::strict`] for a
//! stricter mode.
//!
//! # Example
//! ```rust
//! let root = tagtree::parse(r#"<shelf room="2"><book>Dune</book><book/></shelf>"#).unwrap();
//!
//! assert_eq!(root.attribute("room"), Some("2"));
//! assert_eq!(root.children.len(), 2);
//! assert_eq!(root.children[0].text, "Dune");
//!
//! assert_eq!(
//!     root.render(true).unwrap(),
//!     "<shelf room=\"2\">\n\t<book>Dune</book>\n\t<book></book>\n</shelf>"
//! );
//! ```
#![warn(missing_docs)]

/// Return early with an `XmlError` of the given kind, pointing at `span` in `src`.
macro_rules! bail {
    ($src:expr, $span:expr, $kind:expr) => {
        return Err($crate::error::XmlError::new(
            $kind,
            $crate::error::ErrorContext::new($src, $span),
        ))
    };
}

pub mod entities;
pub mod error;
pub mod scan;
pub mod to_xml;

mod document;
pub use document::{Parser, ParserOptions};

mod node;
pub use node::{Attributes, Element};

mod strspan;
pub use strspan::{StrSpan, StringSpan};

pub use entities::{EntityDecoder, HtmlEntityDecoder, PassThrough};
pub use error::{XmlError, XmlErrorKind, XmlResult};

/// Parse a document with the default, lenient parser.
///
/// Returns `None` if a close tag appears while no element is open, or if the text
/// contains no tag at all. Use [`Parser::parse`] to find out why parsing failed.
///
/// ```rust
/// assert!(tagtree::parse("<a><b>hi</b></a>").is_some());
/// assert!(tagtree::parse("</a>").is_none());
/// ```
#[must_use]
pub fn parse(text: &str) -> Option<Element> {
    Parser::new().parse(text).ok()
}
