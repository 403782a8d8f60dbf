//! The element tree produced by the parser.
mod attributes;
pub use attributes::*;

mod element;
pub use element::*;
