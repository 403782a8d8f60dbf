//! Micro-scanners that split a single tag into its parts.
//!
//! Both scanners are lenient: they never fail, and malformed input yields a
//! best-effort result (possibly an empty name, or no attributes at all).
mod tag;
pub use tag::*;

mod attribute;
pub use attribute::*;
