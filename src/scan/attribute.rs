use crate::StrSpan;

/// A `name="value"` pair as it appears in the source.
/// The value has not been entity-decoded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAttribute<'src> {
    /// The attribute name, trimmed of surrounding whitespace. May be empty.
    pub name: StrSpan<'src>,

    /// The text strictly between the quotes.
    pub value: StrSpan<'src>,
}

/// Extract the attributes from the raw attribute text of a tag, in source order.
///
/// Rules:
/// - A name is whatever sits between the end of the previous value and the last `=`
///   seen before a value's opening quote.
/// - A value opens on `"` or `'` and only closes on the same character, so
///   `'he said "hi"'` and `"it's ok"` both keep the other quote as content.
/// - `=` inside an open value is content.
/// - Trailing fragments with no quoted value (`disabled`, `a=b`) are dropped.
///
/// Duplicates are all returned; resolving them is up to the caller.
#[must_use]
pub fn scan_attributes(text: StrSpan<'_>) -> Vec<RawAttribute<'_>> {
    let mut attributes = vec![];

    let mut name_start = 0;
    let mut name = text.sub(0, 0);
    let mut quote: Option<(char, usize)> = None;

    for (i, c) in text.as_str().char_indices() {
        match (c, quote) {
            ('=', None) => {
                name = trimmed(text.sub(name_start, i));
            }

            ('"' | '\'', None) => {
                quote = Some((c, i));
            }

            ('"' | '\'', Some((open_char, open))) if open_char == c => {
                attributes.push(RawAttribute {
                    name,
                    value: text.sub(open + 1, i),
                });

                quote = None;
                name_start = i + 1;
                name = text.sub(name_start, name_start);
            }

            _ => {}
        }
    }

    let rest = text.sub(name_start, text.len());
    if !rest.as_str().trim().is_empty() {
        tracing::trace!("Dropping trailing attribute text `{rest}`");
    }

    attributes
}

/// Trim whitespace from both ends of a span, keeping its offset in sync.
fn trimmed(span: StrSpan<'_>) -> StrSpan<'_> {
    let text = span.as_str();
    let start = text.len() - text.trim_start().len();
    let end = text.trim_end().len().max(start);
    span.sub(start, end)
}
