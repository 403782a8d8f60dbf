use crate::StrSpan;

/// The role a tag plays in the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name ...>`
    Open,

    /// `<name .../>`
    SelfClosing,

    /// `</name>`
    Close,
}

/// A tag split into its name and the raw text holding its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedTag<'src> {
    /// The kind of tag.
    pub kind: TagKind,

    /// The element name. May be empty for malformed tags.
    pub name: StrSpan<'src>,

    /// Everything between the name and the closing delimiter, unparsed.
    /// Starts with the space that ended the name, or is empty.
    pub attributes: StrSpan<'src>,
}

/// Split a complete tag, from `<` to `>` inclusive, into kind, name, and attribute text.
///
/// The name ends at the first space; everything from there up to the closing
/// `>` (or `/>`) is the attribute span. Never panics, even on tags that do not
/// respect the `<...>` wrapper.
#[must_use]
pub fn scan_tag(tag: StrSpan<'_>) -> ScannedTag<'_> {
    let text = tag.as_str();

    let (kind, name_start, delimiter_len) = if text.starts_with("</") {
        (TagKind::Close, 2, 1)
    } else if text.ends_with("/>") {
        (TagKind::SelfClosing, 1, 2)
    } else {
        (TagKind::Open, 1, 1)
    };

    let body_end = text.len().saturating_sub(delimiter_len).max(name_start);
    let name_end = text
        .get(name_start..body_end)
        .and_then(|body| body.find(' '))
        .map_or(body_end, |space| name_start + space);

    ScannedTag {
        kind,
        name: tag.sub(name_start, name_end),
        attributes: tag.sub(name_end, body_end),
    }
}
