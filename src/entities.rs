//! Entity decoding and encoding of text and attribute values.
//!
//! The parser never interprets entities itself; it hands every raw leaf text and
//! attribute value to an [`EntityDecoder`]. The default is [`HtmlEntityDecoder`],
//! and [`PassThrough`] can be used where values should be kept verbatim.
use htmlentity::entity::ICodedDataTrait;
use htmlentity::entity::{CharacterSet, EncodeType, decode, encode};

/// Converts a raw value from the document into its literal text.
pub trait EntityDecoder {
    /// Decode all entity references in `raw`.
    fn decode(&self, raw: &str) -> String;
}

impl<F> EntityDecoder for F
where
    F: Fn(&str) -> String,
{
    fn decode(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Decodes named HTML entities and numeric character references:
/// `&lt;b&gt; &amp; &#x41;` becomes `<b> & A`
///
/// Input that cannot be decoded is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntityDecoder;
impl EntityDecoder for HtmlEntityDecoder {
    fn decode(&self, raw: &str) -> String {
        if !raw.contains('&') {
            return raw.to_string();
        }

        match decode(raw.as_bytes()).to_string() {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Could not decode entities in `{raw}`: {e}");
                raw.to_string()
            }
        }
    }
}

/// Leaves values untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;
impl EntityDecoder for PassThrough {
    fn decode(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Escape a value so it can be written back into a document and parsed again.
///
/// # Errors
/// Returns an error if the encoded bytes are not valid UTF-8.
pub fn encode_entities(input: &str) -> std::io::Result<String> {
    if !input.contains(['<', '>', '&', '"', '\'']) && input.is_ascii() {
        return Ok(input.to_string());
    }

    encode(
        input.as_bytes(),
        &EncodeType::NamedOrHex,
        &CharacterSet::Html,
    )
    .to_string()
    .map_err(|e| std::io::Error::other(e.to_string()))
}
