//! Escaping for text and attribute values written by the serializer.
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Character data only needs the markup-significant characters replaced.
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">"]).expect("Failed to build XML text escaper")
});

// Attribute values are always written double-quoted.
static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\"", "\t", "\n", "\r"])
        .expect("Failed to build XML attribute escaper")
});

/// Escape character data.
///
/// # Examples
///
/// ```
/// use litchi_tables::common::xml::escape_text;
/// assert_eq!(escape_text("a & b"), "a &amp; b");
/// assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
/// ```
#[inline]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if TEXT_ESCAPER.is_match(s) {
        Cow::Owned(TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"]))
    } else {
        Cow::Borrowed(s)
    }
}

/// Escape a double-quoted attribute value.
///
/// Whitespace control characters are written as character references so
/// that attribute-value normalization does not alter them on re-read.
///
/// # Examples
///
/// ```
/// use litchi_tables::common::xml::escape_attr;
/// assert_eq!(escape_attr("<\"x\">"), "&lt;&quot;x&quot;&gt;");
/// assert_eq!(escape_attr("dxa"), "dxa");
/// ```
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if ATTR_ESCAPER.is_match(s) {
        Cow::Owned(ATTR_ESCAPER.replace_all(
            s,
            &["&amp;", "&lt;", "&gt;", "&quot;", "&#9;", "&#10;", "&#13;"],
        ))
    } else {
        Cow::Borrowed(s)
    }
}

/// Resolve the name inside an entity or character reference (`amp`, `#10`,
/// `#x1F600`) to its text.
///
/// Returns `None` for entities other than the five predefined ones and for
/// character references that do not denote a Unicode scalar value.
///
/// # Examples
///
/// ```
/// use litchi_tables::common::xml::resolve_reference;
/// assert_eq!(resolve_reference("lt"), Some('<'));
/// assert_eq!(resolve_reference("#65"), Some('A'));
/// assert_eq!(resolve_reference("#x41"), Some('A'));
/// assert_eq!(resolve_reference("nbsp"), None);
/// ```
pub fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => atoi_simd::parse::<u32>(code.as_bytes()).ok()?,
            };
            char::from_u32(value)
        },
    }
}
