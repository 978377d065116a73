use super::escape_quotes_into;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Opening tag, shortest inner content (newlines included), closing tag
static ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(<[^>]*>)(.*?)(</[^>]*>)").expect("element pattern is valid")
});

/// Escape quotes between every opening and closing tag pair.
///
/// Tags themselves are never rewritten. Attributes of elements nested inside
/// a matched pair are, which is why [`super::escape_hardened`] exists.
pub fn escape_baseline(text: &str) -> String {
    ELEMENT
        .replace_all(text, |caps: &Captures| {
            let mut out = String::with_capacity(caps[0].len() + 16);
            out.push_str(&caps[1]);
            escape_quotes_into(&mut out, &caps[2], Some('>'));
            out.push_str(&caps[3]);
            out
        })
        .into_owned()
}
