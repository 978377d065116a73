use super::escape_quotes_into;
use super::scanner::{SpanKind, scan};
use super::shield::shield;
use tracing::debug;

/// Escape quotes in element body text only.
///
/// Code samples written as `` {`...`} `` are shielded first and restored
/// unchanged. Attribute values, tag syntax, expression containers and code
/// outside markup are never rewritten.
pub fn escape_hardened(text: &str) -> String {
    let (shielded, table) = shield(text);
    if !table.is_empty() {
        debug!("Shielded {} code block(s)", table.len());
    }

    let mut out = String::with_capacity(shielded.len() + shielded.len() / 16);
    for span in scan(&shielded) {
        let part = span.text(&shielded);
        if span.kind == SpanKind::InTextContent {
            let prev = shielded[..span.start].chars().next_back();
            escape_quotes_into(&mut out, part, prev);
        } else {
            out.push_str(part);
        }
    }

    table.restore(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_content() {
        let input = "<div>{`const x = \"a\";`}<span>Say 'hi'</span></div>";
        assert_eq!(
            escape_hardened(input),
            "<div>{`const x = \"a\";`}<span>Say &apos;hi&apos;</span></div>"
        );
    }

    #[test]
    fn test_attribute_delimiters_kept() {
        let input = r#"<div class="foo"><p className='bar'>It's</p></div>"#;
        assert_eq!(
            escape_hardened(input),
            r#"<div class="foo"><p className='bar'>It&apos;s</p></div>"#
        );
    }

    #[test]
    fn test_interpolated_expression_kept() {
        let input = r#"<p>{"quoted"} and "prose"</p>"#;
        assert_eq!(
            escape_hardened(input),
            r#"<p>{"quoted"} and &quot;prose&quot;</p>"#
        );
    }

    #[test]
    fn test_existing_entities_not_reencoded() {
        let input = "<p>It&apos;s &quot;done&quot;</p>";
        assert_eq!(escape_hardened(input), input);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_hardened(""), "");
    }
}
