use crate::scan::cursor::Cursor;

use super::types::InlineNode;

/// Parses a literal text run into a sequence of [`InlineNode`]s.
///
/// At each position the patterns are tried in priority order: image literal,
/// display math, inline math, bold, then italic. A character matching no
/// pattern is emitted as literal text and the cursor advances by one.
/// Greedy left-to-right, no backtracking, no nesting.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = Vec::new();
    let mut text = String::new();

    while !cur.eof() {
        let rest = cur.rest();
        let matched = match cur.peek() {
            Some(b'!') => try_image(rest),
            Some(b'$') => try_display_math(rest).or_else(|| try_inline_math(rest)),
            Some(b'*') => try_bold(rest).or_else(|| try_italic(rest, '*')),
            Some(b'_') => try_italic(rest, '_'),
            _ => None,
        };
        match matched {
            Some((node, consumed)) => {
                flush_text(&mut out, &mut text);
                out.push(node);
                cur.bump_n(consumed);
            }
            None => {
                if let Some(ch) = cur.bump_char() {
                    text.push(ch);
                }
            }
        }
    }

    flush_text(&mut out, &mut text);
    out
}

/// Matches `![alt](url)` at the start of the run and returns the alt/url pair
/// only when the literal spans the entire run. Used by the block structurer
/// to detect standalone image paragraphs.
pub(crate) fn standalone_image(s: &str) -> Option<(String, String)> {
    match try_image(s)? {
        (InlineNode::Image { alt, url }, consumed) if consumed == s.len() => Some((alt, url)),
        _ => None,
    }
}

fn flush_text(out: &mut Vec<InlineNode>, text: &mut String) {
    if !text.is_empty() {
        out.push(InlineNode::Text(std::mem::take(text)));
    }
}

/// `![alt](url)`. The alt may be empty, the url may not.
fn try_image(rest: &str) -> Option<(InlineNode, usize)> {
    let after = rest.strip_prefix("![")?;
    let alt_end = after.find(']')?;
    let after_alt = after[alt_end + 1..].strip_prefix('(')?;
    let url_end = after_alt.find(')')?;
    if url_end == 0 {
        return None;
    }
    Some((
        InlineNode::Image {
            alt: after[..alt_end].to_string(),
            url: after_alt[..url_end].to_string(),
        },
        2 + alt_end + 2 + url_end + 1,
    ))
}

fn try_display_math(rest: &str) -> Option<(InlineNode, usize)> {
    let after = rest.strip_prefix("$$")?;
    let end = after.find("$$")?;
    Some((
        InlineNode::Math {
            expr: after[..end].trim().to_string(),
            display: true,
        },
        2 + end + 2,
    ))
}

/// `$expr$`: a single non-`$` run, at least one character.
fn try_inline_math(rest: &str) -> Option<(InlineNode, usize)> {
    let after = rest.strip_prefix('$')?;
    let end = after.find('$')?;
    if end == 0 {
        return None;
    }
    Some((
        InlineNode::Math {
            expr: after[..end].to_string(),
            display: false,
        },
        1 + end + 1,
    ))
}

fn try_bold(rest: &str) -> Option<(InlineNode, usize)> {
    let after = rest.strip_prefix("**")?;
    let end = after.find('*')?;
    if end == 0 || !after[end..].starts_with("**") {
        return None;
    }
    Some((InlineNode::Bold(after[..end].to_string()), 2 + end + 2))
}

fn try_italic(rest: &str, marker: char) -> Option<(InlineNode, usize)> {
    let after = rest.strip_prefix(marker)?;
    let end = after.find(marker)?;
    if end == 0 {
        return None;
    }
    Some((InlineNode::Italic(after[..end].to_string()), 1 + end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineNode {
        InlineNode::Text(s.to_string())
    }

    #[test]
    fn plain_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn bold_and_italic_in_order() {
        assert_eq!(
            parse_inline("**bold** and *italic*"),
            vec![
                InlineNode::Bold("bold".to_string()),
                text(" and "),
                InlineNode::Italic("italic".to_string()),
            ]
        );
    }

    #[test]
    fn underscore_italic() {
        assert_eq!(
            parse_inline("_emphasis_"),
            vec![InlineNode::Italic("emphasis".to_string())]
        );
    }

    #[test]
    fn inline_math() {
        assert_eq!(
            parse_inline(r"the set $\mathbb{N}$"),
            vec![
                text("the set "),
                InlineNode::Math {
                    expr: r"\mathbb{N}".to_string(),
                    display: false,
                },
            ]
        );
    }

    #[test]
    fn display_math_takes_priority_over_inline() {
        assert_eq!(
            parse_inline("$$ e^{i\\pi} = -1 $$"),
            vec![InlineNode::Math {
                expr: "e^{i\\pi} = -1".to_string(),
                display: true,
            }]
        );
    }

    #[test]
    fn unclosed_math_is_literal() {
        assert_eq!(parse_inline("cost is $5 today"), vec![text("cost is $5 today")]);
    }

    #[test]
    fn image_literal() {
        assert_eq!(
            parse_inline("see ![a graph](https://example.com/g.png) here"),
            vec![
                text("see "),
                InlineNode::Image {
                    alt: "a graph".to_string(),
                    url: "https://example.com/g.png".to_string(),
                },
                text(" here"),
            ]
        );
    }

    #[test]
    fn image_alt_may_be_empty() {
        assert_eq!(
            parse_inline("![](u)"),
            vec![InlineNode::Image {
                alt: String::new(),
                url: "u".to_string(),
            }]
        );
    }

    #[test]
    fn bold_content_is_not_rescanned() {
        // Nesting is unsupported: the inner markers stay literal.
        assert_eq!(
            parse_inline("**a _b_ c**"),
            vec![InlineNode::Bold("a _b_ c".to_string())]
        );
    }

    #[test]
    fn paired_single_stars_form_italic() {
        // Matches the grammar: the shortest run between single stars is
        // emphasized even when it is only punctuation-adjacent text.
        assert_eq!(
            parse_inline("2 * 3 * 4"),
            vec![text("2 "), InlineNode::Italic(" 3 ".to_string()), text(" 4")]
        );
    }

    #[test]
    fn unclosed_double_star_is_literal() {
        assert_eq!(parse_inline("a ** b"), vec![text("a ** b")]);
    }

    #[test]
    fn broken_bold_falls_back_to_italic_scan() {
        // `**a*b**` cannot close as bold; the single-star italic then matches
        // from the second star.
        assert_eq!(
            parse_inline("**a*b**"),
            vec![
                text("*"),
                InlineNode::Italic("a".to_string()),
                text("b**"),
            ]
        );
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            parse_inline("naïve ∀x"),
            vec![text("naïve ∀x")]
        );
    }

    #[test]
    fn standalone_image_requires_full_match() {
        assert_eq!(
            standalone_image("![alt](url)"),
            Some(("alt".to_string(), "url".to_string()))
        );
        assert_eq!(standalone_image("![alt](url) trailing"), None);
        assert_eq!(standalone_image("plain"), None);
    }
}
