use super::cursor::Cursor;
use super::directive::{Directive, DirectiveKind};

/// A contiguous unit of scanned text: either literal content or a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSpan {
    Literal(String),
    Directive(Directive),
}

impl RawSpan {
    /// The original source text this span was scanned from.
    pub fn raw_text(&self) -> &str {
        match self {
            RawSpan::Literal(s) => s,
            RawSpan::Directive(d) => &d.raw,
        }
    }
}

/// Scans raw article text into an ordered span sequence.
///
/// Single left-to-right pass, no backtracking across consumed text. At each
/// `[` the directive kinds are tried in precedence order; on failure the
/// bracket passes through as literal text and scanning resumes one character
/// later, so unmatched openings are preserved rather than reported.
///
/// Joining the spans' raw text reproduces the input byte-for-byte.
pub fn scan(text: &str) -> Vec<RawSpan> {
    let mut cur = Cursor::new(text);
    let mut out = Vec::new();
    let mut literal_start = 0;

    while !cur.eof() {
        if cur.peek() == Some(b'[')
            && let Some((directive, consumed)) = try_directive(cur.rest())
        {
            if cur.index() > literal_start {
                out.push(RawSpan::Literal(text[literal_start..cur.index()].to_string()));
            }
            cur.bump_n(consumed);
            literal_start = cur.index();
            out.push(RawSpan::Directive(directive));
            continue;
        }
        cur.bump_char();
    }

    if literal_start < text.len() {
        out.push(RawSpan::Literal(text[literal_start..].to_string()));
    }
    out
}

fn try_directive(rest: &str) -> Option<(Directive, usize)> {
    try_paired(rest, "[color:", "[/color]", DirectiveKind::Color)
        .or_else(|| try_paired(rest, "[size:", "[/size]", DirectiveKind::Size))
        .or_else(|| try_block(rest, "[manim:code]", "[/manim]", DirectiveKind::Manim))
        .or_else(|| {
            try_block(
                rest,
                "[interactive:code]",
                "[/interactive]",
                DirectiveKind::Interactive,
            )
        })
        .or_else(|| try_tag(rest, "[embed:", 3, DirectiveKind::Embed))
        .or_else(|| try_tag(rest, "[image:", 2, DirectiveKind::Image))
        .or_else(|| try_tag(rest, "[video:", 2, DirectiveKind::Video))
        .or_else(|| try_wiki_link(rest))
}

/// `[kind:value]body[/kind]`: value runs to the first `]`, body is the
/// shortest run up to the kind's own closing token.
fn try_paired(
    rest: &str,
    open: &str,
    close: &str,
    kind: DirectiveKind,
) -> Option<(Directive, usize)> {
    let after_open = rest.strip_prefix(open)?;
    let value_end = after_open.find(']')?;
    if value_end == 0 {
        return None;
    }
    let value = &after_open[..value_end];
    let body_rest = &after_open[value_end + 1..];
    let body_end = body_rest.find(close)?;
    let consumed = open.len() + value_end + 1 + body_end + close.len();
    Some((
        Directive {
            kind,
            params: vec![value.to_string()],
            body: Some(body_rest[..body_end].to_string()),
            raw: rest[..consumed].to_string(),
        },
        consumed,
    ))
}

/// `[manim:code]…[/manim]`-style: fixed opening token, body up to the closing
/// token. Bodies may span lines.
fn try_block(
    rest: &str,
    open: &str,
    close: &str,
    kind: DirectiveKind,
) -> Option<(Directive, usize)> {
    let after_open = rest.strip_prefix(open)?;
    let body_end = after_open.find(close)?;
    let consumed = open.len() + body_end + close.len();
    Some((
        Directive {
            kind,
            params: Vec::new(),
            body: Some(after_open[..body_end].to_string()),
            raw: rest[..consumed].to_string(),
        },
        consumed,
    ))
}

/// Single-token directives with pipe-separated positional params,
/// e.g. `[image:ID|ALT]`. The first param is required.
fn try_tag(
    rest: &str,
    open: &str,
    max_params: usize,
    kind: DirectiveKind,
) -> Option<(Directive, usize)> {
    let after_open = rest.strip_prefix(open)?;
    let end = after_open.find(']')?;
    if end == 0 {
        return None;
    }
    let params: Vec<String> = after_open[..end]
        .splitn(max_params, '|')
        .map(str::to_string)
        .collect();
    if params[0].is_empty() {
        return None;
    }
    let consumed = open.len() + end + 1;
    Some((
        Directive {
            kind,
            params,
            body: None,
            raw: rest[..consumed].to_string(),
        },
        consumed,
    ))
}

fn try_wiki_link(rest: &str) -> Option<(Directive, usize)> {
    let after_open = rest.strip_prefix("[[")?;
    let end = after_open.find(']')?;
    if end == 0 || !after_open[end..].starts_with("]]") {
        return None;
    }
    let consumed = 2 + end + 2;
    Some((
        Directive {
            kind: DirectiveKind::WikiLink,
            params: vec![after_open[..end].to_string()],
            body: None,
            raw: rest[..consumed].to_string(),
        },
        consumed,
    ))
}
