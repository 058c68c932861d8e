use std::sync::OnceLock;

use regex::Regex;

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\s\-:]+$").expect("invalid separator pattern"))
}

/// A separator row contains only dashes, colons and whitespace between its
/// pipes, with at least one dash.
pub fn is_separator_row(line: &str) -> bool {
    let content: String = line.chars().filter(|&c| c != '|').collect();
    let content = content.trim();
    content.contains('-') && separator_re().is_match(content)
}

/// Parses trimmed table lines into headers and data rows.
///
/// The first line is the header; every later line that is not a separator is
/// a data row. Cell ordering is preserved and ragged rows are kept as-is;
/// the serializer pads them against the header width.
pub fn parse_table(lines: &[String]) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = split_row(&lines[0]);
    let rows = lines[1..]
        .iter()
        .filter(|l| !is_separator_row(l))
        .map(|l| split_row(l))
        .collect();
    (headers, rows)
}

/// Splits a `|`-delimited row into trimmed cells, dropping the empty edge
/// pieces produced by the leading and trailing pipes.
fn split_row(line: &str) -> Vec<String> {
    let parts: Vec<&str> = line.split('|').collect();
    parts[1..parts.len() - 1]
        .iter()
        .map(|c| c.trim().to_string())
        .collect()
}
