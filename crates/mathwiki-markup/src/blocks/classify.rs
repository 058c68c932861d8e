use super::types::Segment;

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; the builder supplies the
/// surrounding context (open paragraph, open table).
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The line's segments, directives kept atomic.
    pub segments: Vec<Segment>,
    /// The line's reconstructed source text (directives contribute their raw
    /// form). Used for the table-line test and as cell source for tables.
    pub raw: String,
    pub is_blank: bool,
    pub is_table: bool,
    /// Line opens with a tab or four spaces.
    pub indented: bool,
}

/// Classifies one line of segments.
pub fn classify(segments: Vec<Segment>) -> LineClass {
    let raw: String = segments
        .iter()
        .map(|s| match s {
            Segment::Text(t) => t.as_str(),
            Segment::Directive(d) => d.raw.as_str(),
        })
        .collect();

    let trimmed = raw.trim();
    let is_blank = trimmed.is_empty();
    let is_table = trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|');
    let indented = raw.starts_with('\t') || raw.starts_with("    ");

    LineClass {
        segments,
        raw,
        is_blank,
        is_table,
        indented,
    }
}
