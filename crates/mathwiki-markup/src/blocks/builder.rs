use crate::inline::standalone_image;
use crate::scan::DirectiveKind;

use super::classify::LineClass;
use super::table::parse_table;
use super::types::{Block, ImageSource, Segment};

/// Accumulates classified lines into [`Block`]s.
///
/// Paragraph lines are joined with a single space; a blank line or a table
/// line flushes the open paragraph, a non-table line flushes the open table.
pub struct BlockBuilder {
    para: Vec<Segment>,
    para_indented: bool,
    table: Vec<String>,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            para: Vec::new(),
            para_indented: false,
            table: Vec::new(),
            out: Vec::new(),
        }
    }

    pub fn push(&mut self, lc: LineClass) {
        if lc.is_table {
            self.flush_paragraph();
            self.table.push(lc.raw.trim().to_string());
            return;
        }
        self.flush_table();

        if lc.is_blank {
            self.flush_paragraph();
            return;
        }
        self.extend_paragraph(lc);
    }

    pub fn finish(mut self) -> Vec<Block> {
        self.flush_table();
        self.flush_paragraph();
        self.out
    }

    fn extend_paragraph(&mut self, lc: LineClass) {
        let mut segments = lc.segments;
        if lc.indented {
            self.para_indented = true;
            if let Some(Segment::Text(first)) = segments.first_mut() {
                *first = strip_indent(first).to_string();
            }
        }
        if !self.para.is_empty() {
            self.push_text(" ");
        }
        for seg in segments {
            match seg {
                Segment::Text(t) => self.push_text(&t),
                directive => self.para.push(directive),
            }
        }
    }

    /// Appends text, merging into a trailing text segment so inline runs stay
    /// contiguous across soft line breaks.
    fn push_text(&mut self, t: &str) {
        if let Some(Segment::Text(last)) = self.para.last_mut() {
            last.push_str(t);
        } else {
            self.para.push(Segment::Text(t.to_string()));
        }
    }

    fn flush_paragraph(&mut self) {
        let mut segments = std::mem::take(&mut self.para);
        let indented = std::mem::replace(&mut self.para_indented, false);
        trim_edges(&mut segments);
        if segments.is_empty() {
            return;
        }

        if let Some(block) = standalone_block(&segments) {
            self.out.push(block);
            return;
        }
        self.out.push(Block::Paragraph { segments, indented });
    }

    fn flush_table(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.table);
        let (headers, rows) = parse_table(&lines);
        self.out.push(Block::Table { headers, rows });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A paragraph that is exactly one standalone image (a `![alt](url)`
/// literal or an `[image:ID]` directive) becomes a centered image block.
fn standalone_block(segments: &[Segment]) -> Option<Block> {
    if segments.len() != 1 {
        return None;
    }
    match &segments[0] {
        Segment::Text(t) => {
            let (alt, url) = standalone_image(t.trim())?;
            Some(Block::Image {
                source: ImageSource::Url(url),
                alt,
            })
        }
        Segment::Directive(d) if d.kind == DirectiveKind::Image => Some(Block::Image {
            source: ImageSource::Media {
                id: d.param(0).unwrap_or_default().trim().to_string(),
            },
            alt: d.param(1).unwrap_or_default().trim().to_string(),
        }),
        _ => None,
    }
}

fn strip_indent(line: &str) -> &str {
    line.strip_prefix('\t')
        .or_else(|| line.strip_prefix("    "))
        .unwrap_or(line)
}

fn trim_edges(segments: &mut Vec<Segment>) {
    if let Some(Segment::Text(first)) = segments.first_mut() {
        let trimmed = first.trim_start().to_string();
        *first = trimmed;
    }
    if matches!(segments.first(), Some(Segment::Text(t)) if t.is_empty()) {
        segments.remove(0);
    }
    if let Some(Segment::Text(last)) = segments.last_mut() {
        let trimmed = last.trim_end().to_string();
        *last = trimmed;
    }
    if matches!(segments.last(), Some(Segment::Text(t)) if t.is_empty()) {
        segments.pop();
    }
}
