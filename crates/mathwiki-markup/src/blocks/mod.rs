mod builder;
mod classify;
mod table;
mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, classify};
pub use types::{Block, ImageSource, Segment};

use crate::scan::RawSpan;

/// Groups a scanned span sequence into document-ordered blocks.
///
/// Literal spans are split on newlines to delimit lines; a directive belongs
/// to the line where it starts, so newlines inside directive bodies never
/// break paragraphs.
pub fn structure(spans: Vec<RawSpan>) -> Vec<Block> {
    let mut builder = BlockBuilder::new();
    for line in split_lines(spans) {
        builder.push(classify(line));
    }
    builder.finish()
}

fn split_lines(spans: Vec<RawSpan>) -> Vec<Vec<Segment>> {
    let mut lines: Vec<Vec<Segment>> = vec![Vec::new()];
    for span in spans {
        match span {
            RawSpan::Literal(text) => {
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Vec::new());
                    }
                    if !part.is_empty()
                        && let Some(line) = lines.last_mut()
                    {
                        line.push(Segment::Text(part.to_string()));
                    }
                }
            }
            RawSpan::Directive(d) => {
                if let Some(line) = lines.last_mut() {
                    line.push(Segment::Directive(d));
                }
            }
        }
    }
    lines
}
