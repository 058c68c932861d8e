//! The top-level renderer: raw article text in, render tree (or HTML) out.

pub mod html;
mod node;

pub use node::{RenderNode, SpanStyle};

use crate::blocks::{self, Block, ImageSource, Segment};
use crate::inline::{self, InlineNode};
use crate::math::{MathDelegate, MathRenderer};
use crate::resolve::{self, ArticleStore, MediaKind, MediaStore};
use crate::sandbox::SandboxDocument;
use crate::scan::{self, Directive, DirectiveKind};

/// Renders article text against the store and math collaborators.
///
/// Rendering is synchronous, single-pass and total: every failure is
/// contained to its own span or block. Sandbox instance ids are
/// `{prefix}-{n}` with a per-render counter; callers embedding several
/// articles on one page give each renderer a distinct prefix.
pub struct Renderer<'a> {
    articles: &'a dyn ArticleStore,
    media: &'a dyn MediaStore,
    math: MathDelegate<'a>,
    instance_prefix: String,
}

impl<'a> Renderer<'a> {
    pub fn new(
        articles: &'a dyn ArticleStore,
        media: &'a dyn MediaStore,
        math: &'a dyn MathRenderer,
    ) -> Self {
        Self {
            articles,
            media,
            math: MathDelegate::new(math),
            instance_prefix: "sandbox".to_string(),
        }
    }

    /// Overrides the sandbox instance id prefix. The renderer never reads
    /// ambient state to pick ids; callers select the target explicitly.
    pub fn with_instance_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.instance_prefix = prefix.into();
        self
    }

    /// Full pipeline: scan, structure, format, resolve.
    pub fn render(&self, text: &str) -> Vec<RenderNode> {
        let spans = scan::scan(text);
        let blocks = blocks::structure(spans);
        let mut ids = InstanceIds::new(&self.instance_prefix);
        blocks
            .into_iter()
            .map(|b| self.render_block(b, &mut ids))
            .collect()
    }

    /// Renders straight to an HTML fragment.
    pub fn render_html(&self, text: &str) -> String {
        html::to_html(&self.render(text))
    }

    fn render_block(&self, block: Block, ids: &mut InstanceIds) -> RenderNode {
        match block {
            Block::Paragraph { segments, indented } => RenderNode::Paragraph {
                children: segments
                    .into_iter()
                    .flat_map(|s| self.render_segment(s, ids))
                    .collect(),
                indented,
            },
            Block::Table { headers, rows } => RenderNode::Table {
                headers: headers.iter().map(|c| self.render_inline(c)).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|c| self.render_inline(c)).collect())
                    .collect(),
            },
            Block::Image { source, alt } => self.render_image_block(source, alt),
        }
    }

    fn render_segment(&self, segment: Segment, ids: &mut InstanceIds) -> Vec<RenderNode> {
        match segment {
            Segment::Text(t) => self.render_inline(&t),
            Segment::Directive(d) => vec![self.render_directive(d, ids)],
        }
    }

    fn render_inline(&self, text: &str) -> Vec<RenderNode> {
        inline::parse_inline(text)
            .into_iter()
            .map(|node| match node {
                InlineNode::Text(t) => RenderNode::Text(t),
                InlineNode::Bold(t) => RenderNode::Strong(t),
                InlineNode::Italic(t) => RenderNode::Emphasis(t),
                InlineNode::Math { expr, display } => self.math.render(&expr, display),
                InlineNode::Image { alt, url } => RenderNode::InlineImage { url, alt },
            })
            .collect()
    }

    fn render_directive(&self, d: Directive, ids: &mut InstanceIds) -> RenderNode {
        match d.kind {
            DirectiveKind::Color => RenderNode::Styled {
                style: SpanStyle::Color(d.param(0).unwrap_or("black").trim().to_string()),
                children: self.render_inline(d.body.as_deref().unwrap_or("")),
            },
            DirectiveKind::Size => RenderNode::Styled {
                style: SpanStyle::FontSize(map_size(d.param(0).unwrap_or("normal"))),
                children: self.render_inline(d.body.as_deref().unwrap_or("")),
            },
            DirectiveKind::Manim => RenderNode::CodeBlock {
                language: "python".to_string(),
                label: "Manim Code".to_string(),
                code: d.body.as_deref().unwrap_or("").trim().to_string(),
                instance: ids.next_id(),
            },
            DirectiveKind::Interactive => RenderNode::Sandbox {
                document: SandboxDocument::generate(
                    d.body.as_deref().unwrap_or("").trim(),
                    &ids.next_id(),
                ),
            },
            DirectiveKind::Embed => {
                resolve::embed(d.param(0).unwrap_or(""), d.param(1), d.param(2))
            }
            DirectiveKind::Image => {
                resolve::image(self.media, d.param(0).unwrap_or("").trim(), d.param(1))
            }
            DirectiveKind::Video => {
                resolve::video(self.media, d.param(0).unwrap_or("").trim(), d.param(1))
            }
            DirectiveKind::WikiLink => {
                resolve::wiki_link(self.articles, d.param(0).unwrap_or("").trim())
            }
        }
    }

    fn render_image_block(&self, source: ImageSource, alt: String) -> RenderNode {
        match source {
            ImageSource::Url(url) => RenderNode::Figure {
                kind: MediaKind::Image,
                src: url,
                mime_type: None,
                caption: (!alt.is_empty()).then_some(alt),
                centered: true,
            },
            ImageSource::Media { id } => {
                let alt_override = (!alt.is_empty()).then_some(alt.as_str());
                match resolve::image(self.media, &id, alt_override) {
                    RenderNode::Figure {
                        kind,
                        src,
                        mime_type,
                        caption,
                        ..
                    } => RenderNode::Figure {
                        kind,
                        src,
                        mime_type,
                        caption,
                        centered: true,
                    },
                    placeholder => placeholder,
                }
            }
        }
    }
}

/// Names the recognized size keywords; anything else passes through verbatim
/// as a CSS size.
fn map_size(token: &str) -> String {
    let token = token.trim();
    match token.to_ascii_lowercase().as_str() {
        "small" => "0.8em".to_string(),
        "normal" => "1em".to_string(),
        "large" => "1.5em".to_string(),
        "xlarge" => "2em".to_string(),
        "xxlarge" => "3em".to_string(),
        _ => token.to_string(),
    }
}

struct InstanceIds {
    prefix: String,
    counter: usize,
}

impl InstanceIds {
    fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: 0,
        }
    }

    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}
