//! HTML serialization of the render tree.
//!
//! The only module that assembles markup strings: text goes through
//! `encode_text`, attribute values through `encode_double_quoted_attribute`.
//! The two trusted exceptions are delegate math output and the sandbox
//! document, which is itself embedded as an escaped `srcdoc` attribute.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::resolve::MediaKind;
use crate::sandbox::SandboxDocument;

use super::node::{RenderNode, SpanStyle};

/// Serializes a rendered document to an HTML fragment.
pub fn to_html(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Wraps a rendered fragment in a minimal standalone page shell with the
/// base styling the fragment's class names expect.
pub fn page(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n<style>\n{PAGE_CSS}</style>\n</head>\n<body>\n<main class=\"article\">\n{fragment}</main>\n</body>\n</html>\n",
        encode_text(title)
    )
}

const PAGE_CSS: &str = "\
body { margin: 0 auto; max-width: 50em; padding: 1em; font-family: Georgia, serif; line-height: 1.6; }
p.indented { margin-left: 2em; }
.article-media { margin: 1em 0; }
.article-media.centered { display: flex; flex-direction: column; align-items: center; }
.article-media img, .article-media video { max-width: 100%; }
.article-media figcaption { font-style: italic; font-size: 0.9em; color: #555; }
.article-table { border-collapse: collapse; width: 100%; margin: 1em 0; }
.article-table th, .article-table td { border: 1px solid #ccc; padding: 0.4em 0.75em; text-align: left; }
.article-link.new { color: #ba0000; }
.media-error { color: #ba0000; font-size: 0.9em; }
.manim-code-block, .interactive-block { border: 1px solid #ccc; border-radius: 4px; margin: 1em 0; }
.manim-header, .interactive-header { background: #f6f6f6; padding: 0.4em 0.75em; border-bottom: 1px solid #ccc; }
.manim-code-block pre { margin: 0; padding: 0.75em; overflow-x: auto; }
.manim-note { padding: 0.4em 0.75em; font-size: 0.85em; color: #555; }
.interactive-iframe { width: 100%; height: 450px; border: 0; }
.interactive-code.hidden { display: none; }
.embed-block iframe { border: 0; }
";

fn write_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Text(t) => out.push_str(&encode_text(t)),
        RenderNode::Strong(t) => {
            out.push_str(&format!("<strong>{}</strong>", encode_text(t)));
        }
        RenderNode::Emphasis(t) => {
            out.push_str(&format!("<em>{}</em>", encode_text(t)));
        }
        RenderNode::Styled { style, children } => {
            let css = match style {
                SpanStyle::Color(c) => format!("color: {c};"),
                SpanStyle::FontSize(s) => format!("font-size: {s};"),
            };
            out.push_str(&format!(
                "<span style=\"{}\">",
                encode_double_quoted_attribute(&css)
            ));
            for child in children {
                write_node(out, child);
            }
            out.push_str("</span>");
        }
        RenderNode::Math { html, .. } => out.push_str(html),
        RenderNode::MathFallback { expr, display } => {
            let class = if *display {
                "math-fallback display"
            } else {
                "math-fallback"
            };
            out.push_str(&format!(
                "<span class=\"{class}\">{}</span>",
                encode_text(expr)
            ));
        }
        RenderNode::ArticleLink { target, exists } => {
            let class = if *exists {
                "article-link"
            } else {
                "article-link new"
            };
            out.push_str(&format!(
                "<a href=\"#\" class=\"{class}\" data-article=\"{}\">{}</a>",
                encode_double_quoted_attribute(target),
                encode_text(target)
            ));
        }
        RenderNode::InlineImage { url, alt } => {
            out.push_str(&format!(
                "<img class=\"inline-image\" src=\"{}\" alt=\"{}\" />",
                encode_double_quoted_attribute(url),
                encode_double_quoted_attribute(alt)
            ));
        }
        RenderNode::Figure {
            kind,
            src,
            mime_type,
            caption,
            centered,
        } => write_figure(out, *kind, src, mime_type.as_deref(), caption.as_deref(), *centered),
        RenderNode::CodeBlock {
            language,
            label,
            code,
            instance,
        } => write_code_block(out, language, label, code, instance),
        RenderNode::Sandbox { document } => write_sandbox(out, document),
        RenderNode::Embed { url, width, height } => {
            out.push_str(&format!(
                "<div class=\"embed-block\"><iframe src=\"{}\" width=\"{}\" height=\"{}\" \
                 frameborder=\"0\" allowfullscreen \
                 sandbox=\"allow-scripts allow-same-origin allow-popups allow-forms\"></iframe></div>\n",
                encode_double_quoted_attribute(url),
                encode_double_quoted_attribute(width),
                encode_double_quoted_attribute(height)
            ));
        }
        RenderNode::Placeholder(text) => {
            out.push_str(&format!(
                "<span class=\"media-error\">{}</span>",
                encode_text(text)
            ));
        }
        RenderNode::Paragraph { children, indented } => {
            out.push_str(if *indented {
                "<p class=\"indented\">"
            } else {
                "<p>"
            });
            for child in children {
                write_node(out, child);
            }
            out.push_str("</p>\n");
        }
        RenderNode::Table { headers, rows } => write_table(out, headers, rows),
    }
}

fn write_figure(
    out: &mut String,
    kind: MediaKind,
    src: &str,
    mime_type: Option<&str>,
    caption: Option<&str>,
    centered: bool,
) {
    let class = if centered {
        "article-media centered"
    } else {
        "article-media"
    };
    out.push_str(&format!("<figure class=\"{class}\">"));
    match kind {
        MediaKind::Image => {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" />",
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(caption.unwrap_or(""))
            ));
        }
        MediaKind::Video => {
            out.push_str(&format!(
                "<video controls><source src=\"{}\" type=\"{}\" /></video>",
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(mime_type.unwrap_or("video/mp4"))
            ));
        }
    }
    if let Some(caption) = caption {
        out.push_str(&format!(
            "<figcaption>{}</figcaption>",
            encode_text(caption)
        ));
    }
    out.push_str("</figure>\n");
}

fn write_code_block(out: &mut String, language: &str, label: &str, code: &str, instance: &str) {
    let id = encode_double_quoted_attribute(instance);
    out.push_str(&format!(
        "<div class=\"manim-code-block\" data-code-id=\"{id}\">\
         <div class=\"manim-header\"><strong>{}</strong> \
         <button class=\"btn-small\" data-action=\"copy-code\" data-target=\"{id}\">Copy Code</button></div>\
         <pre><code class=\"language-{}\">{}</code></pre>\
         <div class=\"manim-note\"><em>Render this scene with: <code>manim -pql script.py SceneName</code></em></div>\
         </div>\n",
        encode_text(label),
        encode_double_quoted_attribute(language),
        encode_text(code)
    ));
}

fn write_sandbox(out: &mut String, document: &SandboxDocument) {
    let id = encode_double_quoted_attribute(&document.id);
    out.push_str(&format!(
        "<div class=\"interactive-block\" data-interactive-id=\"{id}\">\
         <div class=\"interactive-header\"><strong>Interactive Animation</strong> \
         <button class=\"btn-small\" data-action=\"reload\" data-target=\"{id}\">Reload</button> \
         <button class=\"btn-small\" data-action=\"view-source\" data-target=\"{id}\">View Code</button></div>\
         <iframe id=\"iframe-{id}\" class=\"interactive-iframe\" sandbox=\"allow-scripts\" srcdoc=\"{}\"></iframe>\
         <div id=\"code-{id}\" class=\"interactive-code hidden\">\
         <pre><code class=\"language-javascript\">{}</code></pre></div>\
         </div>\n",
        encode_double_quoted_attribute(&document.html),
        encode_text(&document.source_code)
    ));
}

fn write_table(out: &mut String, headers: &[Vec<RenderNode>], rows: &[Vec<Vec<RenderNode>>]) {
    out.push_str("<table class=\"article-table\"><thead><tr>");
    for cell in headers {
        out.push_str("<th>");
        for node in cell {
            write_node(out, node);
        }
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            for node in cell {
                write_node(out, node);
            }
            out.push_str("</td>");
        }
        // Ragged rows render with missing cells empty.
        for _ in row.len()..headers.len() {
            out.push_str("<td></td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>\n");
}
