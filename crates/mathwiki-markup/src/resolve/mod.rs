//! Media and link resolution against the store collaborators.
//!
//! Every resolution is total: misses and invalid references produce marked
//! links or literal placeholder nodes, never errors, so one bad reference
//! cannot blank out unrelated content.

mod stores;

pub use stores::{
    ArticleStore, InMemoryArticleStore, InMemoryMediaStore, MediaItem, MediaKind, MediaStore,
};

use crate::render::RenderNode;

/// Resolves `[image:ID|ALT]`. The caption is the override when given,
/// otherwise the stored alt text.
pub fn image(media: &dyn MediaStore, id: &str, alt_override: Option<&str>) -> RenderNode {
    match media.get(id) {
        Some(item) if item.kind == MediaKind::Image => RenderNode::Figure {
            kind: MediaKind::Image,
            src: item.data_ref,
            mime_type: item.mime_type,
            caption: caption_for(alt_override, item.alt),
            centered: false,
        },
        _ => {
            tracing::warn!(id = %id, "image not found in media store");
            RenderNode::Placeholder(format!("[Image not found: {id}]"))
        }
    }
}

/// Resolves `[video:ID|CAPTION]`.
pub fn video(media: &dyn MediaStore, id: &str, caption_override: Option<&str>) -> RenderNode {
    match media.get(id) {
        Some(item) if item.kind == MediaKind::Video => RenderNode::Figure {
            kind: MediaKind::Video,
            src: item.data_ref,
            mime_type: item.mime_type,
            caption: caption_for(caption_override, item.alt),
            centered: false,
        },
        _ => {
            tracing::warn!(id = %id, "video not found in media store");
            RenderNode::Placeholder(format!("[Video not found: {id}]"))
        }
    }
}

/// Resolves `[[Name]]`. Missing targets still render as links, carrying a
/// distinguishing "new" marker; navigation is the host application's job.
pub fn wiki_link(articles: &dyn ArticleStore, name: &str) -> RenderNode {
    let exists = articles.exists(name);
    if !exists {
        tracing::debug!(name = %name, "wiki link targets a missing article");
    }
    RenderNode::ArticleLink {
        target: name.to_string(),
        exists,
    }
}

/// Resolves `[embed:URL|W|H]`. Only well-formed HTTPS URLs become iframes.
pub fn embed(url: &str, width: Option<&str>, height: Option<&str>) -> RenderNode {
    let url = url.trim();
    if !url.starts_with("https://") {
        tracing::warn!(url = %url, "rejected non-HTTPS embed URL");
        return RenderNode::Placeholder(
            "[Invalid embed URL: Only HTTPS URLs are allowed]".to_string(),
        );
    }
    let host = &url["https://".len()..];
    if host.is_empty() || url.chars().any(|c| c.is_whitespace() || c == '"') {
        tracing::warn!(url = %url, "rejected malformed embed URL");
        return RenderNode::Placeholder(format!("[Invalid embed URL: {url}]"));
    }
    RenderNode::Embed {
        url: url.to_string(),
        width: non_empty_or(width, "100%"),
        height: non_empty_or(height, "600px"),
    }
}

fn caption_for(override_text: Option<&str>, stored: Option<String>) -> Option<String> {
    override_text
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or(stored.filter(|s| !s.is_empty()))
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}
