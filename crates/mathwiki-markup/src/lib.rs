//! Core markup engine for mathwiki.
//!
//! Turns author-written article text into a tree of safe render nodes (and
//! from there into HTML): bracket directives, inline formatting, math
//! delegation, wiki links, media references, tables, and sandboxed
//! interactive code. One canonical grammar, consumed by every render path.

pub mod blocks;
pub mod inline;
pub mod math;
pub mod render;
pub mod resolve;
pub mod sandbox;
pub mod scan;

pub use math::{MathDelegate, MathError, MathRenderer, PassthroughMathRenderer};
pub use render::{RenderNode, Renderer, SpanStyle};
pub use resolve::{
    ArticleStore, InMemoryArticleStore, InMemoryMediaStore, MediaItem, MediaKind, MediaStore,
};
pub use sandbox::SandboxDocument;
