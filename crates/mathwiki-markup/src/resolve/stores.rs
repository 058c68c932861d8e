use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// What kind of media an item holds. A directive naming an item of the wrong
/// kind is treated as a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// An uploaded media item, owned by the media store. The engine only reads
/// these, never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// URL or data URI the serializer points the element at.
    pub data_ref: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Existence check against the wiki's article collection.
pub trait ArticleStore {
    fn exists(&self, name: &str) -> bool;
}

/// Read-only lookup of uploaded media by id.
pub trait MediaStore {
    fn get(&self, id: &str) -> Option<MediaItem>;
}

/// Set-backed [`ArticleStore`] for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    titles: HashSet<String>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.titles.insert(name.into());
    }
}

impl ArticleStore for InMemoryArticleStore {
    fn exists(&self, name: &str) -> bool {
        self.titles.contains(name)
    }
}

/// Map-backed [`MediaStore`] for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryMediaStore {
    items: HashMap<String, MediaItem>,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: MediaItem) {
        self.items.insert(item.id.clone(), item);
    }
}

impl MediaStore for InMemoryMediaStore {
    fn get(&self, id: &str) -> Option<MediaItem> {
        self.items.get(id).cloned()
    }
}
