use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use mathwiki_markup::{ArticleStore, MediaItem, MediaStore};

/// Article existence backed by a directory of `<Name>.md` files.
pub struct DirArticleStore {
    root: PathBuf,
}

impl DirArticleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArticleStore for DirArticleStore {
    fn exists(&self, name: &str) -> bool {
        self.root.join(format!("{name}.md")).is_file()
    }
}

/// Media lookups backed by a JSON manifest mapping id to item.
pub struct ManifestMediaStore {
    items: HashMap<String, MediaItem>,
}

impl ManifestMediaStore {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading media manifest {}", path.display()))?;
        let items: HashMap<String, MediaItem> = serde_json::from_str(&content)
            .with_context(|| format!("parsing media manifest {}", path.display()))?;
        tracing::debug!(count = items.len(), "loaded media manifest");
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl MediaStore for ManifestMediaStore {
    fn get(&self, id: &str) -> Option<MediaItem> {
        self.items.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_existence_follows_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Prime Number.md"), "content").unwrap();

        let store = DirArticleStore::new(dir.path());
        assert!(store.exists("Prime Number"));
        assert!(!store.exists("Unwritten"));
    }

    #[test]
    fn manifest_parses_camel_case_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media.json");
        std::fs::write(
            &path,
            r#"{
                "triangle": {
                    "id": "triangle",
                    "type": "image",
                    "dataRef": "https://cdn.example/t.png",
                    "mimeType": "image/png",
                    "alt": "A triangle",
                    "uploader": "euclid",
                    "uploadedAt": "2024-11-02T10:00:00Z"
                }
            }"#,
        )
        .unwrap();

        let store = ManifestMediaStore::load(&path).unwrap();
        let item = store.get("triangle").unwrap();
        assert_eq!(item.data_ref, "https://cdn.example/t.png");
        assert_eq!(item.alt.as_deref(), Some("A triangle"));
        assert!(store.get("absent").is_none());
    }

    #[test]
    fn manifest_accepts_minimal_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media.json");
        std::fs::write(
            &path,
            r#"{"v": {"id": "v", "type": "video", "dataRef": "https://cdn.example/v.webm"}}"#,
        )
        .unwrap();

        let store = ManifestMediaStore::load(&path).unwrap();
        let item = store.get("v").unwrap();
        assert!(item.mime_type.is_none());
        assert!(item.alt.is_none());
    }
}
