use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mathwiki_config::Config;
use mathwiki_markup::{PassthroughMathRenderer, Renderer, render::html};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod stores;

use stores::{DirArticleStore, ManifestMediaStore};

/// Render a mathwiki article to a standalone HTML page.
#[derive(Debug, Parser)]
#[command(name = "mathwiki", version, about)]
struct Args {
    /// Path to the article markup file
    article: PathBuf,

    /// Write the page here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Page title (defaults to the article file stem)
    #[arg(long)]
    title: Option<String>,

    /// Directory of articles used for wiki-link existence checks
    #[arg(long)]
    articles_dir: Option<PathBuf>,

    /// JSON manifest of uploaded media
    #[arg(long)]
    media_manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load()?;

    let articles_dir = args
        .articles_dir
        .or_else(|| config.as_ref().map(|c| c.articles_dir.clone()))
        .or_else(|| args.article.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let media_manifest = args
        .media_manifest
        .or_else(|| config.as_ref().and_then(|c| c.media_manifest.clone()));

    let text = std::fs::read_to_string(&args.article)
        .with_context(|| format!("reading article {}", args.article.display()))?;

    let articles = DirArticleStore::new(articles_dir);
    let media = match &media_manifest {
        Some(path) => ManifestMediaStore::load(path)?,
        None => ManifestMediaStore::empty(),
    };

    let renderer = Renderer::new(&articles, &media, &PassthroughMathRenderer)
        .with_instance_prefix(format!("interactive-{}", Uuid::new_v4()));
    let body = renderer.render_html(&text);

    let title = args
        .title
        .or_else(|| config.as_ref().and_then(|c| c.page_title.clone()))
        .or_else(|| {
            args.article
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "mathwiki".to_string());

    let page = html::page(&title, &body);

    match &args.out {
        Some(path) => std::fs::write(path, page)
            .with_context(|| format!("writing output {}", path.display()))?,
        None => print!("{page}"),
    }
    Ok(())
}
