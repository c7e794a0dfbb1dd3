//! Content loader - discovers markdown sources for conversion

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use super::{ContentItem, ContentKind};
use crate::Site;

/// Discovers content items under the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// List all markdown posts in the blog directory
    ///
    /// A missing blog directory is an error; a site without posts still has
    /// the directory.
    pub async fn load_posts(&self) -> Result<Vec<ContentItem>> {
        let blog_dir = self.site.content_dir.join(&self.site.config.blog_dir);
        let dest_dir = self.site.public_dir.join(&self.site.config.blog_dir);

        let mut entries = fs::read_dir(&blog_dir)
            .await
            .with_context(|| format!("failed to read blog directory {:?}", blog_dir))?;

        let mut posts = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_file() && is_markdown_file(&path) {
                posts.push(ContentItem::new(&path, &dest_dir, ContentKind::Post));
            }
        }

        // Directory listing order is platform-dependent
        posts.sort_by(|a, b| a.source.cmp(&b.source));

        Ok(posts)
    }

    /// Locate the configured named pages
    ///
    /// A page without a markdown source is skipped with a warning rather
    /// than failing the build.
    pub async fn load_pages(&self) -> Result<Vec<ContentItem>> {
        let mut pages = Vec::new();

        for page in &self.site.config.pages {
            let path = self.site.content_dir.join(format!("{}.md", page));
            if fs::try_exists(&path).await? {
                pages.push(ContentItem::new(&path, &self.site.public_dir, ContentKind::Page));
            } else {
                tracing::warn!("{}.md not found", page);
            }
        }

        Ok(pages)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn site_with_content(dir: &TempDir) -> Site {
        std_fs::create_dir_all(dir.path().join("src/content/blog")).unwrap();
        Site::new(dir.path()).unwrap()
    }

    #[tokio::test]
    async fn test_load_posts_lists_markdown_files() {
        let dir = TempDir::new().unwrap();
        let site = site_with_content(&dir);
        let blog = dir.path().join("src/content/blog");
        std_fs::write(blog.join("world.md"), "# World").unwrap();
        std_fs::write(blog.join("hello.md"), "# Hello").unwrap();
        std_fs::write(blog.join("notes.txt"), "not markdown").unwrap();

        let posts = ContentLoader::new(&site).load_posts().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].dest, site.public_dir.join("blog/hello.html"));
        assert_eq!(posts[1].dest, site.public_dir.join("blog/world.html"));
    }

    #[tokio::test]
    async fn test_load_posts_fails_without_blog_directory() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();

        let result = ContentLoader::new(&site).load_posts().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_pages_skips_missing_sources() {
        let dir = TempDir::new().unwrap();
        let site = site_with_content(&dir);
        std_fs::write(dir.path().join("src/content/about.md"), "# About").unwrap();
        // faq.md is deliberately absent

        let pages = ContentLoader::new(&site).load_pages().await.unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].dest, site.public_dir.join("about.html"));
        assert_eq!(pages[0].kind, ContentKind::Page);
    }
}
