//! Content items - one markdown source file becoming one HTML output file

use std::path::{Path, PathBuf};

/// Kind of content item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// A post discovered in the blog directory
    Post,
    /// One of the fixed named pages (about, faq)
    Page,
}

/// A single markdown source file and its HTML destination
#[derive(Debug, Clone)]
pub struct ContentItem {
    /// Markdown source path
    pub source: PathBuf,
    /// HTML destination path
    pub dest: PathBuf,
    /// Post or named page
    pub kind: ContentKind,
}

impl ContentItem {
    /// Create an item whose destination is `dest_dir/<stem>.html`
    pub fn new<P: AsRef<Path>>(source: P, dest_dir: &Path, kind: ContentKind) -> Self {
        let source = source.as_ref().to_path_buf();
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        let dest = dest_dir.join(format!("{}.html", stem));

        Self { source, dest, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dest_replaces_markdown_extension() {
        let item = ContentItem::new("content/blog/hello.md", Path::new("public/blog"), ContentKind::Post);
        assert_eq!(item.dest, Path::new("public/blog/hello.html"));
        assert_eq!(item.kind, ContentKind::Post);
    }

    #[test]
    fn test_dest_preserves_base_name() {
        let item = ContentItem::new("content/about.md", Path::new("public"), ContentKind::Page);
        assert_eq!(item.dest, Path::new("public/about.html"));
    }
}
