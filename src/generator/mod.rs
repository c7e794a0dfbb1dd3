//! Generator module - copies static assets and converts markdown content

use anyhow::{Context, Result};
use tokio::fs;

use crate::content::loader::ContentLoader;
use crate::content::{ContentItem, ContentKind, MarkdownRenderer};
use crate::templates::Template;
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self {
            site: site.clone(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Generate the site
    ///
    /// Asset copying and markdown conversion are independent and run
    /// concurrently; the build fails if either fails.
    pub async fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)
            .await
            .with_context(|| format!("failed to create {:?}", self.site.public_dir))?;

        tokio::try_join!(self.copy_assets(), self.convert_content())?;

        Ok(())
    }

    /// Copy the configured static assets into the public directory
    async fn copy_assets(&self) -> Result<()> {
        for asset in &self.site.config.assets {
            let from = self.site.source_dir.join(&asset.from);
            let to = self.site.public_dir.join(&asset.to);

            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent).await?;
            }

            fs::copy(&from, &to)
                .await
                .with_context(|| format!("failed to copy {:?} to {:?}", from, to))?;

            tracing::debug!("Copied {}", asset.from);
        }

        Ok(())
    }

    /// Convert blog posts and named pages to HTML
    async fn convert_content(&self) -> Result<()> {
        let template_path = self.site.source_dir.join(&self.site.config.template);
        let template = Template::load(&template_path, &self.site.config.content_marker).await?;

        let loader = ContentLoader::new(&self.site);
        let mut items = loader.load_posts().await?;
        items.extend(loader.load_pages().await?);

        tracing::info!("Converting {} markdown files", items.len());

        for item in &items {
            self.convert_item(&template, item).await?;
        }

        Ok(())
    }

    /// Render one markdown file and write it through the template
    async fn convert_item(&self, template: &Template, item: &ContentItem) -> Result<()> {
        let markdown = fs::read_to_string(&item.source)
            .await
            .with_context(|| format!("failed to read {:?}", item.source))?;

        let fragment = self.renderer.render(&markdown);
        let html = template.render(&fragment);

        if let Some(parent) = item.dest.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&item.dest, html)
            .await
            .with_context(|| format!("failed to write {:?}", item.dest))?;

        let kind = match item.kind {
            ContentKind::Post => "post",
            ContentKind::Page => "page",
        };
        tracing::debug!("Converted {} {:?}", kind, item.source);

        Ok(())
    }
}
