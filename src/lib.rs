//! sitegen: a minimal static site builder
//!
//! This crate copies a configured set of static assets into an output
//! directory and converts Markdown content (blog posts plus a fixed set of
//! named pages) into HTML by substituting rendered fragments into a shared
//! page template.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main sitegen application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory (static assets and the page template)
    pub source_dir: std::path::PathBuf,
    /// Content directory (Markdown sources)
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            content_dir,
            public_dir,
        })
    }

    /// Build the site
    pub async fn build(&self) -> Result<()> {
        commands::build::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
