//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Every field has a default reproducing the conventional layout, so a site
/// without a `_config.yml` builds out of the box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub content_dir: String,
    pub blog_dir: String,

    // Template
    pub template: String,
    pub content_marker: String,

    // Named pages (converted when their markdown source is present)
    pub pages: Vec<String>,

    // Static assets copied verbatim into the public directory
    pub assets: Vec<AssetMapping>,
}

/// One static asset to copy: `from` is relative to the source directory,
/// `to` is relative to the public directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetMapping {
    pub from: String,
    pub to: String,
}

impl AssetMapping {
    fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_dir: "src".to_string(),
            public_dir: "public".to_string(),
            content_dir: "src/content".to_string(),
            blog_dir: "blog".to_string(),

            template: "template.html".to_string(),
            content_marker: "{{content}}".to_string(),

            pages: vec!["about".to_string(), "faq".to_string()],

            assets: vec![
                AssetMapping::new("index.html", "index.html"),
                AssetMapping::new("css/styles.css", "css/styles.css"),
                AssetMapping::new("js/main.js", "js/main.js"),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
