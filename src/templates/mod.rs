//! Page template with a content placeholder

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// The shared page template
///
/// Loaded once per build and reused for every converted page.
pub struct Template {
    text: String,
    marker: String,
}

impl Template {
    /// Load the template from a file
    ///
    /// There is no fallback template; a missing file fails the build.
    pub async fn load<P: AsRef<Path>>(path: P, marker: &str) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read template {:?}", path))?;

        Ok(Self {
            text,
            marker: marker.to_string(),
        })
    }

    /// Substitute a rendered fragment at the first marker occurrence
    ///
    /// Only the first occurrence in the template text is replaced; a marker
    /// string appearing in the fragment itself is left untouched.
    pub fn render(&self, fragment: &str) -> String {
        self.text.replacen(&self.marker, fragment, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_replaces_first_occurrence_only() {
        let template = Template {
            text: "<body>{{content}} and {{content}}</body>".to_string(),
            marker: "{{content}}".to_string(),
        };

        let html = template.render("<p>hi</p>");
        assert_eq!(html, "<body><p>hi</p> and {{content}}</body>");
    }

    #[test]
    fn test_render_keeps_marker_inside_fragment() {
        let template = Template {
            text: "<body>{{content}}</body>".to_string(),
            marker: "{{content}}".to_string(),
        };

        let html = template.render("literal {{content}} in a post");
        assert_eq!(html, "<body>literal {{content}} in a post</body>");
    }

    #[tokio::test]
    async fn test_load_missing_template_fails() {
        let dir = TempDir::new().unwrap();
        let result = Template::load(dir.path().join("template.html"), "{{content}}").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_reads_template_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("template.html");
        std::fs::write(&path, "<html>{{content}}</html>").unwrap();

        let template = Template::load(&path, "{{content}}").await.unwrap();
        assert_eq!(template.render("x"), "<html>x</html>");
    }
}
