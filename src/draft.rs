//! The document being edited and its markdown export

use std::path::{Path, PathBuf};

use crate::content::InsertableContent;

/// File name used for exported drafts
pub const EXPORT_FILE_NAME: &str = "Readme.md";

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Please enter a title and content first")]
    Empty,

    #[error("Markdown conversion failed: {0}")]
    Convert(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Title plus HTML body produced by the editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    title: String,
    content: String,
    is_edited: bool,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Editor HTML
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set once the title or content is first changed; never cleared
    pub fn is_edited(&self) -> bool {
        self.is_edited
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.is_edited = true;
    }

    pub fn set_content(&mut self, html: impl Into<String>) {
        self.content = html.into();
        self.is_edited = true;
    }

    /// Append a badge or stats card at the end of the body
    pub fn insert(&mut self, item: &InsertableContent) {
        self.content.push_str(&format!("<p>{}</p>", item.to_html()));
        self.is_edited = true;
    }

    /// A draft may be saved once it has a title or some content
    pub fn check_ready(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() && self.content.trim().is_empty() {
            return Err(DraftError::Empty);
        }
        Ok(())
    }

    /// Convert the HTML body to markdown
    pub fn to_markdown(&self) -> Result<String, DraftError> {
        htmd::convert(&self.content).map_err(|e| DraftError::Convert(e.to_string()))
    }

    /// Write the markdown export to `dir/Readme.md` and return its path
    pub fn save_as_markdown(&self, dir: impl AsRef<Path>) -> Result<PathBuf, DraftError> {
        self.check_ready()?;
        let markdown = self.to_markdown()?;
        let path = dir.as_ref().join(EXPORT_FILE_NAME);
        std::fs::write(&path, markdown).map_err(|source| DraftError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Draft exported as markdown");
        Ok(path)
    }
}
