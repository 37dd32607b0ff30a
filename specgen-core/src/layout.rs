//! Project layout: where documents are written and where existing pages and
//! component sources are found

use crate::config::OutputConfig;
use crate::record::demo_slug;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: std::io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

/// An existing component used as style reference for a new one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleReference {
    pub name: String,
    /// Previously generated demo page
    pub demo_page: Option<String>,
    /// Component implementation source
    pub component_source: Option<String>,
}

impl StyleReference {
    pub fn is_empty(&self) -> bool {
        self.demo_page.is_none() && self.component_source.is_none()
    }
}

/// Resolved output locations below a project root
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    pages_dir: PathBuf,
    components_dir: PathBuf,
    extension: String,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, output: &OutputConfig) -> Self {
        let root = root.into();
        Self {
            pages_dir: root.join(&output.pages_dir),
            components_dir: root.join(&output.components_dir),
            extension: output.extension.clone(),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// `<pages>/<name-lowercased>-demo.<ext>`
    pub fn demo_page_path(&self, component_name: &str) -> PathBuf {
        self.pages_dir.join(format!("{}.{}", demo_slug(component_name), self.extension))
    }

    /// `<components>/<Name>.astro`
    pub fn component_source_path(&self, component_name: &str) -> PathBuf {
        self.components_dir.join(format!("{component_name}.astro"))
    }

    /// Read the demo page and component source of `base` when they exist.
    /// The page is looked up under the name pages are written with, then
    /// under `base` as typed.
    pub async fn load_reference(&self, base: &str) -> StyleReference {
        let written_path = self.demo_page_path(base);
        let as_typed_path = self.pages_dir.join(format!("{base}-demo.{}", self.extension));
        let source_path = self.component_source_path(base);

        let demo_page = match read_if_present(&written_path).await {
            Some(page) => Some(page),
            None if as_typed_path != written_path => read_if_present(&as_typed_path).await,
            None => None,
        };

        let reference = StyleReference {
            name: base.to_string(),
            demo_page,
            component_source: read_if_present(&source_path).await,
        };

        if reference.is_empty() {
            warn!("No reference material found for {:?}", base);
        }

        reference
    }

    /// Write a rendered document for `component_name`, creating the pages
    /// directory when needed. Returns the written path.
    pub async fn write_document(
        &self,
        component_name: &str,
        content: &str,
    ) -> Result<PathBuf, OutputError> {
        tokio::fs::create_dir_all(&self.pages_dir)
            .await
            .map_err(|source| OutputError::CreateDir { path: self.pages_dir.clone(), source })?;

        let path = self.demo_page_path(component_name);
        tokio::fs::write(&path, content)
            .await
            .map_err(|source| OutputError::Write { path: path.clone(), source })?;

        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}

async fn read_if_present(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Some(content),
        Err(err) => {
            debug!("Skipping {}: {}", path.display(), err);
            None
        }
    }
}
