// src/widget.rs

//! The widget HTML shell and the MCP resource that serves it.
//!
//! The host fetches the template once, then hydrates it with the
//! `structuredContent` returned by each tool call.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use rmcp::ErrorData;
use rmcp::model::{
    AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents,
};
use tracing::{debug, info, warn};

use crate::error::AssetError;

pub const TEMPLATE_URI: &str = "ui://widget/kitchen-sink-lite.html";
pub const MIME_TYPE: &str = "text/html+skybridge";

const WIDGET_NAME: &str = "kitchen-sink-lite";
const WIDGET_FILE: &str = "kitchen-sink-lite.html";
const VERSIONED_PATTERN: &str = "kitchen-sink-lite-*.html";

/// Locates the widget build output and keeps the markup for the life of the
/// process. Only a successful load is cached; a missing asset is looked up
/// again on the next call.
#[derive(Debug)]
pub struct WidgetAssets {
    dir: PathBuf,
    html: OnceLock<Arc<str>>,
}

impl WidgetAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), html: OnceLock::new() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn html(&self) -> Result<Arc<str>, AssetError> {
        if let Some(html) = self.html.get() {
            return Ok(html.clone());
        }
        let path = self.locate()?;
        let text = std::fs::read_to_string(&path)
            .map_err(|source| AssetError::Read { path: path.clone(), source })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded widget html");
        // A concurrent first load may have won; both read the same file.
        Ok(self.html.get_or_init(|| Arc::from(text)).clone())
    }

    /// Exact file first, then the lexicographically last versioned build.
    fn locate(&self) -> Result<PathBuf, AssetError> {
        let direct = self.dir.join(WIDGET_FILE);
        if direct.is_file() {
            return Ok(direct);
        }

        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(&self.dir.to_string_lossy()),
            VERSIONED_PATTERN
        );
        let mut candidates: Vec<PathBuf> = glob::glob(&pattern)
            .map_err(|_| AssetError::Missing { dir: self.dir.clone() })?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        candidates.sort();

        candidates.pop().ok_or_else(|| AssetError::Missing { dir: self.dir.clone() })
    }

    /// Loads the markup ahead of the first request so a bad deploy shows up
    /// in the startup log. Failure is not fatal here.
    pub fn warm(&self) {
        match self.html() {
            Ok(html) => info!(dir = %self.dir().display(), bytes = html.len(), "widget template ready"),
            Err(err) => warn!(%err, "widget template unavailable"),
        }
    }

    pub fn resource(&self) -> Resource {
        let mut raw = RawResource::new(TEMPLATE_URI, WIDGET_NAME);
        raw.description = Some("Kitchen sink lite widget".into());
        raw.mime_type = Some(MIME_TYPE.into());
        raw.no_annotation()
    }

    pub fn read(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        if uri != TEMPLATE_URI {
            return Err(ErrorData::resource_not_found(
                format!("Unknown resource: {uri}"),
                None,
            ));
        }
        let html = self.html()?;
        let mut contents = ResourceContents::text(html.to_string(), TEMPLATE_URI);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(MIME_TYPE.into());
        }
        Ok(ReadResourceResult { contents: vec![contents] })
    }
}
