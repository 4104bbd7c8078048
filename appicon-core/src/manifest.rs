//! Asset-catalog manifest (`Contents.json`).

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::{Classification, Idiom, Scale};

/// File name of the manifest inside an `.appiconset` folder.
pub const MANIFEST_FILE: &str = "Contents.json";

/// One declared rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogImage {
    pub filename: String,
    pub idiom: Idiom,
    pub scale: Scale,
    pub size: String,
}

impl CatalogImage {
    pub fn new(filename: impl Into<String>, class: &Classification) -> Self {
        Self {
            filename: filename.into(),
            idiom: class.idiom,
            scale: class.scale,
            size: class.size.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<CatalogImage>,
    pub info: ManifestInfo,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, image: CatalogImage) {
        self.images.push(image);
    }

    /// Write the manifest as 2-space indented JSON.
    pub fn write_pretty(&self, mut w: impl Write) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        w.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Replace `path` with the full manifest.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        self.write_pretty(&mut buf)?;
        fs::write(path, buf).with_context(|| format!("writing {}", path.display()))
    }
}
