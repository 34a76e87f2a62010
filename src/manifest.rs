use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;

/// Fields consumed from the plugin's manifest.json. Obsidian manifests
/// carry more (minAppVersion, author, ...); only these matter here.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

impl Manifest {
    /// Load and validate manifest.json from the project directory.
    pub fn load(ctx: &Context) -> Result<Self> {
        let manifest_path = ctx.base_dir.join("manifest.json");
        if !manifest_path.exists() {
            return Err(Error::ManifestNotFound(manifest_path.display().to_string()));
        }

        let content = fs::read_to_string(&manifest_path)?;
        let manifest: Manifest = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidManifest(e.to_string()))?;

        match &manifest.version {
            Some(v) if !v.trim().is_empty() => Ok(manifest),
            _ => Err(Error::InvalidManifest(
                "\"version\" field not found in manifest.json".to_string(),
            )),
        }
    }

    /// The validated version string. `load` guarantees presence.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }

    /// Display name for terminal output, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("plugin")
    }
}
