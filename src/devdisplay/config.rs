//! # Configuration
//!
//! A site is a root directory holding the manifest, the per-profile data
//! files and an optional `devdisplay.json`:
//!
//! ```text
//! site/
//! ├── devdisplay.json      # Optional settings (this module)
//! ├── ProfilesList.json    # Manifest: JSON array of data file names
//! └── data/
//!     ├── ada.json
//!     └── linus.json
//! ```
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! Command-line flags override whatever is loaded here.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | `data` | Directory of data files, relative to the root |
//! | `base_url` | none | Fetch data files over HTTP from this base instead |
//! | `manifest` | `ProfilesList.json` | Manifest file, relative to the root |
//! | `sources` | none | Inline list of data file names; overrides the manifest |
//! | `page_policy` | `reset_on_search` | `preserve` or `reset_on_search` |
//! | `fetch_timeout_ms` | none | Per-source fetch timeout |
//! | `seed` | none | Fixed shuffle seed |

use crate::browser::PagePolicy;
use crate::error::{DevDisplayError, Result};
use crate::loader::LoadOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "devdisplay.json";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_MANIFEST: &str = "ProfilesList.json";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DevDisplayConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub sources: Option<Vec<String>>,

    #[serde(default)]
    pub page_policy: PagePolicy,

    #[serde(default)]
    pub fetch_timeout_ms: Option<u64>,

    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

impl Default for DevDisplayConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            base_url: None,
            manifest: default_manifest(),
            sources: None,
            page_policy: PagePolicy::default(),
            fetch_timeout_ms: None,
            seed: None,
        }
    }
}

impl DevDisplayConfig {
    /// Load config from `root`, or return defaults if there is none.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            DevDisplayError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_dir)
    }

    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    /// The ordered source names: the inline list if set, else the manifest file.
    pub fn source_names(&self, root: &Path) -> Result<Vec<String>> {
        match &self.sources {
            Some(names) => Ok(names.clone()),
            None => read_manifest(&self.manifest_path(root)),
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            fetch_timeout: self.fetch_timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Reads a manifest: a JSON array of data file names.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        DevDisplayError::Config(format!("cannot read manifest {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        DevDisplayError::Config(format!("invalid manifest {}: {}", path.display(), e))
    })
}
