use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where to look for the native toolkit library.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Toolkit", inline)]
#[serde(default)]
pub struct ToolkitOptions {
    /// Directories (or explicit library files) searched in order before the
    /// platform loader's default search path.
    #[schemars(title = "Library Search Path")]
    pub search_paths: Vec<PathBuf>,
    /// Skip the platform loader's default search path.
    #[schemars(title = "Search Path Only")]
    pub search_paths_only: bool,
}
