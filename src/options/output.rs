use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image file format of the written depiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rasterized PNG.
    Png,
    /// The toolkit's vector drawing, written as-is.
    Svg,
}

impl OutputFormat {
    /// Pick the format from a path's extension. Anything that is not `.svg`
    /// (case-insensitive) is PNG.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}

/// Where the depiction is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Output", inline)]
#[serde(default)]
pub struct OutputOptions {
    /// Destination file. Relative paths resolve against the working
    /// directory; an existing file is replaced.
    #[schemars(title = "Path")]
    pub path: PathBuf,
}

impl OutputOptions {
    /// Format implied by [`Self::path`].
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_path(&self.path)
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("test.png"),
        }
    }
}
