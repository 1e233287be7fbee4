use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// SVG rasterization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Raster", inline)]
#[serde(default)]
pub struct RasterOptions {
    /// Load system fonts for `<text>` elements. The toolkit normally draws
    /// labels as paths, so this only matters for text-based drawings.
    #[schemars(title = "System Fonts")]
    pub load_system_fonts: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
        }
    }
}
