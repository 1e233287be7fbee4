use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Largest canvas side, in pixels, that options may request.
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Drawing-surface parameters handed to the toolkit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Canvas", inline)]
#[serde(default)]
pub struct CanvasOptions {
    /// Canvas width in pixels.
    #[schemars(title = "Width", range(min = 1, max = MAX_CANVAS_SIDE))]
    pub width: u32,
    /// Canvas height in pixels.
    #[schemars(title = "Height", range(min = 1, max = MAX_CANVAS_SIDE))]
    pub height: u32,
    /// Toolkit scaling factor (pixels per coordinate unit when auto-scaling).
    /// Does not change the canvas size.
    #[schemars(title = "Scaling Factor", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub scaling_factor: f64,
    /// Label every atom with its index.
    #[schemars(title = "Atom Indices")]
    pub add_atom_indices: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            scaling_factor: 2.0,
            add_atom_indices: true,
        }
    }
}
