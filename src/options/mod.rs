//! Depiction options with TOML file support.
//!
//! Every tweakable setting (canvas, output file, toolkit search path,
//! rasterization) is consolidated here. Defaults reproduce the classic
//! depiction: a 600×600 canvas, scaling factor 2.0, atom indices shown,
//! written to `test.png`.

mod canvas;
mod output;
mod raster;
mod toolkit;

use std::path::Path;

pub use canvas::{CanvasOptions, MAX_CANVAS_SIDE};
pub use output::{OutputFormat, OutputOptions};
pub use raster::RasterOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use toolkit::ToolkitOptions;

use crate::error::DepictError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[canvas]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drawing-surface parameters.
    pub canvas: CanvasOptions,
    /// Output file location.
    pub output: OutputOptions,
    /// Native library lookup.
    pub toolkit: ToolkitOptions,
    /// SVG rasterization settings.
    pub raster: RasterOptions,
}

impl Options {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DepictError> {
        let content = std::fs::read_to_string(path).map_err(DepictError::Io)?;
        toml::from_str(&content)
            .map_err(|e| DepictError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DepictError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DepictError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(DepictError::Io)?;
            }
        }
        std::fs::write(path, content).map_err(DepictError::Io)
    }

    /// Check values the toolkit would otherwise reject or misdraw.
    pub fn validate(&self) -> Result<(), DepictError> {
        let canvas = &self.canvas;
        let side = 1..=MAX_CANVAS_SIDE;
        if !side.contains(&canvas.width) || !side.contains(&canvas.height) {
            return Err(DepictError::InvalidOptions(format!(
                "canvas sides must be 1..={MAX_CANVAS_SIDE}, got {}x{}",
                canvas.width, canvas.height
            )));
        }
        if !canvas.scaling_factor.is_finite() || canvas.scaling_factor <= 0.0
        {
            return Err(DepictError::InvalidOptions(format!(
                "scaling factor must be positive, got {}",
                canvas.scaling_factor
            )));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(DepictError::InvalidOptions(
                "output path is empty".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn defaults_match_classic_depiction() {
        let opts = Options::default();
        assert_eq!(opts.canvas.width, 600);
        assert_eq!(opts.canvas.height, 600);
        assert_eq!(opts.canvas.scaling_factor, 2.0);
        assert!(opts.canvas.add_atom_indices);
        assert_eq!(opts.output.path, PathBuf::from("test.png"));
        assert_eq!(opts.output.format(), OutputFormat::Png);
        assert!(opts.toolkit.search_paths.is_empty());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[canvas]
width = 300

[toolkit]
search_paths = ["/opt/rdkit/lib"]
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.canvas.width, 300);
        // Everything else should be default
        assert_eq!(opts.canvas.height, 600);
        assert!(opts.canvas.add_atom_indices);
        assert_eq!(opts.output.path, PathBuf::from("test.png"));
        assert_eq!(
            opts.toolkit.search_paths,
            vec![PathBuf::from("/opt/rdkit/lib")]
        );
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("small.toml");
        let mut opts = Options::default();
        opts.canvas.width = 200;
        opts.canvas.add_atom_indices = false;
        opts.output.path = PathBuf::from("out/mol.svg");

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.output.format(), OutputFormat::Svg);
    }

    #[test]
    fn load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[canvas]\nwidth = \"wide\"\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(DepictError::OptionsParse(_))
        ));
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut opts = Options::default();
        opts.canvas.height = 0;
        assert!(matches!(
            opts.validate(),
            Err(DepictError::InvalidOptions(_))
        ));

        let mut opts = Options::default();
        opts.canvas.scaling_factor = f64::NAN;
        assert!(opts.validate().is_err());
        opts.canvas.scaling_factor = -2.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.output.path = PathBuf::new();
        assert!(opts.validate().is_err());
    }

    #[test]
    fn validate_caps_canvas_at_schema_maximum() {
        let mut opts = Options::default();
        opts.canvas.width = MAX_CANVAS_SIDE;
        opts.canvas.height = MAX_CANVAS_SIDE;
        assert!(opts.validate().is_ok());

        opts.canvas.width = MAX_CANVAS_SIDE + 1;
        assert!(matches!(
            opts.validate(),
            Err(DepictError::InvalidOptions(_))
        ));

        opts.canvas.width = 200_000;
        opts.canvas.height = 200_000;
        assert!(matches!(
            opts.validate(),
            Err(DepictError::InvalidOptions(_))
        ));

        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let width = &schema_value["properties"]["canvas"]["properties"]["width"];
        assert_eq!(width["maximum"], MAX_CANVAS_SIDE);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a/b.SVG")),
            OutputFormat::Svg
        );
        assert_eq!(OutputFormat::from_path(Path::new("b.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), OutputFormat::Png);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("canvas"));
        assert!(props.contains_key("output"));
        assert!(props.contains_key("toolkit"));
        assert!(props.contains_key("raster"));

        let canvas = &props["canvas"]["properties"];
        assert!(canvas.get("scaling_factor").is_some());
        assert!(canvas.get("add_atom_indices").is_some());
        let toolkit = &props["toolkit"]["properties"];
        assert!(toolkit.get("search_paths").is_some());
        assert!(toolkit.get("search_paths_only").is_some());
    }
}
