//! The depiction pipeline: SMILES in, image file out.
//!
//! ```no_run
//! # use depict::{Options, RdkitLibrary, Depictor};
//! # fn main() -> Result<(), depict::DepictError> {
//! let options = Options::default();
//! let library = RdkitLibrary::load(&options.toolkit)?;
//! let depictor = Depictor::new(&library, options)?;
//! let written = depictor.depict("c1ccc(C)c(C)c1C")?;
//! # let _ = written;
//! # Ok(())
//! # }
//! ```

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    error::DepictError,
    options::{OutputFormat, Options},
    raster::rasterize_svg,
    toolkit::{RdkitLibrary, Toolkit},
};

/// A finished depiction held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Depiction {
    /// File format of [`Self::bytes`].
    pub format: OutputFormat,
    /// Encoded image.
    pub bytes: Vec<u8>,
}

/// Sequences toolkit calls to turn SMILES into image files.
#[derive(Debug)]
pub struct Depictor<T: Toolkit> {
    toolkit: T,
    options: Options,
}

impl<T: Toolkit> Depictor<T> {
    /// Create a depictor over `toolkit`.
    ///
    /// # Errors
    ///
    /// Returns [`DepictError::InvalidOptions`] if `options` fail validation.
    pub fn new(toolkit: T, options: Options) -> Result<Self, DepictError> {
        options.validate()?;
        log::debug!(
            "using {} {}",
            toolkit.name(),
            toolkit.version().unwrap_or_default()
        );
        Ok(Self { toolkit, options })
    }

    /// Options this depictor draws with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse and draw `smiles` without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`DepictError::EmptyInput`] for blank input, and propagates
    /// parse, render and rasterize failures.
    pub fn render(&self, smiles: &str) -> Result<Depiction, DepictError> {
        let smiles = smiles.trim();
        if smiles.is_empty() {
            return Err(DepictError::EmptyInput);
        }

        let molecule = self.toolkit.parse_smiles(smiles)?;
        let canvas = &self.options.canvas;
        let svg = self.toolkit.draw_svg(&molecule, canvas)?;
        drop(molecule);

        let format = self.options.output.format();
        let bytes = match format {
            OutputFormat::Svg => svg.into_bytes(),
            OutputFormat::Png => rasterize_svg(
                &svg,
                canvas.width,
                canvas.height,
                &self.options.raster,
            )?,
        };
        Ok(Depiction { format, bytes })
    }

    /// Render `smiles` and write it to the configured output path, replacing
    /// any existing file. Nothing is written unless rendering succeeds, and
    /// an existing file is only replaced once the new one is complete.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::render`] failures and I/O errors from the write.
    pub fn depict(&self, smiles: &str) -> Result<PathBuf, DepictError> {
        let depiction = self.render(smiles)?;
        let path = &self.options.output.path;
        write_output(path, &depiction.bytes)?;
        log::info!(
            "wrote {} ({} bytes) for {}",
            path.display(),
            depiction.bytes.len(),
            smiles.trim()
        );
        Ok(path.clone())
    }
}

/// Write through a temporary file in the destination directory and rename it
/// over `path`, so a failed write never leaves a truncated image behind.
fn write_output(path: &Path, bytes: &[u8]) -> Result<(), DepictError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    let _file = staged.persist(path).map_err(|e| DepictError::Io(e.error))?;
    Ok(())
}

/// Load RDKit as configured and depict `smiles` in one call.
///
/// # Errors
///
/// Returns [`DepictError::LibraryLoad`] before anything is drawn if the
/// library is unavailable, otherwise as [`Depictor::depict`].
pub fn depict_with_rdkit(
    smiles: &str,
    options: &Options,
) -> Result<PathBuf, DepictError> {
    options.validate()?;
    let library = RdkitLibrary::load(&options.toolkit)?;
    Depictor::new(&library, options.clone())?.depict(smiles)
}
