//! Chemistry toolkit seam.
//!
//! All chemistry (SMILES grammar, 2D coordinates, depiction layout) lives in
//! a [`Toolkit`] implementation. The depiction pipeline only sequences calls:
//! parse into a molecule handle, then draw that handle onto a canvas.

mod rdkit;

pub use rdkit::{RdkitLibrary, RdkitMolecule};

use crate::{error::DepictError, options::CanvasOptions};

/// A chemistry backend able to parse SMILES and draw molecules as SVG.
pub trait Toolkit {
    /// Parsed molecule handle. Owned by a single depiction call; the handle
    /// releases its native resources when dropped.
    type Molecule;

    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Backend version string, if the backend reports one.
    fn version(&self) -> Option<String>;

    /// Parse a SMILES string into a molecule handle.
    ///
    /// # Errors
    ///
    /// Returns [`DepictError::Parse`] if the backend rejects the input.
    fn parse_smiles(&self, smiles: &str)
        -> Result<Self::Molecule, DepictError>;

    /// Draw a parsed molecule onto a fresh canvas and return the finished
    /// drawing as SVG text.
    ///
    /// # Errors
    ///
    /// Returns [`DepictError::Render`] if the backend fails to draw.
    fn draw_svg(
        &self,
        molecule: &Self::Molecule,
        canvas: &CanvasOptions,
    ) -> Result<String, DepictError>;
}
