// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test code may unwrap and panic freely
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! 2D molecule depiction from SMILES through a native chemistry toolkit.
//!
//! All chemistry (SMILES parsing, 2D coordinate generation, depiction
//! layout) is done by RDKit, loaded at runtime from its MinimalLib C library
//! (`rdkitcffi`). This crate sequences the calls, owns the native handles for
//! the duration of one depiction, rasterizes the toolkit's SVG to PNG and
//! writes the file.
//!
//! # Key entry points
//!
//! - [`RdkitLibrary::load`] - explicit toolkit initialization
//! - [`Depictor`] - parse, draw and write one depiction at a time
//! - [`Options`] - canvas, output, toolkit and raster configuration with
//!   TOML file support
//! - [`depict_with_rdkit`] - load the toolkit and depict in one call
//!
//! # Threading
//!
//! Everything is synchronous. Molecule handles are neither `Send` nor `Sync`
//! and live only for the call that created them.

pub mod depict;
pub mod error;
pub mod options;
pub mod raster;
pub mod toolkit;

pub use depict::{depict_with_rdkit, Depiction, Depictor};
pub use error::DepictError;
pub use options::{
    CanvasOptions, Options, OutputFormat, OutputOptions, RasterOptions,
    ToolkitOptions, MAX_CANVAS_SIDE,
};
pub use toolkit::{RdkitLibrary, RdkitMolecule, Toolkit};

/// SMILES depicted when none is given: a trimethyl-substituted benzene ring.
pub const DEFAULT_SMILES: &str = "c1ccc(C)c(C)c1C";
