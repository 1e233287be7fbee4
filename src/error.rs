//! Crate-level error types.

use std::{fmt, path::PathBuf};

/// Errors produced by the depict crate.
#[derive(Debug)]
pub enum DepictError {
    /// The native toolkit library could not be loaded from any location.
    LibraryLoad {
        /// Every location that was tried, in order.
        attempted: Vec<PathBuf>,
        /// Loader error from the last attempt.
        source: libloading::Error,
    },
    /// The library loaded but lacks a required entry point.
    MissingSymbol {
        /// Name of the missing symbol.
        symbol: &'static str,
        /// Loader error for the lookup.
        source: libloading::Error,
    },
    /// The SMILES input was empty or whitespace only.
    EmptyInput,
    /// The toolkit rejected the SMILES input.
    Parse(String),
    /// The toolkit failed to draw a parsed molecule.
    Render(String),
    /// The toolkit's vector drawing could not be rasterized.
    Rasterize(String),
    /// Options failed validation.
    InvalidOptions(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for DepictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibraryLoad { attempted, source } => {
                write!(f, "failed to load native toolkit library ({source}); tried: ")?;
                for (i, path) in attempted.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", path.display())?;
                }
                Ok(())
            }
            Self::MissingSymbol { symbol, source } => {
                write!(f, "toolkit library has no `{symbol}` symbol: {source}")
            }
            Self::EmptyInput => f.write_str("SMILES input is empty"),
            Self::Parse(msg) => write!(f, "SMILES parse error: {msg}"),
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::Rasterize(msg) => write!(f, "rasterize error: {msg}"),
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DepictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LibraryLoad { source, .. }
            | Self::MissingSymbol { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DepictError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
