//! `depict` command line: render a SMILES string to an image file.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use depict::{depict_with_rdkit, Options, DEFAULT_SMILES};

/// Render a 2D depiction of a molecule from its SMILES notation.
#[derive(Debug, Parser)]
#[command(name = "depict", version, about)]
struct Cli {
    /// SMILES string to depict.
    #[arg(default_value = DEFAULT_SMILES)]
    smiles: String,

    /// TOML options file; command line flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (`.svg` writes the vector drawing, anything else PNG).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Toolkit scaling factor.
    #[arg(long)]
    scale: Option<f64>,

    /// Do not label atoms with their indices.
    #[arg(long)]
    no_atom_indices: bool,

    /// Directory or file to search for the rdkitcffi library (repeatable).
    #[arg(short = 'L', long = "library-path")]
    library_paths: Vec<PathBuf>,

    /// Print the options file JSON schema and exit.
    #[arg(long)]
    print_schema: bool,

    /// Write the effective options to a TOML file and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> anyhow::Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::load(path).with_context(|| {
                format!("failed to load options from {}", path.display())
            })?,
            None => Options::default(),
        };
        if let Some(output) = &self.output {
            options.output.path.clone_from(output);
        }
        if let Some(width) = self.width {
            options.canvas.width = width;
        }
        if let Some(height) = self.height {
            options.canvas.height = height;
        }
        if let Some(scale) = self.scale {
            options.canvas.scaling_factor = scale;
        }
        if self.no_atom_indices {
            options.canvas.add_atom_indices = false;
        }
        options
            .toolkit
            .search_paths
            .extend(self.library_paths.iter().cloned());
        Ok(options)
    }
}

fn print_schema() -> anyhow::Result<()> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{schema}")?;
    Ok(())
}

fn write_config(options: &Options, path: &Path) -> anyhow::Result<()> {
    options
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote options to {}", path.display());
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.print_schema {
        return print_schema();
    }
    let options = cli.options()?;
    if let Some(path) = &cli.write_config {
        return write_config(&options, path);
    }
    let written = depict_with_rdkit(&cli.smiles, &options)
        .with_context(|| format!("failed to depict {:?}", cli.smiles))?;
    log::info!("depiction saved to {}", written.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
