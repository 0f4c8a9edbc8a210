use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ini::Document;

/// Reads an INI file and writes it back out in normalized form.
#[derive(Debug, Parser)]
#[command(name = "ini", version, about)]
struct Args {
    /// File to read.
    #[arg(env = "INI_INPUT", default_value = "test.ini")]
    input: PathBuf,

    /// File to write; created or truncated.
    #[arg(env = "INI_OUTPUT", default_value = "test2.ini")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let document = Document::read_file(&args.input).context("failed to parse ini file")?;
    document
        .write_file(&args.output)
        .context("failed to write ini file")?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        sections = document.len(),
        "done"
    );

    Ok(())
}
