use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Make near-white image backgrounds transparent, saving the result as PNG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Image file to process
    input: PathBuf,

    /// Destination PNG path (defaults to overwriting INPUT)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;

    let cli = Cli::parse();
    let output = cli.output.as_ref().unwrap_or(&cli.input);

    if let Err(e) = background_stripper::strip_file(&cli.input, output) {
        log::error!("remove background failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
