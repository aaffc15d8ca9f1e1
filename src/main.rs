use std::path::PathBuf;

use clap::Parser;
use rsvp_guests::convert::{self, ConvertConfig};
use rsvp_guests::{GuestError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;
    let config = cli.into_config();
    let guests = convert::convert_workbook(&config)?;
    println!(
        "Wrote {} guests to {}",
        guests.len(),
        config.output.display()
    );
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| GuestError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert the wedding guest workbook into the RSVP guest list."
)]
struct Cli {
    /// Guest workbook to read.
    #[arg(long, hide = true)]
    input: Option<PathBuf>,

    /// Guest list file to write.
    #[arg(long, hide = true)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> ConvertConfig {
        let defaults = ConvertConfig::default();
        ConvertConfig {
            input: self.input.unwrap_or(defaults.input),
            output: self.output.unwrap_or(defaults.output),
            layout: defaults.layout,
        }
    }
}
