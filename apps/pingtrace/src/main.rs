use anyhow::Result;
use clap::Parser;
use pingtrace_probe::{HopProber, SystemPinger};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pingtrace",
    version,
    about = "Hop-by-hop path discovery over the system ping utility"
)]
struct Cli {
    /// Target hostname or address.
    target: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let prober = HopProber::new(SystemPinger);
    let stdout = io::stdout();
    prober.run(&cli.target, &mut stdout.lock())?;

    Ok(())
}
