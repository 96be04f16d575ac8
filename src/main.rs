use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wcount::{Cli, USAGE, Wcount, WcountError};

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    debug!("Parsed command line arguments: {:?}", cli);
    let wcount = match Wcount::from_cli(cli) {
        Ok(wcount) => wcount,
        Err(e @ WcountError::MissingArgument) => {
            println!("{USAGE}");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let summary = wcount.run()?;
    debug!("Report written to {}", summary.output.display());
    println!("{}", summary.timing());
    Ok(())
}
