use clap::Parser;
use tracing_subscriber::EnvFilter;

use fastx_genome::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fastx_genome=debug,info")
    } else {
        EnvFilter::new("fastx_genome=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Find(args) => {
            cli::find::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Fasta(args) => {
            cli::fasta::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Fastq(args) => {
            cli::fastq::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
