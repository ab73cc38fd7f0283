use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::catalog::genome::GenomeIndex;
use crate::cli::{LimitArgs, OutputFormat};
use crate::utils::validation::MAX_GENOME_SEQS;

#[derive(Args)]
pub struct FindArgs {
    /// FASTA file holding the genome (gzip if the name ends in .gz)
    #[arg(short = 'f', long, required = true)]
    pub fasta: PathBuf,

    /// Identifier of the sequence to find
    #[arg(short = 'I', long, required = true)]
    pub id: String,

    /// Maximum number of sequences the genome may contain
    #[arg(long, default_value_t = MAX_GENOME_SEQS)]
    pub max_sequences: usize,

    #[command(flatten)]
    pub limits: LimitArgs,
}

#[derive(Debug, Serialize)]
struct FindResult<'a> {
    id: &'a str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<u64>,
}

/// Execute find subcommand
///
/// A missing identifier is reported, not treated as an error.
///
/// # Errors
///
/// Returns an error if the genome cannot be opened or parsed, or holds more
/// than `--max-sequences` records.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let genome =
        GenomeIndex::from_fasta_path(&args.fasta, args.limits.into(), args.max_sequences)?;

    if verbose {
        eprintln!(
            "Loaded {} sequences ({} bases) from {}",
            genome.len(),
            genome.total_bases(),
            args.fasta.display()
        );
    }

    let result = match genome.find(&args.id)? {
        Some(seq) => FindResult {
            id: &args.id,
            found: true,
            length: Some(seq.len() as u64),
        },
        None => FindResult {
            id: &args.id,
            found: false,
            length: None,
        },
    };

    match format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => print_tsv(&result),
    }

    Ok(())
}

fn print_text(result: &FindResult) {
    match result.length {
        Some(length) => println!("Found {} in genome. Length = {length}", result.id),
        None => println!("Could not find {} in genome.", result.id),
    }
}

fn print_tsv(result: &FindResult) {
    println!("id\tfound\tlength");
    println!(
        "{}\t{}\t{}",
        result.id,
        result.found,
        result.length.map_or_else(|| "NA".to_string(), |l| l.to_string())
    );
}
