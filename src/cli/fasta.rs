use std::path::PathBuf;

use clap::Args;

use crate::cli::{LimitArgs, OutputFormat};
use crate::core::sequence::SequenceSummary;
use crate::parsing::fasta::FastaReader;

#[derive(Args)]
pub struct FastaArgs {
    /// Input FASTA file (gzip if the name ends in .gz)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Compute the MD5 of each upper-cased sequence
    #[arg(long)]
    pub md5: bool,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Execute fasta subcommand
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a record is malformed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FastaArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut reader = FastaReader::open(&args.input, args.limits.into())?;

    // Summaries only; bases are dropped as soon as each record is measured
    let mut summaries = Vec::new();
    while let Some(seq) = reader.next_record()? {
        summaries.push(seq.summary(args.md5));
    }
    reader.close();

    if verbose {
        let total: u64 = summaries.iter().map(|s| s.length).sum();
        eprintln!(
            "Read {} sequences ({total} bases) from {}",
            summaries.len(),
            args.input.display()
        );
    }

    match format {
        OutputFormat::Text => print_text(&summaries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Tsv => print_tsv(&summaries, args.md5),
    }

    Ok(())
}

fn print_text(summaries: &[SequenceSummary]) {
    for s in summaries {
        match &s.md5 {
            Some(md5) => println!("Saw {} length {} md5 {md5}", s.id, s.length),
            None => println!("Saw {} length {}", s.id, s.length),
        }
    }
}

fn print_tsv(summaries: &[SequenceSummary], with_md5: bool) {
    if with_md5 {
        println!("id\tlength\tmd5");
    } else {
        println!("id\tlength");
    }
    for s in summaries {
        match &s.md5 {
            Some(md5) => println!("{}\t{}\t{md5}", s.id, s.length),
            None => println!("{}\t{}", s.id, s.length),
        }
    }
}
