use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::cli::{LimitArgs, OutputFormat};
use crate::core::read::FastqRecord;
use crate::parsing::fastq::FastqReader;
use crate::parsing::paired::PairedFastqReader;

#[derive(Args)]
pub struct FastqArgs {
    /// Input FASTQ file, or R1 when --r2 is given (gzip if the name ends in .gz)
    #[arg(required = true)]
    pub input: PathBuf,

    /// R2 file of a paired-end run
    #[arg(long)]
    pub r2: Option<PathBuf>,

    /// Fail when R1 and R2 identifiers differ (ignoring /1 and /2 suffixes)
    #[arg(long, requires = "r2")]
    pub verify_ids: bool,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Running totals over a set of reads
#[derive(Debug, Default, Clone, Serialize)]
pub struct ReadStats {
    pub reads: u64,
    pub bases: u64,
    pub truncated: u64,
}

impl ReadStats {
    pub fn add(&mut self, record: &FastqRecord) {
        self.reads += 1;
        self.bases += record.len() as u64;
        if record.truncated {
            self.truncated += 1;
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Averages only
    pub fn mean_length(&self) -> f64 {
        if self.reads == 0 {
            0.0
        } else {
            self.bases as f64 / self.reads as f64
        }
    }
}

/// Execute fastq subcommand
///
/// # Errors
///
/// Returns an error if either file cannot be opened, a record is malformed,
/// or `--verify-ids` finds mismatched mates.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FastqArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let stats = match &args.r2 {
        None => vec![("reads", count_single(&args)?)],
        Some(r2) => {
            let (r1_stats, r2_stats) = count_paired(&args, r2)?;
            vec![("R1", r1_stats), ("R2", r2_stats)]
        }
    };

    if verbose {
        eprintln!("Finished reading {}", args.input.display());
    }

    match format {
        OutputFormat::Text => print_text(&stats),
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Tsv => print_tsv(&stats),
    }

    Ok(())
}

fn count_single(args: &FastqArgs) -> anyhow::Result<ReadStats> {
    let mut reader = FastqReader::open(&args.input, args.limits.into())?;
    let mut stats = ReadStats::default();
    while let Some(record) = reader.next_record()? {
        stats.add(&record);
    }
    reader.close();
    Ok(stats)
}

fn count_paired(args: &FastqArgs, r2: &Path) -> anyhow::Result<(ReadStats, ReadStats)> {
    let mut reader = PairedFastqReader::open(&args.input, r2, args.limits.into())?
        .with_id_check(args.verify_ids);
    let mut r1_stats = ReadStats::default();
    let mut r2_stats = ReadStats::default();
    while let Some(pair) = reader.next_pair()? {
        r1_stats.add(&pair.r1);
        r2_stats.add(&pair.r2);
    }
    reader.close();
    Ok((r1_stats, r2_stats))
}

fn print_text(stats: &[(&str, ReadStats)]) {
    for (label, s) in stats {
        println!("{label}: {} reads, {} bases", s.reads, s.bases);
        println!("  Mean length: {:.2}", s.mean_length());
        if s.truncated > 0 {
            println!("  Truncated: {}", s.truncated);
        }
    }
}

fn print_json(stats: &[(&str, ReadStats)]) -> anyhow::Result<()> {
    let output: serde_json::Map<String, serde_json::Value> = stats
        .iter()
        .map(|(label, s)| {
            (
                (*label).to_string(),
                serde_json::json!({
                    "reads": s.reads,
                    "bases": s.bases,
                    "mean_length": s.mean_length(),
                    "truncated": s.truncated,
                }),
            )
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(stats: &[(&str, ReadStats)]) {
    println!("source\treads\tbases\tmean_length\ttruncated");
    for (label, s) in stats {
        println!(
            "{label}\t{}\t{}\t{:.4}\t{}",
            s.reads,
            s.bases,
            s.mean_length(),
            s.truncated
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_stats() {
        let mut stats = ReadStats::default();
        assert!(stats.mean_length().abs() < f64::EPSILON);

        stats.add(&FastqRecord::new("a", b"ACGT".to_vec(), b"IIII".to_vec()));
        stats.add(&FastqRecord::new("b", b"AC".to_vec(), b"II".to_vec()));
        assert_eq!(stats.reads, 2);
        assert_eq!(stats.bases, 6);
        assert!((stats.mean_length() - 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.truncated, 0);
    }
}
