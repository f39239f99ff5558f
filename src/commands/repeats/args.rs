use editscan_lib::repeats::RepeatColumns;
use std::path::PathBuf;
use structopt::StructOpt;

/// CLI arguments for the `repeats` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "repeats")]
pub struct RepeatsArgs {
    /// Query file: whitespace-separated lines with chromosome in column 0,
    /// position in column 1, and strand in column 2 (used with --stranded).
    pub queries: PathBuf,

    /// Repeat annotation file (RepeatMasker `.out` layout by default).
    #[structopt(long, short = "r")]
    pub annotation: PathBuf,

    /// Output path (stdout when omitted; gzip when the path ends in `.gz`).
    #[structopt(long, short = "o")]
    pub output: Option<PathBuf>,

    /// Require the query strand to match the subject strand.
    #[structopt(long)]
    pub stranded: bool,

    /// Use the file-order linear scan instead of the interval index.
    #[structopt(long)]
    pub linear: bool,

    /// Worker threads for parsing the annotation.
    #[structopt(long, short = "t", default_value = "4")]
    pub threads: usize,

    /// Annotation column holding the subject chromosome (0-based).
    #[structopt(long, default_value = "4")]
    pub chrom_col: usize,

    /// Annotation column holding the interval start (0-based).
    #[structopt(long, default_value = "5")]
    pub start_col: usize,

    /// Annotation column holding the interval end (0-based).
    #[structopt(long, default_value = "6")]
    pub end_col: usize,

    /// Annotation column holding the subject strand (0-based).
    #[structopt(long, default_value = "8")]
    pub strand_col: usize,

    /// Annotation column holding the repeat name (0-based).
    #[structopt(long, default_value = "9")]
    pub name_col: usize,

    /// Annotation column holding the repeat family (0-based).
    #[structopt(long, default_value = "10")]
    pub family_col: usize,
}

impl RepeatsArgs {
    pub fn columns(&self) -> RepeatColumns {
        RepeatColumns {
            chrom: self.chrom_col,
            start: self.start_col,
            end: self.end_col,
            strand: self.strand_col,
            name: self.name_col,
            family: self.family_col,
        }
    }
}
