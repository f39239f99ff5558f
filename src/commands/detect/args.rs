use editscan_lib::detect::{DetectOptions, Strand};
use std::path::PathBuf;
use structopt::StructOpt;

/// CLI arguments for the `detect` subcommand.
#[derive(Debug, Clone, StructOpt)]
#[structopt(author, name = "detect")]
pub struct DetectArgs {
    /// Input variant file (`-` or omit for stdin; `.gz` decoded transparently).
    pub input: Option<PathBuf>,

    /// Output path (stdout when omitted; gzip when the path ends in `.gz`).
    #[structopt(long, short = "o")]
    pub output: Option<PathBuf>,

    /// Genomic strand of the transcripts under analysis.
    #[structopt(long, short = "s", default_value = "+")]
    pub strand: Strand,

    /// Comma-separated tissue names for the RNA sample columns, in column
    /// order. Overrides the names recovered from the `#` header line.
    #[structopt(long = "names", short = "n", use_delimiter = true)]
    pub sample_names: Option<Vec<String>>,

    /// Exclude indel records (REF or ALT longer than one base).
    #[structopt(long, short = "x")]
    pub exclude_indels: bool,

    /// Minimum DNA read depth.
    #[structopt(long, short = "d", default_value = "10")]
    pub min_dna_depth: u32,

    /// Percent of DNA reads that must support (or contradict) the variant
    /// for the DNA call to count as homozygous.
    #[structopt(long, default_value = "95")]
    pub min_homozygosity: u32,

    /// Minimum RNA reads supporting the edit direction.
    #[structopt(long, short = "e", default_value = "5")]
    pub min_edit_depth: u32,

    /// Maximum tolerated strand-bias statistic per RNA sample.
    #[structopt(long, short = "b", default_value = "0.1")]
    pub max_strand_bias: f64,

    /// Minimum variant quality score; the quality filter is off when unset.
    #[structopt(long, short = "q")]
    pub quality_threshold: Option<i64>,

    /// Minimum runner-up genotype likelihood per RNA sample; off when unset.
    #[structopt(long)]
    pub min_likelihood: Option<f64>,
}

impl From<&DetectArgs> for DetectOptions {
    fn from(args: &DetectArgs) -> DetectOptions {
        DetectOptions {
            strand: args.strand,
            sample_names: args.sample_names.clone(),
            exclude_indels: args.exclude_indels,
            min_dna_depth: args.min_dna_depth,
            min_homozygosity_percent: args.min_homozygosity,
            min_edit_depth: args.min_edit_depth,
            max_strand_bias: args.max_strand_bias,
            quality_threshold: args.quality_threshold,
            min_likelihood: args.min_likelihood,
        }
    }
}
