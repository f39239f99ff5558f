//! The variant-record model.
//!
//! One [`Variant`] is built per data line of the input: the genomic
//! position, its DNA call, and one owned [`RnaSample`] per RNA sample
//! column. Records are transient; each is constructed, filtered, possibly
//! emitted, and discarded before the next line is read.

use smartstring::{LazyCompact, SmartString};

use crate::detect::caller::Strand;
use crate::detect::error::{Result, ScanError};
use crate::detect::tokenize::{fields, fields_delimited};

/// Homozygous-reference genotype code.
pub const HOM_REF: &str = "0/0";
/// Heterozygous genotype code.
pub const HET: &str = "0/1";
/// Homozygous-alternate genotype code.
pub const HOM_ALT: &str = "1/1";

/// Sub-field delimiter within a sample column (genotype, likelihoods, ...).
pub const SAMPLE_DELIM: char = ':';
/// Delimiter within the likelihood sub-field.
pub const LIKELIHOOD_DELIM: char = ',';
/// Delimiter within the INFO column.
pub const INFO_DELIM: char = ';';

/// Minimum whitespace-tokenized columns on a data line: the fixed VCF
/// columns through FORMAT plus the DNA sample column.
pub const MIN_COLUMNS: usize = 10;

/// Column index of the first RNA sample field.
pub const FIRST_RNA_COLUMN: usize = 10;

/// One RNA sample's call at a variant position, with the evidence flags set
/// by the filter passes.
///
/// A sample is owned exclusively by its parent [`Variant`]; flags are plain
/// mutable fields written by the flag-setting passes and read by the
/// evidence aggregation.
#[derive(Debug, Clone)]
pub struct RnaSample {
    /// Identifying label, from the header line or the caller's name list.
    pub tissue: String,
    /// Coded genotype, e.g. `0/0`, `0/1`, `1/1`.
    pub genotype: String,
    /// Phred-scaled genotype likelihoods, best call first in VCF convention.
    pub likelihoods: Vec<f64>,
    /// Total read depth at this position for this sample.
    pub depth_total: f64,
    /// Read depth supporting the alternate allele.
    pub depth_variant: f64,
    /// Strand-bias statistic; lower is less biased.
    pub strand_bias: f64,
    /// RNA genotype differs from the DNA genotype.
    pub differs_from_dna: bool,
    /// Enough reads support the interpreted edit direction.
    pub sufficient_edit_depth: bool,
    /// Strand bias is at or below the configured ceiling.
    pub acceptable_strand_bias: bool,
    /// Runner-up genotype likelihood clears the optional threshold. Stays
    /// `true` unless the likelihood filter is enabled.
    pub confident_likelihood: bool,
    /// Reads supporting the interpreted edit direction.
    pub edit_depth: f64,
    /// `edit_depth / depth_total`; NaN when `depth_total` is zero.
    pub edit_fraction: f64,
    /// Base reported for this sample, set by the strand-aware caller.
    pub called_base: String,
}

impl RnaSample {
    /// Parse one colon-delimited sample field: genotype, likelihoods,
    /// depth_total, depth_variant, strand_bias. All five are mandatory.
    pub fn from_field(field: &str, tissue: &str) -> Result<Self> {
        let parts = fields_delimited(field, SAMPLE_DELIM);
        if parts.len() < 5 {
            return Err(ScanError::Parse(format!(
                "RNA sample field for '{}' has {} of 5 sub-fields: '{}'",
                tissue,
                parts.len(),
                field
            )));
        }

        Ok(RnaSample {
            tissue: tissue.to_string(),
            genotype: parts[0].to_string(),
            likelihoods: parse_likelihoods(parts[1])?,
            depth_total: parse_f64(parts[2], "RNA depth")?,
            depth_variant: parse_f64(parts[3], "RNA variant depth")?,
            strand_bias: parse_f64(parts[4], "strand bias")?,
            differs_from_dna: false,
            sufficient_edit_depth: false,
            acceptable_strand_bias: false,
            confident_likelihood: true,
            edit_depth: 0.0,
            edit_fraction: 0.0,
            called_base: String::new(),
        })
    }

    /// All evidence flags for this sample passed.
    #[inline]
    pub fn passes_all_flags(&self) -> bool {
        self.differs_from_dna
            && self.sufficient_edit_depth
            && self.acceptable_strand_bias
            && self.confident_likelihood
    }
}

/// One genomic position's DNA call plus its RNA samples.
#[derive(Debug, Clone)]
pub struct Variant {
    pub chromosome: SmartString<LazyCompact>,
    /// 1-based position.
    pub position: u64,
    /// Reference allele; single base when the record is not an indel.
    pub reference: String,
    /// Alternate allele; single base when the record is not an indel.
    pub alternate: String,
    /// Variant-call confidence score.
    pub quality: i64,
    pub dna_genotype: String,
    pub dna_likelihoods: Vec<f64>,
    pub dna_depth_total: f64,
    pub dna_depth_variant: f64,
    /// Average mapping quality, from the trailing `key=value` of INFO.
    pub average_mapping_quality: f64,
    pub strand: Strand,
    /// RNA samples in source-column order.
    pub samples: Vec<RnaSample>,
    /// DNA call, set by the strand-aware caller.
    pub called_base: String,
    pub(crate) calls_resolved: bool,
}

impl Variant {
    /// Parse one non-header data line.
    ///
    /// Column layout (0-indexed, whitespace-tokenized): 0 chromosome,
    /// 1 position, 3 reference, 4 alternate, 5 quality, 7 INFO, 9 DNA sample
    /// (colon-delimited genotype, likelihoods, depth, variant depth). RNA
    /// sample columns are attached separately via [`Variant::add_sample`].
    pub fn from_line(line: &str, strand: Strand) -> Result<Self> {
        let columns = fields(line);
        if columns.len() < MIN_COLUMNS {
            return Err(ScanError::Parse(format!(
                "expected at least {} columns, found {}",
                MIN_COLUMNS,
                columns.len()
            )));
        }

        let dna = fields_delimited(columns[9], SAMPLE_DELIM);
        if dna.len() < 4 {
            return Err(ScanError::Parse(format!(
                "DNA sample field has {} of 4 sub-fields: '{}'",
                dna.len(),
                columns[9]
            )));
        }

        Ok(Variant {
            chromosome: SmartString::from(columns[0]),
            position: parse_u64(columns[1], "position")?,
            reference: columns[3].to_string(),
            alternate: columns[4].to_string(),
            quality: parse_i64(columns[5], "quality")?,
            average_mapping_quality: mapping_quality_from_info(columns[7])?,
            dna_genotype: dna[0].to_string(),
            dna_likelihoods: parse_likelihoods(dna[1])?,
            dna_depth_total: parse_f64(dna[2], "DNA depth")?,
            dna_depth_variant: parse_f64(dna[3], "DNA variant depth")?,
            strand,
            samples: Vec::new(),
            called_base: String::new(),
            calls_resolved: false,
        })
    }

    /// Attach an RNA sample. Samples keep source-column order.
    pub fn add_sample(&mut self, sample: RnaSample) {
        self.samples.push(sample);
    }
}

/// Extract the average mapping quality from an INFO column.
///
/// The last `;`-delimited segment is read as `key=value` and its value taken
/// as the figure. This is a narrow convention matched to the upstream
/// caller's output, not a general INFO parser.
fn mapping_quality_from_info(info: &str) -> Result<f64> {
    let tail = fields_delimited(info, INFO_DELIM)
        .into_iter()
        .last()
        .ok_or_else(|| ScanError::Parse(format!("empty INFO field: '{}'", info)))?;
    let value = tail.splitn(2, '=').nth(1).ok_or_else(|| {
        ScanError::Parse(format!("trailing INFO segment is not key=value: '{}'", tail))
    })?;
    parse_f64(value, "average mapping quality")
}

fn parse_likelihoods(field: &str) -> Result<Vec<f64>> {
    fields_delimited(field, LIKELIHOOD_DELIM)
        .into_iter()
        .map(|value| parse_f64(value, "genotype likelihood"))
        .collect()
}

fn parse_f64(value: &str, what: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| ScanError::Parse(format!("{} is not numeric: '{}'", what, value)))
}

fn parse_u64(value: &str, what: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| ScanError::Parse(format!("{} is not an integer: '{}'", what, value)))
}

fn parse_i64(value: &str, what: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|_| ScanError::Parse(format!("{} is not an integer: '{}'", what, value)))
}
