//! The line-oriented scan driver.
//!
//! [`Scanner`] consumes one input line at a time: `##` metadata lines are
//! skipped, a single `#` line supplies per-column tissue names, and every
//! other non-empty line becomes a transient [`Variant`] that is flagged,
//! gated, called, and possibly emitted. Memory use is constant in the
//! number of lines.

use crate::detect::caller::Strand;
use crate::detect::error::{Result, ScanError};
use crate::detect::record::{RnaSample, Variant, FIRST_RNA_COLUMN, HOM_ALT, HOM_REF};
use crate::detect::report::{qualifying_rows, EditRow};
use crate::detect::tokenize::fields;

/// DNA genotypes eligible for editing analysis. Heterozygous DNA collapses
/// the reference/alternate distinction and is excluded.
const ALLOWED_DNA_GENOTYPES: [&str; 2] = [HOM_REF, HOM_ALT];

/// Caller-facing knobs for a detection scan.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Strand the transcripts under analysis were sequenced from.
    pub strand: Strand,
    /// Tissue names fixing which columns are RNA samples (`names[i]` reads
    /// column `10 + i`). When absent, names come from the `#` header line
    /// and every column from 10 on is treated as an RNA sample.
    pub sample_names: Option<Vec<String>>,
    /// Drop records whose REF or ALT is longer than one base.
    pub exclude_indels: bool,
    /// Minimum DNA read depth.
    pub min_dna_depth: u32,
    /// Homozygosity cutoff in percent (0-100).
    pub min_homozygosity_percent: u32,
    /// Minimum RNA reads supporting the edit direction.
    pub min_edit_depth: u32,
    /// Maximum tolerated strand-bias statistic per RNA sample.
    pub max_strand_bias: f64,
    /// Quality filter threshold; the filter is off when `None`.
    pub quality_threshold: Option<i64>,
    /// Likelihood filter threshold; the filter is off when `None`.
    pub min_likelihood: Option<f64>,
}

impl DetectOptions {
    pub fn validate(&self) -> Result<()> {
        if self.min_homozygosity_percent > 100 {
            return Err(ScanError::InvalidInput(format!(
                "homozygosity percent must be between 0 and 100, got {}",
                self.min_homozygosity_percent
            )));
        }
        if let Some(names) = &self.sample_names {
            if names.is_empty() {
                return Err(ScanError::InvalidInput(
                    "sample name list is empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Stateful line-at-a-time scanner.
pub struct Scanner {
    options: DetectOptions,
    header_names: Option<Vec<String>>,
    line_number: u64,
    records_seen: u64,
    rows_emitted: u64,
}

impl Scanner {
    pub fn new(options: DetectOptions) -> Result<Self> {
        options.validate()?;
        Ok(Scanner {
            options,
            header_names: None,
            line_number: 0,
            records_seen: 0,
            rows_emitted: 0,
        })
    }

    /// Feed one input line; returns the rows it produced (usually none).
    ///
    /// Malformed data lines abort the scan with
    /// [`ScanError::MalformedRecord`] carrying the 1-based line number; the
    /// scanner never emits from a line it could not fully parse.
    pub fn accept(&mut self, line: &str) -> Result<Vec<EditRow>> {
        self.line_number += 1;

        if line.trim().is_empty() || line.starts_with("##") {
            return Ok(Vec::new());
        }
        if line.starts_with('#') {
            self.header_names = Some(fields(line).into_iter().map(str::to_string).collect());
            return Ok(Vec::new());
        }

        let line_number = self.line_number;
        let rows = self.scan_record(line).map_err(|err| match err {
            ScanError::Parse(reason) => ScanError::MalformedRecord {
                line: line_number,
                reason,
            },
            other => other,
        })?;
        self.records_seen += 1;
        self.rows_emitted += rows.len() as u64;
        Ok(rows)
    }

    fn scan_record(&mut self, line: &str) -> Result<Vec<EditRow>> {
        let mut variant = Variant::from_line(line, self.options.strand)?;
        let columns = fields(line);

        match &self.options.sample_names {
            Some(names) => {
                for (i, name) in names.iter().enumerate() {
                    let column = FIRST_RNA_COLUMN + i;
                    let field = columns.get(column).ok_or_else(|| {
                        ScanError::Parse(format!(
                            "missing RNA sample column {} for '{}'",
                            column, name
                        ))
                    })?;
                    variant.add_sample(RnaSample::from_field(field, name)?);
                }
            }
            None => {
                let header = self.header_names.as_ref().ok_or_else(|| {
                    ScanError::InvalidInput(
                        "data line seen before a # header line and no sample names given"
                            .to_string(),
                    )
                })?;
                for column in FIRST_RNA_COLUMN..columns.len() {
                    let name = header.get(column).ok_or_else(|| {
                        ScanError::Parse(format!(
                            "header line has no name for sample column {}",
                            column
                        ))
                    })?;
                    variant.add_sample(RnaSample::from_field(columns[column], name)?);
                }
            }
        }

        // Flag passes run on every record; the reportability gate reads them.
        variant.flag_genotype_differences();
        variant.flag_edit_depth(self.options.min_edit_depth);
        variant.flag_strand_bias(self.options.max_strand_bias);
        if let Some(min) = self.options.min_likelihood {
            variant.flag_likelihood(min);
        }

        if !self.reportable(&variant) {
            return Ok(Vec::new());
        }

        variant.call_samples();
        Ok(qualifying_rows(&variant))
    }

    fn reportable(&self, variant: &Variant) -> bool {
        if self.options.exclude_indels && !variant.indel_filter() {
            return false;
        }
        if let Some(threshold) = self.options.quality_threshold {
            if !variant.quality_filter(threshold) {
                return false;
            }
        }
        variant.genotype_filter(&ALLOWED_DNA_GENOTYPES)
            && variant.homozygosity_filter(self.options.min_homozygosity_percent)
            && variant.depth_filter(self.options.min_dna_depth)
            && variant.contains_edit()
    }

    /// Data records parsed so far.
    pub fn records_seen(&self) -> u64 {
        self.records_seen
    }

    /// Candidate rows produced so far.
    pub fn rows_emitted(&self) -> u64 {
        self.rows_emitted
    }
}
