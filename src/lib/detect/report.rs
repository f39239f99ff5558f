//! Evidence aggregation into reportable rows.
//!
//! Row content is computed here as a plain struct and serialized by the
//! writer elsewhere, so tests can assert on fields without capturing
//! process output.

use serde::Serialize;
use smartstring::{LazyCompact, SmartString};

use crate::detect::caller::Strand;
use crate::detect::record::Variant;

/// One reportable (variant, RNA sample) pair.
///
/// Serialized tab-separated in field order; a variant with N qualifying
/// samples produces N rows.
#[derive(Debug, Clone, Serialize)]
pub struct EditRow {
    pub chromosome: SmartString<LazyCompact>,
    pub position: u64,
    pub strand: Strand,
    /// DNA-to-RNA base transition, e.g. `AtoG`.
    pub transition: String,
    pub dna_depth_total: f64,
    pub dna_depth_variant: f64,
    pub rna_depth_total: f64,
    pub edit_depth: f64,
    pub edit_fraction: f64,
    pub strand_bias: f64,
    pub average_mapping_quality: f64,
    pub tissue: String,
}

/// Build one row per RNA sample whose evidence flags all passed.
///
/// [`Variant::call_samples`] must already have run so the called bases are
/// resolved.
pub fn qualifying_rows(variant: &Variant) -> Vec<EditRow> {
    variant
        .samples
        .iter()
        .filter(|sample| sample.passes_all_flags())
        .map(|sample| EditRow {
            chromosome: variant.chromosome.clone(),
            position: variant.position,
            strand: variant.strand,
            transition: format!("{}to{}", variant.called_base, sample.called_base),
            dna_depth_total: variant.dna_depth_total,
            dna_depth_variant: variant.dna_depth_variant,
            rna_depth_total: sample.depth_total,
            edit_depth: sample.edit_depth,
            edit_fraction: sample.edit_fraction,
            strand_bias: sample.strand_bias,
            average_mapping_quality: variant.average_mapping_quality,
            tissue: sample.tissue.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::record::RnaSample;

    #[test]
    fn test_one_row_per_qualifying_sample() {
        let line = "2\t800\t.\tA\tG\t80\t.\tMQ=39.5\tGT:PL:DP:DV\t0/0:0,90,255:25:1";
        let mut var = Variant::from_line(line, Strand::Forward).unwrap();
        for (tissue, field) in [
            ("liver", "0/0:0,90,255:15:0:0.1"),
            ("muscle", "0/1:90,0,255:18:7:0.05"),
            ("brain", "0/1:90,0,255:16:6:0.8"),
        ] {
            var.add_sample(RnaSample::from_field(field, tissue).unwrap());
        }
        var.flag_genotype_differences();
        var.flag_edit_depth(3);
        var.flag_strand_bias(0.2);
        var.call_samples();

        let rows = qualifying_rows(&var);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.tissue, "muscle");
        assert_eq!(row.transition, "AtoG");
        assert_eq!(row.position, 800);
        assert_eq!(row.dna_depth_total, 25.0);
        assert_eq!(row.dna_depth_variant, 1.0);
        assert_eq!(row.rna_depth_total, 18.0);
        assert_eq!(row.edit_depth, 7.0);
        assert!((row.edit_fraction - 7.0 / 18.0).abs() < 1e-9);
        assert_eq!(row.strand_bias, 0.05);
        assert!((row.average_mapping_quality - 39.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_rows_when_nothing_qualifies() {
        let line = "2\t800\t.\tA\tG\t80\t.\tMQ=39.5\tGT:PL:DP:DV\t0/0:0,90,255:25:1";
        let mut var = Variant::from_line(line, Strand::Forward).unwrap();
        var.add_sample(RnaSample::from_field("0/0:0,90,255:15:0:0.1", "liver").unwrap());
        var.flag_genotype_differences();
        var.flag_edit_depth(3);
        var.flag_strand_bias(0.2);
        var.call_samples();
        assert!(qualifying_rows(&var).is_empty());
    }
}
