//! The editing-evidence filter pipeline.
//!
//! Two kinds of pass run over each record: pure predicates on the DNA call
//! (indel, quality, genotype, homozygosity, depth) and flag-setters that
//! mutate the owned RNA samples (genotype difference, edit depth, strand
//! bias, and the optional likelihood gate). Flag-setters must run before
//! [`Variant::contains_edit`] reads the flags; the predicates are
//! independent of each other and of ordering.

use crate::detect::record::{Variant, HOM_REF};

impl Variant {
    /// True when both REF and ALT are a single base, i.e. the record is not
    /// an indel.
    pub fn indel_filter(&self) -> bool {
        self.reference.len() == 1 && self.alternate.len() == 1
    }

    /// True when the variant quality score reaches `threshold`.
    pub fn quality_filter(&self, threshold: i64) -> bool {
        self.quality >= threshold
    }

    /// True when the DNA genotype is one of `allowed`.
    pub fn genotype_filter(&self, allowed: &[&str]) -> bool {
        allowed.iter().any(|genotype| *genotype == self.dna_genotype)
    }

    /// True when the fraction of DNA reads supporting the variant is
    /// strongly for or strongly against it: `p >= percent` or
    /// `p <= 100 - percent` with `p = 100 * dv / dp`.
    ///
    /// Zero total depth leaves the fraction undefined and fails the filter.
    pub fn homozygosity_filter(&self, percent: u32) -> bool {
        if self.dna_depth_total == 0.0 {
            return false;
        }
        let percent_variant = (self.dna_depth_variant / self.dna_depth_total) * 100.0;
        percent_variant >= f64::from(percent) || percent_variant <= f64::from(100 - percent.min(100))
    }

    /// True when the DNA read depth reaches `min_depth`.
    pub fn depth_filter(&self, min_depth: u32) -> bool {
        self.dna_depth_total >= f64::from(min_depth)
    }

    /// Set `differs_from_dna` on every RNA sample.
    pub fn flag_genotype_differences(&mut self) {
        let dna_genotype = self.dna_genotype.clone();
        for sample in &mut self.samples {
            sample.differs_from_dna = sample.genotype != dna_genotype;
        }
    }

    /// Set `edit_depth`, `edit_fraction`, and `sufficient_edit_depth` on
    /// every RNA sample.
    ///
    /// With homozygous-reference DNA the edit evidence is the
    /// variant-supporting reads; with non-reference DNA it is the
    /// reference-supporting reads, since the DNA already carries the
    /// variant. A sample with zero total depth gets a NaN fraction and
    /// fails the depth flag outright.
    pub fn flag_edit_depth(&mut self, min_depth: u32) {
        let dna_is_hom_ref = self.dna_genotype == HOM_REF;
        for sample in &mut self.samples {
            sample.edit_depth = if dna_is_hom_ref {
                sample.depth_variant
            } else {
                sample.depth_total - sample.depth_variant
            };
            if sample.depth_total == 0.0 {
                sample.edit_fraction = f64::NAN;
                sample.sufficient_edit_depth = false;
            } else {
                sample.edit_fraction = sample.edit_depth / sample.depth_total;
                sample.sufficient_edit_depth = sample.edit_depth >= f64::from(min_depth);
            }
        }
    }

    /// Set `acceptable_strand_bias` on every RNA sample.
    pub fn flag_strand_bias(&mut self, max_bias: f64) {
        for sample in &mut self.samples {
            sample.acceptable_strand_bias = sample.strand_bias <= max_bias;
        }
    }

    /// Optional confidence gate on the genotype likelihoods: the runner-up
    /// Phred-scaled likelihood must reach `min` (the called genotype's own
    /// score is the smallest, so the runner-up measures the margin of the
    /// call). Off by default; samples keep `confident_likelihood == true`
    /// unless this pass runs.
    pub fn flag_likelihood(&mut self, min: f64) {
        for sample in &mut self.samples {
            sample.confident_likelihood =
                second_smallest(&sample.likelihoods).map_or(false, |pl| pl >= min);
        }
    }

    /// True when at least one RNA sample passed every evidence flag.
    pub fn contains_edit(&self) -> bool {
        self.samples.iter().any(|sample| sample.passes_all_flags())
    }
}

fn second_smallest(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(sorted[1])
}
