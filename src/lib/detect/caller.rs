//! Strand-aware base calling.
//!
//! A variant record is always written against the forward genomic strand,
//! but editing evidence is interpreted on the transcript's strand. When the
//! transcript sits on the reverse strand the REF/ALT alleles are complemented
//! exactly once before any base is called, so that reported transitions read
//! in the direction of the transcript (an A-to-G edit on the reverse strand
//! is recorded as T-to-C by the caller otherwise).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::detect::record::{Variant, HET, HOM_REF};

/// Genomic strand of the transcripts under analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl FromStr for Strand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Err(format!("Invalid strand: {}. Valid strands: +, -", s)),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// DNA complement for the four unambiguous bases; anything else passes
/// through unchanged.
#[inline]
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

/// Complement an allele string base by base.
pub fn complement_allele(allele: &str) -> String {
    allele.chars().map(complement_base).collect()
}

impl Variant {
    /// Flip REF and ALT to their complements in place.
    ///
    /// Applying this twice restores the original alleles, so it must run at
    /// most once per record; [`Variant::call_samples`] is the only caller and
    /// gates it on the strand.
    pub fn reverse_strand(&mut self) {
        self.reference = complement_allele(&self.reference);
        self.alternate = complement_allele(&self.alternate);
    }

    /// Resolve the called base for the DNA sample and every RNA sample.
    ///
    /// Complements REF/ALT first when the record sits on the reverse strand.
    /// A heterozygous RNA call reports the base that deviates from the DNA
    /// call, since that is the direction editing evidence points. Repeated
    /// calls are no-ops.
    pub fn call_samples(&mut self) {
        if self.calls_resolved {
            return;
        }
        self.calls_resolved = true;

        if self.strand == Strand::Reverse {
            self.reverse_strand();
        }

        self.called_base = if self.dna_genotype == HOM_REF {
            self.reference.clone()
        } else {
            self.alternate.clone()
        };

        let dna_is_hom_ref = self.dna_genotype == HOM_REF;
        for sample in &mut self.samples {
            sample.called_base = match sample.genotype.as_str() {
                HET => {
                    if dna_is_hom_ref {
                        self.alternate.clone()
                    } else {
                        self.reference.clone()
                    }
                }
                HOM_REF => self.reference.clone(),
                _ => self.alternate.clone(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::record::RnaSample;

    fn variant(dna_gt: &str, strand: Strand) -> Variant {
        let line = format!(
            "1\t100\t.\tA\tG\t50\t.\tDP=20;MQ=40\tGT:PL:DP:DV\t{}:0,30,200:20:2",
            dna_gt
        );
        Variant::from_line(&line, strand).unwrap()
    }

    fn sample(gt: &str) -> RnaSample {
        RnaSample::from_field(&format!("{}:30,0,200:10:4:0.1", gt), "liver").unwrap()
    }

    #[test]
    fn test_complement_round_trip_for_acgt() {
        for base in ['A', 'C', 'G', 'T'] {
            assert_ne!(complement_base(base), base);
            assert_eq!(complement_base(complement_base(base)), base);
        }
    }

    #[test]
    fn test_complement_passes_through_non_acgt() {
        assert_eq!(complement_base('N'), 'N');
        assert_eq!(complement_base('.'), '.');
        assert_eq!(complement_allele("AN"), "TN");
    }

    #[test]
    fn test_forward_strand_calls() {
        let mut var = variant("0/0", Strand::Forward);
        var.add_sample(sample("0/1"));
        var.add_sample(sample("1/1"));
        var.call_samples();

        assert_eq!(var.called_base, "A");
        assert_eq!(var.samples[0].called_base, "G");
        assert_eq!(var.samples[1].called_base, "G");
    }

    #[test]
    fn test_reverse_strand_complements_once() {
        let mut var = variant("0/0", Strand::Reverse);
        var.add_sample(sample("0/1"));
        var.call_samples();

        assert_eq!(var.reference, "T");
        assert_eq!(var.alternate, "C");
        assert_eq!(var.called_base, "T");
        assert_eq!(var.samples[0].called_base, "C");

        // Second invocation must not complement again.
        var.call_samples();
        assert_eq!(var.reference, "T");
        assert_eq!(var.called_base, "T");
    }

    #[test]
    fn test_het_rna_reports_deviating_base() {
        let mut var = variant("1/1", Strand::Forward);
        var.add_sample(sample("0/1"));
        var.call_samples();

        // DNA is homozygous alternate, so the deviation is toward REF.
        assert_eq!(var.called_base, "G");
        assert_eq!(var.samples[0].called_base, "A");
    }

    #[test]
    fn test_hom_ref_rna_reports_reference() {
        let mut var = variant("1/1", Strand::Forward);
        var.add_sample(sample("0/0"));
        var.call_samples();
        assert_eq!(var.samples[0].called_base, "A");
    }
}
