//! Point-in-interval lookup against a loaded annotation.

use rust_lapper::{Interval, Lapper};
use rustc_hash::FxHashMap;

use super::annotation::RepeatInterval;

/// A genomic point queried against the repeat annotation.
///
/// Query chromosome names come without the `chr` prefix (as emitted by the
/// detection scan); the matcher adds it when comparing against subjects.
#[derive(Debug, Clone)]
pub struct Query {
    pub chrom: String,
    pub position: u64,
    pub strand: Option<String>,
}

impl Query {
    fn prefixed_chrom(&self) -> String {
        format!("chr{}", self.chrom)
    }

    fn matches(&self, subject: &RepeatInterval, stranded: bool) -> bool {
        if self.prefixed_chrom() != subject.chrom {
            return false;
        }
        if self.position < subject.start || self.position > subject.end {
            return false;
        }
        if stranded {
            match &self.strand {
                Some(strand) => *strand == subject.strand,
                None => false,
            }
        } else {
            true
        }
    }
}

/// Repeat-interval lookup over a loaded annotation.
///
/// `find_linear` scans the annotation in file order; `find_indexed` answers
/// from per-chromosome interval trees. Both report the first subject in
/// annotation-file order that contains the query point (and matches its
/// strand when `stranded`), so the two strategies agree on every query.
pub struct RepeatMatcher {
    subjects: Vec<RepeatInterval>,
    index: FxHashMap<String, Lapper<u64, usize>>,
}

impl RepeatMatcher {
    pub fn new(subjects: Vec<RepeatInterval>) -> Self {
        let mut per_chrom: FxHashMap<String, Vec<Interval<u64, usize>>> = FxHashMap::default();
        for (i, subject) in subjects.iter().enumerate() {
            per_chrom
                .entry(subject.chrom.clone())
                .or_default()
                .push(Interval {
                    start: subject.start,
                    // Lapper stops are exclusive; annotation ends are inclusive.
                    stop: subject.end + 1,
                    val: i,
                });
        }
        let index = per_chrom
            .into_iter()
            .map(|(chrom, intervals)| (chrom, Lapper::new(intervals)))
            .collect();
        RepeatMatcher { subjects, index }
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// File-order scan; first containing subject wins.
    pub fn find_linear(&self, query: &Query, stranded: bool) -> Option<&RepeatInterval> {
        self.subjects
            .iter()
            .find(|subject| query.matches(subject, stranded))
    }

    /// Interval-tree lookup, equivalent to [`RepeatMatcher::find_linear`].
    pub fn find_indexed(&self, query: &Query, stranded: bool) -> Option<&RepeatInterval> {
        let lapper = self.index.get(&query.prefixed_chrom())?;
        lapper
            .find(query.position, query.position + 1)
            .map(|interval| interval.val)
            .filter(|&i| query.matches(&self.subjects[i], stranded))
            .min()
            .map(|i| &self.subjects[i])
    }
}
