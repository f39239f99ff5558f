//! editscan: RNA-editing candidate detection from paired DNA/RNA variant calls.
//!
//! The library behind the `editscan` CLI. It scans variant-call records in
//! which one column carries the DNA genotype and the remaining columns carry
//! RNA genotypes for one or more tissues, and reports positions where the RNA
//! call diverges from the DNA call under configurable evidence thresholds
//! (read depth, homozygosity fraction, strand bias, indel exclusion).
//!
//! # Modules
//!
//! - [`detect`]: the variant-record model, filter pipeline, strand-aware
//!   caller, and evidence aggregation
//! - [`repeats`]: repeat-annotation interval lookup for flagging candidates
//!   that fall inside masked repetitive elements
//! - [`core`]: shared I/O, filesystem, and concurrency helpers

pub mod core;
pub mod detect;
pub mod repeats;
