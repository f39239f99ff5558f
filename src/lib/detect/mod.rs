//! RNA-editing candidate detection.
//!
//! The detection pipeline compares a DNA genotype against one or more RNA
//! genotypes at the same genomic position and reports positions where the
//! RNA diverges from the DNA with enough supporting evidence.
//!
//! # Key Components
//!
//! - [`tokenize`]: field splitting for record lines
//! - [`record`]: the [`Variant`]/[`RnaSample`] model and its parsers
//! - [`filters`]: predicate and flag-setting filter passes
//! - [`caller`]: strand-aware base calling
//! - [`report`]: aggregation of flagged samples into output rows
//! - [`scan`]: the line-oriented driver
//! - [`error`]: error types for the pipeline

pub mod caller;
pub mod error;
pub mod filters;
pub mod record;
pub mod report;
pub mod scan;
pub mod tokenize;

pub use caller::{complement_allele, complement_base, Strand};
pub use error::{Result, ScanError};
pub use record::{RnaSample, Variant};
pub use report::{qualifying_rows, EditRow};
pub use scan::{DetectOptions, Scanner};
