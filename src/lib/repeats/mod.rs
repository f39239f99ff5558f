//! Repeat-annotation interval lookup.
//!
//! Candidate editing sites that fall inside repetitive DNA elements are
//! usually alignment artifacts, so detected positions are intersected
//! against a repeat annotation (RepeatMasker-style). This module loads the
//! annotation and answers point-in-interval queries, either by a file-order
//! linear scan or through per-chromosome interval trees.

pub mod annotation;
pub mod matcher;

pub use annotation::{load_annotation, RepeatColumns, RepeatInterval};
pub use matcher::{Query, RepeatMatcher};
