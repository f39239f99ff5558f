//! editscan - RNA editing candidate detection from paired DNA/RNA variant calls
//!
//! editscan scans a variant-call file in which one sample column carries the
//! DNA genotype and the remaining columns carry RNA genotypes for one or more
//! tissues, and reports positions where the RNA call diverges from the DNA
//! call under configurable confidence thresholds. A second subcommand
//! intersects genomic positions against a repeat annotation to flag
//! candidates inside repetitive elements.
//!
//! # Tools
//!
//! - `detect`: scan a variant file for RNA-editing candidates
//! - `repeats`: intersect positions with a repeat annotation
//!
//! # Usage
//!
//! ```bash
//! # Scan a variant file, one RNA sample named explicitly
//! editscan detect calls.vcf --strand + --names liver -o edits.tsv
//!
//! # Flag candidates that fall inside annotated repeats
//! editscan repeats edits.tsv --annotation hg38.fa.out --stranded
//! ```
//!
//! For more detailed usage information, see the documentation for each
//! subcommand.

extern crate editscan_lib;
pub mod commands;
use anyhow::Result;
use editscan_lib::core::prelude::is_broken_pipe;
use env_logger::Env;
use log::*;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case", author, about)]
/// Commands for RNA-editing candidate analysis with editscan
struct Args {
    #[structopt(subcommand)]
    subcommand: Subcommand,
}

#[derive(StructOpt)]
enum Subcommand {
    /// Scan a variant file for RNA-editing candidates
    Detect(commands::DetectArgs),
    /// Intersect positions with a repeat annotation
    Repeats(commands::RepeatsArgs),
}

impl Subcommand {
    fn run(self) -> Result<()> {
        match self {
            Subcommand::Detect(args) => commands::run_detect(args)?,
            Subcommand::Repeats(args) => commands::run_repeats(args)?,
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = Args::from_args().subcommand.run() {
        if is_broken_pipe(&err) {
            std::process::exit(0);
        }
        error!("{}", err);
        std::process::exit(1);
    }
    Ok(())
}
