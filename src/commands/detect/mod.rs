mod args;

use anyhow::{Context, Result};
use editscan_lib::core::prelude::*;
use editscan_lib::detect::{DetectOptions, Scanner};
use log::info;
use std::io::BufRead;

pub use args::DetectArgs;

/// Execute the `detect` command end-to-end.
pub fn run_detect(args: DetectArgs) -> Result<()> {
    let options = DetectOptions::from(&args);

    match &args.input {
        Some(path) => info!("Scanning {} for RNA-editing candidates", path.display()),
        None => info!("Scanning stdin for RNA-editing candidates"),
    }

    let reader = get_line_reader(&args.input)?;
    let gzipped = args.output.as_ref().map(is_gzipped).unwrap_or(false);
    if let Some(path) = &args.output {
        make_parent_dirs(path)?;
    }
    let mut writer = get_writer(&args.output, gzipped, false, 1, 6)?;

    let mut scanner = Scanner::new(options)?;
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        for row in scanner.accept(&line)? {
            writer.serialize(row)?;
        }
    }
    writer.flush()?;

    info!(
        "Scanned {} data records, emitted {} candidate rows",
        scanner.records_seen(),
        scanner.rows_emitted()
    );
    Ok(())
}
