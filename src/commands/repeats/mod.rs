mod args;

use anyhow::{anyhow, Context, Result};
use editscan_lib::core::prelude::*;
use editscan_lib::repeats::{load_annotation, Query, RepeatMatcher};
use log::info;
use std::io::BufRead;

pub use args::RepeatsArgs;

/// Execute the `repeats` command end-to-end.
pub fn run_repeats(args: RepeatsArgs) -> Result<()> {
    let threads = determine_allowed_cpus(args.threads)?;
    set_rayon_global_pools_size(threads)?;

    let subjects = load_annotation(&args.annotation, &args.columns())?;
    let matcher = RepeatMatcher::new(subjects);

    let reader = get_line_reader(&Some(&args.queries))?;
    let gzipped = args.output.as_ref().map(is_gzipped).unwrap_or(false);
    if let Some(path) = &args.output {
        make_parent_dirs(path)?;
    }
    let mut writer = get_writer(&args.output, gzipped, false, 1, 6)?;

    let mut total = 0u64;
    let mut matched = 0u64;
    for line in reader.lines() {
        let line = line.context("Failed to read query line")?;
        if line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let needed = if args.stranded { 3 } else { 2 };
        if tokens.len() < needed {
            return Err(anyhow!(
                "Query line needs at least {} columns: '{}'",
                needed,
                line
            ));
        }
        let position = tokens[1]
            .parse::<u64>()
            .with_context(|| format!("Query position is not numeric: '{}'", tokens[1]))?;
        let query = Query {
            chrom: tokens[0].clone(),
            position,
            strand: tokens.get(2).cloned(),
        };

        total += 1;
        let hit = if args.linear {
            matcher.find_linear(&query, args.stranded)
        } else {
            matcher.find_indexed(&query, args.stranded)
        };
        if let Some(subject) = hit {
            matched += 1;
            let mut row = tokens;
            row.push(subject.start.to_string());
            row.push(subject.end.to_string());
            row.push(subject.name.clone());
            row.push(subject.family.clone());
            writer.write_record(&row)?;
        }
    }
    writer.flush()?;

    info!(
        "Matched {} of {} queries against {} repeat intervals",
        matched,
        total,
        matcher.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const RM_LINE: &str =
        "  463  1.3  0.6  1.7  chr1  900  1100  (0)  +  AluY  SINE/Alu  1  463  (0)  1";

    fn write_annotation(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("rm.out");
        fs::write(&path, format!("h1\nh2\n\n{}\n", RM_LINE)).unwrap();
        path
    }

    fn base_args(dir: &tempfile::TempDir) -> RepeatsArgs {
        RepeatsArgs {
            queries: dir.path().join("queries.tsv"),
            annotation: write_annotation(dir),
            output: Some(dir.path().join("hits.tsv")),
            stranded: false,
            linear: false,
            threads: 1,
            chrom_col: 4,
            start_col: 5,
            end_col: 6,
            strand_col: 8,
            name_col: 9,
            family_col: 10,
        }
    }

    #[test]
    fn test_run_repeats_annotates_contained_queries() {
        let dir = tempfile::tempdir().unwrap();
        let args = base_args(&dir);
        fs::write(&args.queries, "1\t1000\t+\tAtoG\n1\t5000\t+\tAtoG\n").unwrap();

        run_repeats(args.clone()).unwrap();

        let contents = fs::read_to_string(dir.path().join("hits.tsv")).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].split('\t').collect();
        assert_eq!(fields[0], "1");
        assert_eq!(fields[1], "1000");
        assert_eq!(&fields[4..], &["900", "1100", "AluY", "SINE/Alu"]);
    }

    #[test]
    fn test_run_repeats_stranded_mismatch_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = base_args(&dir);
        args.stranded = true;
        fs::write(&args.queries, "1\t1000\t-\tAtoG\n").unwrap();

        run_repeats(args).unwrap();

        let contents = fs::read_to_string(dir.path().join("hits.tsv")).unwrap();
        assert!(contents.is_empty());
    }
}
