//! Repeat-annotation loading.

use anyhow::{anyhow, Context, Result};
use flate2::read::MultiGzDecoder;
use log::{info, warn};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::fs::is_gzipped;

/// Fixed-format header lines at the top of a RepeatMasker annotation file.
pub const ANNOTATION_HEADER_LINES: usize = 3;

/// 0-based column indices into a whitespace-tokenized annotation line.
///
/// The defaults follow RepeatMasker `.out` output: query sequence at
/// column 4, match coordinates at 5-6, strand at 8, repeat name and family
/// at 9-10.
#[derive(Debug, Clone)]
pub struct RepeatColumns {
    pub chrom: usize,
    pub start: usize,
    pub end: usize,
    pub strand: usize,
    pub name: usize,
    pub family: usize,
}

impl Default for RepeatColumns {
    fn default() -> Self {
        RepeatColumns {
            chrom: 4,
            start: 5,
            end: 6,
            strand: 8,
            name: 9,
            family: 10,
        }
    }
}

impl RepeatColumns {
    fn max_index(&self) -> usize {
        [
            self.chrom,
            self.start,
            self.end,
            self.strand,
            self.name,
            self.family,
        ]
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
    }
}

/// One annotated repeat element. Coordinates are 1-based and inclusive.
#[derive(Debug, Clone)]
pub struct RepeatInterval {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub strand: String,
    pub name: String,
    pub family: String,
}

/// Load a repeat annotation, skipping its fixed three-line header.
///
/// Lines with too few columns or non-numeric coordinates are skipped with a
/// warning rather than failing the run; an annotation that yields no usable
/// intervals is an error. Parsing runs in parallel and preserves file order.
pub fn load_annotation<P: AsRef<Path>>(
    path: P,
    columns: &RepeatColumns,
) -> Result<Vec<RepeatInterval>> {
    let path = path.as_ref();
    info!("Loading repeat annotation from {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("Failed to open annotation {}", path.display()))?;
    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let lines: Vec<String> = reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read annotation {}", path.display()))?;

    let intervals: Vec<RepeatInterval> = lines
        .par_iter()
        .skip(ANNOTATION_HEADER_LINES)
        .filter_map(|line| parse_annotation_line(line, columns))
        .collect();

    if intervals.is_empty() {
        return Err(anyhow!(
            "No usable intervals in annotation {}",
            path.display()
        ));
    }

    info!("Loaded {} repeat intervals", intervals.len());
    Ok(intervals)
}

fn parse_annotation_line(line: &str, columns: &RepeatColumns) -> Option<RepeatInterval> {
    if line.trim().is_empty() {
        return None;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() <= columns.max_index() {
        warn!("Skipping annotation line with too few columns: {}", line);
        return None;
    }
    let start = match tokens[columns.start].parse::<u64>() {
        Ok(value) => value,
        Err(_) => {
            warn!("Skipping annotation line with non-numeric start: {}", line);
            return None;
        }
    };
    let end = match tokens[columns.end].parse::<u64>() {
        Ok(value) => value,
        Err(_) => {
            warn!("Skipping annotation line with non-numeric end: {}", line);
            return None;
        }
    };
    Some(RepeatInterval {
        chrom: tokens[columns.chrom].to_string(),
        start,
        end,
        strand: tokens[columns.strand].to_string(),
        name: tokens[columns.name].to_string(),
        family: tokens[columns.family].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RM_LINE: &str =
        "  463  1.3  0.6  1.7  chr1  10001  10468  (248945954)  +  (TAACCC)n  Simple_repeat  1  463  (0)  1";

    #[test]
    fn test_parse_annotation_line_default_columns() {
        let columns = RepeatColumns::default();
        let interval = parse_annotation_line(RM_LINE, &columns).unwrap();
        assert_eq!(interval.chrom, "chr1");
        assert_eq!(interval.start, 10001);
        assert_eq!(interval.end, 10468);
        assert_eq!(interval.strand, "+");
        assert_eq!(interval.name, "(TAACCC)n");
        assert_eq!(interval.family, "Simple_repeat");
    }

    #[test]
    fn test_short_and_bad_lines_are_skipped() {
        let columns = RepeatColumns::default();
        assert!(parse_annotation_line("too short", &columns).is_none());
        assert!(parse_annotation_line("", &columns).is_none());
        let bad = RM_LINE.replace("10001", "start");
        assert!(parse_annotation_line(&bad, &columns).is_none());
    }

    #[test]
    fn test_load_skips_three_header_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rm.out");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "   SW   perc perc perc  query ...").unwrap();
        writeln!(file, "score   div. del. ins.  sequence ...").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{}", RM_LINE).unwrap();
        writeln!(file, "not a data line").unwrap();
        drop(file);

        let intervals = load_annotation(&path, &RepeatColumns::default()).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].chrom, "chr1");
    }

    #[test]
    fn test_empty_annotation_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rm.out");
        std::fs::write(&path, "h1\nh2\nh3\n").unwrap();
        assert!(load_annotation(&path, &RepeatColumns::default()).is_err());
    }
}
