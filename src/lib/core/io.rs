use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use grep_cli::stdout;
use gzp::{deflate::Gzip, Compression, ZBuilder};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use termcolor::ColorChoice;

use crate::core::fs::is_gzipped;

/// Open a line-oriented reader over a file or stdin (`-` or `None`),
/// decoding gzip transparently when the path looks compressed.
pub fn get_line_reader<P: AsRef<Path>>(path: &Option<P>) -> Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) if path.as_ref().to_str() != Some("-") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.as_ref().display()))?;
            if is_gzipped(path) {
                Box::new(BufReader::new(MultiGzDecoder::new(file)))
            } else {
                Box::new(BufReader::new(file))
            }
        }
        _ => Box::new(BufReader::new(io::stdin())),
    };
    Ok(reader)
}

/// Build a tab-delimited writer targeting a file or stdout with optional
/// gzip compression.
pub fn get_writer<P: AsRef<Path>>(
    path: &Option<P>,
    gzipped: bool,
    write_headers: bool,
    threads: usize,
    compression_level: u32,
) -> Result<csv::Writer<Box<dyn Write>>> {
    let raw_writer: Box<dyn Write> = match path {
        Some(path) if path.as_ref().to_str() != Some("-") => {
            let writer = BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.as_ref().display()))?,
            );
            if gzipped {
                Box::new(
                    ZBuilder::<Gzip, _>::new()
                        .num_threads(threads)
                        .compression_level(Compression::new(compression_level))
                        .from_writer(writer),
                )
            } else {
                Box::new(writer)
            }
        }
        _ => {
            let writer = stdout(ColorChoice::Never);
            if gzipped {
                Box::new(
                    ZBuilder::<Gzip, _>::new()
                        .num_threads(threads)
                        .compression_level(Compression::new(compression_level))
                        .from_writer(writer),
                )
            } else {
                Box::new(writer)
            }
        }
    };

    Ok(csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(write_headers)
        .flexible(true)
        .from_writer(raw_writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_line_reader_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        std::fs::write(&path, "a\nb\n").unwrap();

        let reader = get_line_reader(&Some(&path)).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_writer_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        {
            let mut writer = get_writer(&Some(&path), false, false, 1, 6).unwrap();
            writer.write_record(&["chr1", "100", "AtoG"]).unwrap();
            writer.flush().unwrap();
        }

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "chr1\t100\tAtoG\n");
    }
}
