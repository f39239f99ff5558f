use anyhow::Result;
use std::fs;
use std::path::Path;

/// Create any missing parent directories for `path`.
pub fn make_parent_dirs<P: AsRef<Path>>(path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Whether a path carries a gzip-family extension.
pub fn is_gzipped<P: AsRef<Path>>(path: P) -> bool {
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some(ext) => matches!(ext, "gz" | "gzip" | "bgzf"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped("out.tsv.gz"));
        assert!(is_gzipped("calls.bgzf"));
        assert!(!is_gzipped("out.tsv"));
        assert!(!is_gzipped("no_extension"));
    }
}
