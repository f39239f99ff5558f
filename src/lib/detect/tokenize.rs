//! Field tokenization for variant-call lines.
//!
//! Record lines are tokenized twice: once on whitespace runs into columns,
//! then per-column on exact delimiters (`:` for sample sub-fields, `,` for
//! likelihood lists, `;` for INFO segments). Both splitters are pure and
//! never error; short lines simply yield fewer tokens, so callers index
//! defensively with checked access.

/// Split a record line on runs of whitespace.
///
/// Leading and trailing whitespace is ignored and consecutive separators
/// collapse, matching stream-extraction semantics.
pub fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Split on exact occurrences of `sep`.
///
/// Interior empty segments are kept; a single trailing empty segment (from a
/// line ending in `sep`) is dropped.
pub fn fields_delimited(line: &str, sep: char) -> Vec<&str> {
    let mut parts: Vec<&str> = line.split(sep).collect();
    if parts.last() == Some(&"") {
        parts.pop();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_fields_collapse_runs() {
        assert_eq!(fields("  a \t b\t\tc  "), vec!["a", "b", "c"]);
        assert_eq!(fields(""), Vec::<&str>::new());
        assert_eq!(fields("   "), Vec::<&str>::new());
    }

    #[test]
    fn test_delimited_fields_keep_interior_empties() {
        assert_eq!(fields_delimited("a::b", ':'), vec!["a", "", "b"]);
        assert_eq!(fields_delimited("0/1:30,0:10:4:0.1", ':'), vec![
            "0/1", "30,0", "10", "4", "0.1"
        ]);
    }

    #[test]
    fn test_delimited_fields_drop_trailing_empty() {
        assert_eq!(fields_delimited("a:b:", ':'), vec!["a", "b"]);
        assert_eq!(fields_delimited(":", ':'), vec![""]);
        assert_eq!(fields_delimited("", ':'), Vec::<&str>::new());
    }

    #[test]
    fn test_split_rejoin_round_trip() {
        let original = "GT:PL:DP:DV:SB";
        let rejoined = fields_delimited(original, ':').join(":");
        assert_eq!(rejoined, original);
    }
}
