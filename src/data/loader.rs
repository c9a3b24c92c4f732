use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::Table;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a numeric table from a whitespace-delimited text file.
///
/// Accepts the format written by `numpy.savetxt` and read by `numpy.loadtxt`:
/// * columns separated by any run of spaces or tabs
/// * blank lines skipped
/// * `#` starts a comment running to the end of the line
///
/// Every data line must carry the same number of columns. Any malformed line
/// aborts the whole load – there is no partial-load behaviour.
pub fn load_table(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_table(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse table text already in memory. See [`load_table`] for the format.
pub fn parse_table(text: &str) -> Result<Table> {
    let mut cols: Option<usize> = None;
    let mut values: Vec<f64> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let start = values.len();
        for (col, tok) in line.split_whitespace().enumerate() {
            let v: f64 = tok.parse().with_context(|| {
                format!("line {line_no}, column {col}: '{tok}' is not a number")
            })?;
            values.push(v);
        }

        let width = values.len() - start;
        match cols {
            None => cols = Some(width),
            Some(c) if c != width => {
                bail!("line {line_no}: expected {c} columns, found {width}")
            }
            Some(_) => {}
        }
    }

    Ok(Table::new(cols.unwrap_or(0), values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_column_table() {
        let t = parse_table("0.1 0.05\n0.01 0.0005\n").unwrap();
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.n_cols(), 2);
        assert_eq!(t.points(0, 1).unwrap(), vec![(0.1, 0.05), (0.01, 0.0005)]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# t x y\n\n0.0 1.0 2.0\n0.1 1.5 2.5  # trailing note\n";
        let t = parse_table(text).unwrap();
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.n_cols(), 3);
    }

    #[test]
    fn scientific_notation_and_tabs() {
        let t = parse_table("1.0e-1\t5.0e-2\n1.0e-2\t5.0e-4\n").unwrap();
        assert_eq!(t.column(0).unwrap(), vec![0.1, 0.01]);
    }

    #[test]
    fn non_numeric_token_names_line_and_column() {
        let err = parse_table("0.1 0.05\n0.01 oops\n").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "unexpected message: {msg}");
        assert!(msg.contains("'oops'"), "unexpected message: {msg}");
    }

    #[test]
    fn ragged_row_is_an_error() {
        let err = parse_table("0.1 0.05\n0.01 0.0005 9.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("expected 2 columns, found 3"));
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let t = parse_table("# only a comment\n\n").unwrap();
        assert_eq!(t.n_rows(), 0);
        assert_eq!(t.n_cols(), 0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_table(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("not/here.txt"));
    }
}
