use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – typed failures of the data layer
// ---------------------------------------------------------------------------

/// Errors raised when indexing into or transforming a [`Table`].
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("column {index} requested but table has only {cols} columns")]
    ColumnOutOfRange { index: usize, cols: usize },

    /// A log-transformed column contained a value outside the domain of `ln`.
    #[error("row {row}: ln of non-positive value {value}")]
    LogDomain { row: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// Table – a rectangular numeric result table
// ---------------------------------------------------------------------------

/// A rectangular matrix of `f64` values, stored row-major.
///
/// Rows are observations; columns are addressed by position, following the
/// layout the solver suite writes (e.g. column 0 = step size or time).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    cols: usize,
    values: Vec<f64>,
}

impl Table {
    /// Invariant: `values.len()` is a multiple of `cols`.
    pub(crate) fn new(cols: usize, values: Vec<f64>) -> Self {
        debug_assert!(cols == 0 || values.len() % cols == 0);
        Table { cols, values }
    }

    pub fn n_rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.values.len() / self.cols
        }
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Copy out one column, top to bottom.
    pub fn column(&self, index: usize) -> Result<Vec<f64>, TableError> {
        self.check_column(index)?;
        Ok(self
            .values
            .chunks_exact(self.cols)
            .map(|row| row[index])
            .collect())
    }

    /// Pair up two columns as `(x, y)` points, in row order.
    pub fn points(&self, x_col: usize, y_col: usize) -> Result<Vec<(f64, f64)>, TableError> {
        self.check_column(x_col)?;
        self.check_column(y_col)?;
        Ok(self
            .values
            .chunks_exact(self.cols)
            .map(|row| (row[x_col], row[y_col]))
            .collect())
    }

    fn check_column(&self, index: usize) -> Result<(), TableError> {
        if index >= self.cols {
            return Err(TableError::ColumnOutOfRange {
                index,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> Table {
        Table::new(3, vec![0.0, 1.0, 2.0, 0.1, 1.1, 2.1, 0.2, 1.2, 2.2])
    }

    #[test]
    fn dimensions() {
        let t = three_by_three();
        assert_eq!(t.n_rows(), 3);
        assert_eq!(t.n_cols(), 3);
    }

    #[test]
    fn column_extraction() {
        let t = three_by_three();
        assert_eq!(t.column(1).unwrap(), vec![1.0, 1.1, 1.2]);
    }

    #[test]
    fn points_pair_columns_in_row_order() {
        let t = three_by_three();
        // Column 0 must play no part in the (1, 2) pairing.
        assert_eq!(
            t.points(1, 2).unwrap(),
            vec![(1.0, 2.0), (1.1, 2.1), (1.2, 2.2)]
        );
    }

    #[test]
    fn out_of_range_column_is_an_error() {
        let t = three_by_three();
        assert_eq!(
            t.column(3),
            Err(TableError::ColumnOutOfRange { index: 3, cols: 3 })
        );
        assert!(t.points(0, 5).is_err());
    }

    #[test]
    fn empty_table_has_no_rows() {
        let t = Table::new(0, Vec::new());
        assert_eq!(t.n_rows(), 0);
        assert!(t.column(0).is_err());
    }
}
