use super::model::TableError;

/// Element-wise natural log of both coordinates, for log-log charts.
///
/// A zero, negative, or non-finite value is a hard error rather than a silent
/// `NaN`/`-inf` point: convergence tables are strictly positive, so anything
/// else means the input file is wrong.
pub fn ln_points(points: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, TableError> {
    points
        .iter()
        .enumerate()
        .map(|(row, &(x, y))| Ok((checked_ln(x, row)?, checked_ln(y, row)?)))
        .collect()
}

fn checked_ln(value: f64, row: usize) -> Result<f64, TableError> {
    if value.is_finite() && value > 0.0 {
        Ok(value.ln())
    } else {
        Err(TableError::LogDomain { row, value })
    }
}
