//! Column width computation.

use blocksmith_core::{Column, ComposeError, IndexPath};

/// Compute each column's width share.
///
/// Explicit widths are used verbatim, but only when every column has
/// one; a mix of explicit and implicit widths is an error. Without
/// explicit widths the 100% total is divided evenly: every column gets
/// round-half-up(100/N) integer percent except the last, which takes the
/// remainder so the shares always sum to exactly 100 (N=3 gives
/// 33/33/34).
pub(crate) fn column_widths(
    columns: &[Column],
    path: &IndexPath,
) -> Result<Vec<String>, ComposeError> {
    let explicit: Vec<&String> = columns.iter().filter_map(|c| c.width.as_ref()).collect();

    if explicit.len() == columns.len() {
        return Ok(explicit.into_iter().cloned().collect());
    }
    if !explicit.is_empty() {
        return Err(ComposeError::InconsistentColumnWidths { path: path.clone() });
    }

    let n = columns.len() as i64;
    if n == 0 {
        return Ok(Vec::new());
    }
    // round-half-up(100/n) in integer arithmetic
    let share = (200 + n) / (2 * n);
    let last = 100 - share * (n - 1);

    let mut widths: Vec<String> = (1..n).map(|_| format!("{share}%")).collect();
    widths.push(format!("{last}%"));
    Ok(widths)
}
