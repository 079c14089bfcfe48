use crate::placement::Placement;

/// True iff a queen in column `col` of row `placement.len()` conflicts with
/// no queen already in `placement`:
/// - no existing queen shares the column
/// - no existing queen shares a diagonal (`abs(col - c) == row distance`)
///
/// Row conflicts cannot occur: the search places exactly one queen per row.
/// This predicate is the sole pruning mechanism of the search.
pub fn is_safe(col: u16, placement: &Placement) -> bool {
    let row = placement.len();
    for (r, &c) in placement.cols().iter().enumerate() {
        if c == col {
            return false;
        }
        if usize::from(col.abs_diff(c)) == row - r {
            return false;
        }
    }
    true
}

/// Pairwise validation of a finished placement.
///
/// Accepts placements of any length; emptiness is trivially valid. Row
/// bounds are not checked here, see [`is_valid_for`].
pub fn is_valid(placement: &Placement) -> bool {
    let cols = placement.cols();
    for i in 0..cols.len() {
        for j in (i + 1)..cols.len() {
            if conflicts(i, cols[i], j, cols[j]) {
                return false;
            }
        }
    }
    true
}

/// Like [`is_valid`], but also requires length `n` and all columns in `[0, n)`.
pub fn is_valid_for(placement: &Placement, n: usize) -> bool {
    placement.len() == n
        && placement.cols().iter().all(|&c| usize::from(c) < n)
        && is_valid(placement)
}

#[inline]
fn conflicts(row_a: usize, col_a: u16, row_b: usize, col_b: u16) -> bool {
    col_a == col_b || usize::from(col_a.abs_diff(col_b)) == row_b - row_a
}
