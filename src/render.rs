//! ASCII rendering of completed placements.

use crate::placement::Placement;

const QUEEN: char = 'Q';
const EMPTY: char = '-';

/// Render a completed placement as an ASCII grid.
///
/// One line per row, row 0 first; the queen's column shows `Q`, every other
/// cell `-`. Lines are joined with `\n` without a trailing newline, so the
/// empty placement renders as the empty string.
pub fn render(placement: &Placement) -> String {
    let n = placement.len();

    let mut grid: Vec<Vec<char>> = vec![vec![EMPTY; n]; n];
    for (row, &col) in placement.cols().iter().enumerate() {
        grid[row][usize::from(col)] = QUEEN;
    }

    let lines: Vec<String> = grid.into_iter().map(|row| row.into_iter().collect()).collect();
    lines.join("\n")
}
