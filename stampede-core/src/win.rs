//! Line-completion check over a row-major square grid.

use serde::Serialize;

use crate::board::Square;

/// A candidate winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Square indices on this line for a `side x side` grid.
    #[must_use]
    pub fn indices(self, side: usize) -> Vec<usize> {
        match self {
            Self::Row(r) => (0..side).map(|c| r * side + c).collect(),
            Self::Column(c) => (0..side).map(|r| r * side + c).collect(),
            Self::Diagonal => (0..side).map(|i| i * side + i).collect(),
            Self::AntiDiagonal => (0..side).map(|i| i * side + (side - 1 - i)).collect(),
        }
    }
}

/// All `2 * side + 2` candidate lines: rows, then columns, then both diagonals.
///
/// An empty grid has no lines at all.
#[must_use]
pub fn lines(side: usize) -> Vec<Line> {
    if side == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(2 * side + 2);
    out.extend((0..side).map(Line::Row));
    out.extend((0..side).map(Line::Column));
    out.push(Line::Diagonal);
    out.push(Line::AntiDiagonal);
    out
}

fn is_complete(squares: &[Square], side: usize, line: Line) -> bool {
    line.indices(side)
        .into_iter()
        .all(|idx| squares[idx].is_stamped())
}

/// Lines whose every square is stamped.
///
/// `squares.len()` must equal `side * side`.
#[must_use]
pub fn completed_lines(squares: &[Square], side: usize) -> Vec<Line> {
    lines(side)
        .into_iter()
        .filter(|line| is_complete(squares, side, *line))
        .collect()
}

/// True when at least one row, column or main diagonal is fully stamped.
///
/// `squares.len()` must equal `side * side`.
#[must_use]
pub fn has_line(squares: &[Square], side: usize) -> bool {
    lines(side)
        .into_iter()
        .any(|line| is_complete(squares, side, line))
}
