//! Pure board transitions.
//!
//! Every operation borrows the current state and returns a fresh one. Indices
//! are the caller's responsibility: out-of-range values panic on slice access.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Square, placeholder_squares};

/// A single user-driven change to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardAction {
    Rename { name: String },
    Retheme { index: usize },
    SetSubtitle { text: String },
    EditGoal { index: usize, text: String },
    ToggleStamp { index: usize, icon: usize },
    Randomize,
    Resize { side: usize },
    Reset,
}

impl BoardAction {
    /// Whether this action rebuilds the grid and bumps `grid_version`.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Randomize | Self::Resize { .. } | Self::Reset)
    }
}

/// Dispatch an action to its transition.
#[must_use]
pub fn apply<R: Rng + ?Sized>(state: &BoardState, action: &BoardAction, rng: &mut R) -> BoardState {
    match action {
        BoardAction::Rename { name } => rename(state, name.clone()),
        BoardAction::Retheme { index } => retheme(state, *index),
        BoardAction::SetSubtitle { text } => set_subtitle(state, text.clone()),
        BoardAction::EditGoal { index, text } => edit_goal(state, *index, text.clone()),
        BoardAction::ToggleStamp { index, icon } => toggle_stamp(state, *index, *icon),
        BoardAction::Randomize => randomize(state, rng),
        BoardAction::Resize { side } => resize(state, *side),
        BoardAction::Reset => reset(state),
    }
}

#[must_use]
pub fn rename(state: &BoardState, name: impl Into<String>) -> BoardState {
    BoardState {
        name: name.into(),
        ..state.clone()
    }
}

/// Replace the theme index. Keeping it below `THEME_COUNT` is up to the caller.
#[must_use]
pub fn retheme(state: &BoardState, index: usize) -> BoardState {
    BoardState {
        theme_index: index,
        ..state.clone()
    }
}

/// Replace the subtitle. Empty text removes it.
#[must_use]
pub fn set_subtitle(state: &BoardState, text: impl Into<String>) -> BoardState {
    let text = text.into();
    BoardState {
        subtitle: (!text.is_empty()).then_some(text),
        ..state.clone()
    }
}

/// Replace a goal's text; the stamp is left as is.
#[must_use]
pub fn edit_goal(state: &BoardState, index: usize, text: impl Into<String>) -> BoardState {
    let mut next = state.clone();
    next.squares[index].goal = text.into();
    next
}

/// Stamp a square with `icon`, or clear it when it already carries that icon.
///
/// A different icon overwrites the existing stamp.
#[must_use]
pub fn toggle_stamp(state: &BoardState, index: usize, icon: usize) -> BoardState {
    let mut next = state.clone();
    let square = &mut next.squares[index];
    square.stamped_idx = if square.stamped_idx == Some(icon) {
        None
    } else {
        Some(icon)
    };
    next
}

/// Clear every stamp and shuffle squares with a Fisher-Yates pass.
#[must_use]
pub fn randomize<R: Rng + ?Sized>(state: &BoardState, rng: &mut R) -> BoardState {
    let mut squares: Vec<Square> = state
        .squares
        .iter()
        .map(|sq| Square {
            goal: sq.goal.clone(),
            stamped_idx: None,
        })
        .collect();
    for i in (1..squares.len()).rev() {
        let j = rng.gen_range(0..=i);
        squares.swap(i, j);
    }
    BoardState {
        squares,
        grid_version: state.grid_version.wrapping_add(1),
        ..state.clone()
    }
}

/// Truncate or pad the grid to `side * side` squares.
///
/// Kept squares retain their order, goals and stamps; new squares get the
/// placeholder goal for their final position.
#[must_use]
pub fn resize(state: &BoardState, side: usize) -> BoardState {
    let target = side * side;
    let mut squares: Vec<Square> = state.squares.iter().take(target).cloned().collect();
    let kept = squares.len();
    squares.extend((kept..target).map(Square::placeholder));
    BoardState {
        squares,
        grid_version: state.grid_version.wrapping_add(1),
        ..state.clone()
    }
}

/// Restore placeholder goals and clear every stamp, keeping the grid size.
#[must_use]
pub fn reset(state: &BoardState) -> BoardState {
    BoardState {
        squares: placeholder_squares(state.squares.len()),
        grid_version: state.grid_version.wrapping_add(1),
        ..state.clone()
    }
}
