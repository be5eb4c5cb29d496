use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_NAME, DEFAULT_SIDE, EMPTY_NAME_FALLBACK, GOAL_STEP, GOAL_SUFFIX, MAX_SIDE,
};

/// One grid cell: goal text plus the icon it was stamped with, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Square {
    pub goal: String,
    #[serde(default)]
    pub stamped_idx: Option<usize>,
}

impl Square {
    /// Unstamped square carrying the placeholder goal for `position` (0-based).
    #[must_use]
    pub fn placeholder(position: usize) -> Self {
        Self {
            goal: default_goal(position),
            stamped_idx: None,
        }
    }

    #[must_use]
    pub const fn is_stamped(&self) -> bool {
        self.stamped_idx.is_some()
    }
}

/// Placeholder goal text, 1-indexed by position: `"1000 Steps"`, `"2000 Steps"`, ...
#[must_use]
pub fn default_goal(position: usize) -> String {
    format!("{} {GOAL_SUFFIX}", (position + 1) * GOAL_STEP)
}

/// Whole-board state shared through the URL.
///
/// `squares.len()` is always a perfect square. `grid_version` only signals a
/// structural change to renderers and is never part of the shared payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub squares: Vec<Square>,
    #[serde(default)]
    pub theme_index: usize,
    #[serde(default)]
    pub grid_version: u32,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::default_with_side(DEFAULT_SIDE)
    }
}

impl BoardState {
    /// Fresh board with `side * side` placeholder squares.
    #[must_use]
    pub fn default_with_side(side: usize) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            subtitle: None,
            squares: placeholder_squares(side * side),
            theme_index: 0,
            grid_version: 0,
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn side(&self) -> usize {
        integer_sqrt(self.squares.len())
    }

    /// Name to show in headers; empty names fall back to a generic label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            EMPTY_NAME_FALLBACK
        } else {
            &self.name
        }
    }

    #[must_use]
    pub fn stamped_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_stamped()).count()
    }

    /// Same state with the render-only version counter cleared.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            grid_version: 0,
            ..self.clone()
        }
    }
}

/// `side` when it is a usable grid side, otherwise [`DEFAULT_SIDE`].
#[must_use]
pub const fn side_or_default(side: usize) -> usize {
    if side == 0 || side > MAX_SIDE {
        DEFAULT_SIDE
    } else {
        side
    }
}

#[must_use]
pub(crate) fn placeholder_squares(len: usize) -> Vec<Square> {
    (0..len).map(Square::placeholder).collect()
}

/// Floor of the square root, exact for every `usize` a grid can hold.
#[must_use]
pub(crate) fn integer_sqrt(n: usize) -> usize {
    let mut root = 0_usize;
    while (root + 1).saturating_mul(root + 1) <= n {
        root += 1;
    }
    root
}

#[must_use]
pub(crate) fn is_perfect_square(n: usize) -> bool {
    let root = integer_sqrt(n);
    root * root == n
}
