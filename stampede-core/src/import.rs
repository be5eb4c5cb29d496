//! Bulk goal import.
//!
//! Unlike a bad share link, a bad import is the user's own input and must be
//! reported back so they can fix it.

use serde_json::Value;
use thiserror::Error;

use crate::board::BoardState;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("goal list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("goal list must be a JSON array of text values")]
    NotAList,
    #[error("goal #{} is not text", .0 + 1)]
    NotText(usize),
    #[error("goal list is empty")]
    Empty,
}

/// Parse a JSON array of strings into goal texts.
///
/// # Errors
///
/// Returns an [`ImportError`] when the input is not JSON, not an array, holds
/// a non-string element, or is empty.
pub fn parse_goal_list(input: &str) -> Result<Vec<String>, ImportError> {
    let Value::Array(items) = serde_json::from_str::<Value>(input)? else {
        return Err(ImportError::NotAList);
    };
    if items.is_empty() {
        return Err(ImportError::Empty);
    }
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::String(goal) => Ok(goal),
            _ => Err(ImportError::NotText(idx)),
        })
        .collect()
}

/// Overwrite goals position by position.
///
/// Extra goals are dropped and squares past the end of the list keep their
/// text. Stamps are never touched.
#[must_use]
pub fn apply_goal_list(state: &BoardState, goals: &[String]) -> BoardState {
    let mut next = state.clone();
    for (square, goal) in next.squares.iter_mut().zip(goals) {
        square.goal.clone_from(goal);
    }
    next
}
