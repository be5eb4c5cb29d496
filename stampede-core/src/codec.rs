//! URL-embeddable board encoding.
//!
//! Boards travel as short-keyed JSON compressed with LZ-String's URI-component
//! alphabet (`A-Z a-z 0-9 + - $`), so the result can sit in a query value.
//! The key names match links produced by earlier builds of the widget; a stale
//! `v` key in those payloads is ignored.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::board::{BoardState, Square, integer_sqrt, is_perfect_square};
use crate::catalog::{ICON_COUNT, THEME_COUNT};
use crate::constants::MAX_SIDE;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no board payload present")]
    Missing,
    #[error("board payload did not decompress to any text")]
    Decompress,
    #[error("board payload is not valid UTF-16: {0}")]
    Text(#[from] std::string::FromUtf16Error),
    #[error("board payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("grid of {0} squares is not a perfect square of side 1..={max}", max = MAX_SIDE)]
    GridShape(usize),
    #[error("theme index {0} is outside the theme catalog")]
    Theme(usize),
    #[error("square {index} is stamped with unknown icon {icon}")]
    Stamp { index: usize, icon: usize },
}

#[derive(Debug, Deserialize)]
struct WireSquare {
    goal: String,
    #[serde(rename = "stampedIdx", default)]
    stamped_idx: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct WireBoard {
    n: String,
    #[serde(default)]
    s: Option<String>,
    g: Vec<WireSquare>,
    t: usize,
}

impl WireBoard {
    fn validate(&self) -> Result<(), DecodeError> {
        let len = self.g.len();
        if len == 0 || !is_perfect_square(len) || integer_sqrt(len) > MAX_SIDE {
            return Err(DecodeError::GridShape(len));
        }
        if self.t >= THEME_COUNT {
            return Err(DecodeError::Theme(self.t));
        }
        for (index, sq) in self.g.iter().enumerate() {
            if let Some(icon) = sq.stamped_idx.filter(|icon| *icon >= ICON_COUNT) {
                return Err(DecodeError::Stamp { index, icon });
            }
        }
        Ok(())
    }

    fn into_state(self) -> BoardState {
        BoardState {
            name: self.n,
            subtitle: self.s,
            squares: self
                .g
                .into_iter()
                .map(|sq| Square {
                    goal: sq.goal,
                    stamped_idx: sq.stamped_idx,
                })
                .collect(),
            theme_index: self.t,
            grid_version: 0,
        }
    }
}

fn to_wire(state: &BoardState) -> Value {
    let mut wire = Map::new();
    wire.insert("n".into(), json!(state.name));
    if let Some(subtitle) = &state.subtitle {
        wire.insert("s".into(), json!(subtitle));
    }
    wire.insert("t".into(), json!(state.theme_index));
    wire.insert(
        "g".into(),
        Value::Array(
            state
                .squares
                .iter()
                .map(|sq| json!({ "goal": sq.goal, "stampedIdx": sq.stamped_idx }))
                .collect(),
        ),
    );
    Value::Object(wire)
}

/// Compress a board into a query-safe string. `grid_version` is not encoded.
#[must_use]
pub fn encode(state: &BoardState) -> String {
    lz_str::compress_to_encoded_uri_component(to_wire(state).to_string().as_str())
}

/// Expand a payload produced by [`encode`].
///
/// # Errors
///
/// Returns an error when the payload does not decompress, is not the expected
/// JSON shape, or describes a board outside the catalog bounds.
pub fn decode(payload: &str) -> Result<BoardState, DecodeError> {
    if payload.trim().is_empty() {
        return Err(DecodeError::Missing);
    }
    // Form decoding turns '+' into ' '.
    let payload = payload.replace(' ', "+");
    let wide = lz_str::decompress_from_encoded_uri_component(payload.as_str())
        .ok_or(DecodeError::Decompress)?;
    if wide.is_empty() {
        return Err(DecodeError::Decompress);
    }
    let text = String::from_utf16(&wide)?;
    let wire: WireBoard = serde_json::from_str(&text)?;
    wire.validate()?;
    Ok(wire.into_state())
}

/// Hydrate from an optional payload, falling back to the default board.
///
/// Failures are logged and otherwise swallowed: a bad link just opens a
/// fresh card.
#[must_use]
pub fn decode_or_default(payload: Option<&str>, side: usize) -> BoardState {
    match payload.map_or(Err(DecodeError::Missing), decode) {
        Ok(state) => state,
        Err(DecodeError::Missing) => BoardState::default_with_side(side),
        Err(err) => {
            log::warn!("Ignoring shared board payload: {err}");
            BoardState::default_with_side(side)
        }
    }
}
