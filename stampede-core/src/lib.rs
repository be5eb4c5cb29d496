//! Stampede board engine
//!
//! Platform-agnostic logic for a shareable bingo card: the board model, pure
//! reducer transitions, line detection and the URL payload codec. Rendering
//! and browser APIs live in the web crate.

pub mod board;
pub mod catalog;
pub mod codec;
pub mod constants;
pub mod debounce;
pub mod import;
pub mod reducer;
pub mod session;
pub mod win;

// Re-export commonly used types
pub use board::{BoardState, Square, default_goal, side_or_default};
pub use catalog::{ICON_COUNT, ICONS, StampIcon, THEME_COUNT, THEMES, Theme};
pub use codec::{DecodeError, decode, decode_or_default, encode};
pub use debounce::Debouncer;
pub use import::{ImportError, apply_goal_list, parse_goal_list};
pub use reducer::{
    BoardAction, apply, edit_goal, randomize, rename, reset, resize, retheme, set_subtitle,
    toggle_stamp,
};
pub use session::{BoardSession, EditMode, Outcome, SessionError};
pub use win::{Line, completed_lines, has_line, lines};
