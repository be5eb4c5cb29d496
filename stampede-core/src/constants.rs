//! Centralized defaults for Stampede boards.
//!
//! Everything a shell needs to build a fresh board or talk to the address bar
//! lives here so the values only change through reviewed code.

// Board defaults ------------------------------------------------------------
pub const DEFAULT_SIDE: usize = 5;
/// Largest grid a board may be resized to or decoded as.
pub const MAX_SIDE: usize = 12;
pub const DEFAULT_NAME: &str = "Team Stampede";
pub const EMPTY_NAME_FALLBACK: &str = "New Team";
/// Placeholder goals read `"{(position + 1) * GOAL_STEP} Steps"`.
pub const GOAL_STEP: usize = 1000;
pub const GOAL_SUFFIX: &str = "Steps";

// URL persistence -------------------------------------------------------------
pub const QUERY_KEY: &str = "d";
pub const PERSIST_QUIET_MS: u64 = 500;

// Sharing ---------------------------------------------------------------------
pub const SHARE_TITLE_PREFIX: &str = "Stampede - ";
pub const SHARE_TEXT: &str = "Check out our team's step progress on this Bingo card!";
