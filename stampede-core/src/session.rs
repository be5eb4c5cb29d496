//! Shell-side owner of the live board.
//!
//! A [`BoardSession`] holds the one `BoardState` for the page, checks inputs
//! before they reach the pure reducer, runs the line check after each stamp,
//! and queues the latest state for debounced URL persistence.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{BoardState, side_or_default};
use crate::catalog::{ICON_COUNT, THEME_COUNT};
use crate::codec;
use crate::constants::{MAX_SIDE, SHARE_TITLE_PREFIX};
use crate::debounce::Debouncer;
use crate::import::{ImportError, apply_goal_list, parse_goal_list};
use crate::reducer::{self, BoardAction};
use crate::win;

/// Whether taps stamp squares or edit their goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditMode {
    #[default]
    Stamping,
    EditingGoals,
}

impl EditMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Stamping => Self::EditingGoals,
            Self::EditingGoals => Self::Stamping,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("square {index} is outside a board of {len} squares")]
    Square { index: usize, len: usize },
    #[error("icon {0} is outside the icon catalog")]
    Icon(usize),
    #[error("theme {0} is outside the theme catalog")]
    Theme(usize),
    #[error("grid side {0} is outside 1..={max}", max = MAX_SIDE)]
    Side(usize),
    #[error("switch to goal editing before changing goals")]
    Locked,
    #[error("clear the stamp on square {0} before editing its goal")]
    Stamped(usize),
    #[error("switch back to stamping before stamping squares")]
    Editing,
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// What a dispatched action did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// True only for the stamp that first completed a line.
    pub won: bool,
    pub has_line: bool,
    pub structural: bool,
}

#[derive(Debug, Clone)]
pub struct BoardSession<R> {
    state: BoardState,
    mode: EditMode,
    has_line: bool,
    persist: Debouncer<BoardState>,
    rng: R,
}

impl<R: Rng> BoardSession<R> {
    pub fn new(state: BoardState, rng: R) -> Self {
        let has_line = win::has_line(&state.squares, state.side());
        Self {
            state,
            mode: EditMode::default(),
            has_line,
            persist: Debouncer::default(),
            rng,
        }
    }

    /// Hydrate from a shared payload, or start a default `side x side` board.
    ///
    /// A side outside `1..=MAX_SIDE` falls back to the default side.
    pub fn from_payload(payload: Option<&str>, side: usize, rng: R) -> Self {
        let side = side_or_default(side);
        Self::new(codec::decode_or_default(payload, side), rng)
    }

    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    #[must_use]
    pub const fn has_line(&self) -> bool {
        self.has_line
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> EditMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    #[must_use]
    pub fn share_title(&self) -> String {
        format!("{SHARE_TITLE_PREFIX}{}", self.state.name)
    }

    /// Current board encoded for the `d` query parameter.
    #[must_use]
    pub fn encoded(&self) -> String {
        codec::encode(&self.state)
    }

    /// Validate and apply an action, then queue the result for persistence.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when an index is out of range or the action
    /// is not allowed in the current mode. The board is left unchanged.
    pub fn dispatch(&mut self, action: &BoardAction, now_ms: u64) -> Result<Outcome, SessionError> {
        self.check(action)?;
        let next = reducer::apply(&self.state, action, &mut self.rng);
        Ok(self.commit(next, action, now_ms))
    }

    /// Parse a JSON goal list and write it over the board's goals.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Locked`] outside goal editing, or
    /// [`SessionError::Import`] when the list is malformed.
    pub fn import_goals(&mut self, input: &str, now_ms: u64) -> Result<usize, SessionError> {
        if self.mode != EditMode::EditingGoals {
            return Err(SessionError::Locked);
        }
        let goals = parse_goal_list(input)?;
        let applied = goals.len().min(self.state.squares.len());
        self.state = apply_goal_list(&self.state, &goals);
        self.persist.schedule(self.state.clone(), now_ms);
        log::debug!("Imported {applied} goals");
        Ok(applied)
    }

    /// Encoded payload for the latest state once the quiet window has passed.
    pub fn take_due_persist(&mut self, now_ms: u64) -> Option<String> {
        self.persist.poll(now_ms).map(|state| codec::encode(&state))
    }

    /// Encoded payload for whatever is queued, without waiting.
    pub fn flush_persist(&mut self) -> Option<String> {
        self.persist.flush().map(|state| codec::encode(&state))
    }

    /// Drop any queued write, e.g. after writing the URL directly.
    pub fn cancel_persist(&mut self) {
        self.persist.cancel();
    }

    #[must_use]
    pub fn persist_due_at(&self) -> Option<u64> {
        self.persist.due_at()
    }

    fn check_square(&self, index: usize) -> Result<(), SessionError> {
        let len = self.state.squares.len();
        if index < len {
            Ok(())
        } else {
            Err(SessionError::Square { index, len })
        }
    }

    fn check(&self, action: &BoardAction) -> Result<(), SessionError> {
        match action {
            BoardAction::Retheme { index } if *index >= THEME_COUNT => {
                Err(SessionError::Theme(*index))
            }
            BoardAction::EditGoal { index, .. } => {
                self.check_square(*index)?;
                if self.mode != EditMode::EditingGoals {
                    Err(SessionError::Locked)
                } else if self.state.squares[*index].is_stamped() {
                    Err(SessionError::Stamped(*index))
                } else {
                    Ok(())
                }
            }
            BoardAction::ToggleStamp { index, icon } => {
                self.check_square(*index)?;
                if *icon >= ICON_COUNT {
                    Err(SessionError::Icon(*icon))
                } else if self.mode != EditMode::Stamping {
                    Err(SessionError::Editing)
                } else {
                    Ok(())
                }
            }
            BoardAction::Resize { side } if *side == 0 || *side > MAX_SIDE => {
                Err(SessionError::Side(*side))
            }
            _ => Ok(()),
        }
    }

    fn commit(&mut self, next: BoardState, action: &BoardAction, now_ms: u64) -> Outcome {
        let structural = action.is_structural();
        let had_line = self.has_line;
        self.has_line = win::has_line(&next.squares, next.side());
        let won = matches!(action, BoardAction::ToggleStamp { .. }) && self.has_line && !had_line;
        if won {
            log::info!("Board '{}' completed a line", next.display_name());
        }
        if structural {
            log::debug!("Grid rebuilt (version {})", next.grid_version);
        }
        self.state = next;
        self.persist.schedule(self.state.clone(), now_ms);
        Outcome {
            won,
            has_line: self.has_line,
            structural,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(side: usize) -> BoardSession<StdRng> {
        let rng = StdRng::seed_from_u64(1);
        BoardSession::new(BoardState::default_with_side(side), rng)
    }

    fn stamp(s: &mut BoardSession<StdRng>, index: usize) -> Outcome {
        let action = BoardAction::ToggleStamp { index, icon: 0 };
        s.dispatch(&action, 0).unwrap()
    }

    fn rename(name: &str) -> BoardAction {
        BoardAction::Rename { name: name.into() }
    }

    #[test]
    fn win_is_reported_once_per_transition() {
        let mut s = session(3);
        assert!(!stamp(&mut s, 0).won);
        assert!(!stamp(&mut s, 1).won);
        let third = stamp(&mut s, 2);
        assert!(third.won && third.has_line);
        // A second line while one is already complete is not a new win.
        let extra = stamp(&mut s, 3);
        assert!(!extra.won && extra.has_line);
        // Breaking and re-completing the line celebrates again.
        stamp(&mut s, 2);
        assert!(!s.has_line());
        assert!(stamp(&mut s, 2).won);
    }

    #[test]
    fn reset_clears_line_without_reporting_win() {
        let mut s = session(1);
        assert!(stamp(&mut s, 0).won);
        let out = s.dispatch(&BoardAction::Reset, 0).unwrap();
        assert!(out.structural && !out.won && !out.has_line);
    }

    #[test]
    fn goal_edits_require_editing_mode_and_unstamped_square() {
        let mut s = session(2);
        let edit = BoardAction::EditGoal {
            index: 1,
            text: "Hike".into(),
        };
        assert!(matches!(s.dispatch(&edit, 0), Err(SessionError::Locked)));
        stamp(&mut s, 1);
        assert_eq!(s.toggle_mode(), EditMode::EditingGoals);
        let stamped = s.dispatch(&edit, 0);
        assert!(matches!(stamped, Err(SessionError::Stamped(1))));
        let toggle = BoardAction::ToggleStamp { index: 1, icon: 0 };
        let editing = s.dispatch(&toggle, 0);
        assert!(matches!(editing, Err(SessionError::Editing)));
        let ok = BoardAction::EditGoal {
            index: 0,
            text: "Hike".into(),
        };
        s.dispatch(&ok, 0).unwrap();
        assert_eq!(s.state().squares[0].goal, "Hike");
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        let mut s = session(2);
        let cases = [
            BoardAction::ToggleStamp { index: 4, icon: 0 },
            BoardAction::ToggleStamp { index: 0, icon: 12 },
            BoardAction::Retheme { index: 9 },
            BoardAction::Resize { side: 0 },
            BoardAction::Resize { side: MAX_SIDE + 1 },
            BoardAction::Resize { side: 65_536 },
            BoardAction::Resize { side: usize::MAX },
        ];
        let errors: Vec<SessionError> = cases
            .iter()
            .map(|action| s.dispatch(action, 0).unwrap_err())
            .collect();
        assert!(matches!(errors[0], SessionError::Square { index: 4, .. }));
        assert!(matches!(errors[1], SessionError::Icon(12)));
        assert!(matches!(errors[2], SessionError::Theme(9)));
        assert!(matches!(errors[3], SessionError::Side(0)));
        assert!(matches!(errors[4], SessionError::Side(13)));
        assert!(matches!(errors[5], SessionError::Side(65_536)));
        assert!(matches!(errors[6], SessionError::Side(usize::MAX)));
        assert_eq!(errors[4].to_string(), "grid side 13 is outside 1..=12");
        assert_eq!(s.state(), &BoardState::default_with_side(2));
        assert_eq!(s.persist_due_at(), None);

        let largest = BoardAction::Resize { side: MAX_SIDE };
        s.dispatch(&largest, 0).unwrap();
        assert_eq!(s.state().side(), MAX_SIDE);
    }

    #[test]
    fn unusable_side_hydrates_default_board() {
        let fresh = BoardSession::from_payload(None, 0, StdRng::seed_from_u64(2));
        assert_eq!(fresh.state(), &BoardState::default());
        assert!(!fresh.has_line());

        let huge = usize::MAX;
        let fresh = BoardSession::from_payload(None, huge, StdRng::seed_from_u64(2));
        assert_eq!(fresh.state().side(), 5);
    }

    #[test]
    fn persistence_encodes_only_latest_state() {
        let mut s = session(2);
        s.dispatch(&rename("A"), 0).unwrap();
        s.dispatch(&rename("B"), 200).unwrap();
        assert_eq!(s.take_due_persist(600), None);
        let payload = s.take_due_persist(700).expect("due after quiet window");
        assert_eq!(codec::decode(&payload).unwrap().name, "B");
        assert_eq!(s.take_due_persist(10_000), None);

        let retheme = BoardAction::Retheme { index: 2 };
        s.dispatch(&retheme, 20_000).unwrap();
        let flushed = s.flush_persist().expect("queued state");
        assert_eq!(codec::decode(&flushed).unwrap().theme_index, 2);
        assert_eq!(s.flush_persist(), None);
    }

    #[test]
    fn cancelled_persist_writes_nothing() {
        let mut s = session(2);
        s.dispatch(&rename("C"), 0).unwrap();
        assert_eq!(s.persist_due_at(), Some(500));
        s.cancel_persist();
        assert_eq!(s.persist_due_at(), None);
        assert_eq!(s.take_due_persist(10_000), None);
        assert_eq!(s.state().name, "C");
    }

    #[test]
    fn clearing_the_subtitle_omits_it_from_the_payload() {
        let mut s = session(2);
        let set = BoardAction::SetSubtitle { text: "Q3".into() };
        s.dispatch(&set, 0).unwrap();
        let clear = BoardAction::SetSubtitle { text: "".into() };
        s.dispatch(&clear, 0).unwrap();
        assert_eq!(s.state().subtitle, None);
        assert_eq!(codec::decode(&s.encoded()).unwrap().subtitle, None);
    }

    #[test]
    fn import_requires_editing_and_reports_bad_input() {
        let mut s = session(2);
        let locked = s.import_goals(r#"["a"]"#, 0);
        assert!(matches!(locked, Err(SessionError::Locked)));
        s.set_mode(EditMode::EditingGoals);
        let bad = s.import_goals("[1]", 0);
        assert!(matches!(
            bad,
            Err(SessionError::Import(ImportError::NotText(0)))
        ));
        let applied = s.import_goals(r#"["a","b","c","d","e"]"#, 0).unwrap();
        assert_eq!(applied, 4);
        assert_eq!(s.state().squares[3].goal, "d");
    }

    #[test]
    fn share_title_uses_board_name() {
        let s = session(2);
        assert_eq!(s.share_title(), "Stampede - Team Stampede");
    }
}
