//! JavaScript-facing handle on the live board.
//!
//! The page's renderer owns a single `StampedeBoard`, calls one method per
//! user action and redraws from `state()`. Every accepted change re-arms the
//! address-bar timer so only the last state of a burst reaches the URL.
use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use stampede_core::constants::DEFAULT_SIDE;
use stampede_core::{
    BoardAction, BoardSession, EditMode, ICONS, Outcome, THEMES, completed_lines, side_or_default,
};
use wasm_bindgen::prelude::*;

use crate::error::WebError;
use crate::persist::PersistTimer;
use crate::{dom, share, url};

struct Inner {
    session: BoardSession<ChaCha20Rng>,
    timer: PersistTimer,
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, WebError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn schedule_persist(inner: &Rc<RefCell<Inner>>) -> Result<(), WebError> {
    let Some(due) = inner.borrow().session.persist_due_at() else {
        return Ok(());
    };
    let delay = due.saturating_sub(dom::now_ms());
    let weak = Rc::downgrade(inner);
    inner.borrow_mut().timer.arm(delay, move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let payload = inner.borrow_mut().session.flush_persist();
        if let Some(payload) = payload
            && let Err(err) = url::write_payload(&payload)
        {
            log::warn!("Could not update the address bar: {err}");
        }
    })
}

#[wasm_bindgen]
pub struct StampedeBoard {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl StampedeBoard {
    /// Hydrate from the page URL, or start a fresh `side x side` card.
    ///
    /// A missing or out-of-range side uses the default of 5.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(side: Option<usize>) -> Self {
        let side = side.map_or(DEFAULT_SIDE, side_or_default);
        let payload = url::current_payload();
        let rng = ChaCha20Rng::seed_from_u64(dom::entropy());
        let session = BoardSession::from_payload(payload.as_deref(), side, rng);
        log::info!(
            "Loaded '{}' ({}x{})",
            session.state().display_name(),
            session.state().side(),
            session.state().side()
        );
        Self {
            inner: Rc::new(RefCell::new(Inner {
                session,
                timer: PersistTimer::new(),
            })),
        }
    }

    /// The board as a plain JS object.
    ///
    /// # Errors
    /// Returns an error if the board cannot be converted.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(to_js(self.inner.borrow().session.state())?)
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.inner.borrow().session.state().side()
    }

    #[wasm_bindgen(js_name = gridVersion)]
    #[must_use]
    pub fn grid_version(&self) -> u32 {
        self.inner.borrow().session.state().grid_version
    }

    #[wasm_bindgen(js_name = displayName)]
    #[must_use]
    pub fn display_name(&self) -> String {
        let inner = self.inner.borrow();
        inner.session.state().display_name().to_string()
    }

    #[wasm_bindgen(js_name = hasLine)]
    #[must_use]
    pub fn has_line(&self) -> bool {
        self.inner.borrow().session.has_line()
    }

    /// Rows, columns and diagonals that are fully stamped.
    ///
    /// # Errors
    /// Returns an error if the lines cannot be converted.
    #[wasm_bindgen(js_name = completedLines)]
    pub fn completed_lines(&self) -> Result<JsValue, JsValue> {
        let inner = self.inner.borrow();
        let state = inner.session.state();
        Ok(to_js(&completed_lines(&state.squares, state.side()))?)
    }

    #[wasm_bindgen(js_name = isEditing)]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.inner.borrow().session.mode() == EditMode::EditingGoals
    }

    /// Flip between stamping and goal editing; returns true when now editing.
    #[wasm_bindgen(js_name = toggleMode)]
    pub fn toggle_mode(&self) -> bool {
        self.inner.borrow_mut().session.toggle_mode() == EditMode::EditingGoals
    }

    /// # Errors
    /// Returns an error if the outcome cannot be converted.
    pub fn rename(&self, name: String) -> Result<JsValue, JsValue> {
        self.run(BoardAction::Rename { name })
    }

    /// # Errors
    /// Returns an error for a theme outside the catalog.
    pub fn retheme(&self, index: usize) -> Result<JsValue, JsValue> {
        self.run(BoardAction::Retheme { index })
    }

    /// # Errors
    /// Returns an error if the outcome cannot be converted.
    #[wasm_bindgen(js_name = setSubtitle)]
    pub fn set_subtitle(&self, text: String) -> Result<JsValue, JsValue> {
        self.run(BoardAction::SetSubtitle { text })
    }

    /// # Errors
    /// Returns an error outside goal editing, for a stamped square, or for an
    /// index past the end of the grid.
    #[wasm_bindgen(js_name = editGoal)]
    pub fn edit_goal(&self, index: usize, text: String) -> Result<JsValue, JsValue> {
        self.run(BoardAction::EditGoal { index, text })
    }

    /// Stamp or un-stamp a square. The outcome's `won` flag is set only on the
    /// stamp that first completes a line.
    ///
    /// # Errors
    /// Returns an error while editing goals or for an out-of-range index/icon.
    #[wasm_bindgen(js_name = toggleStamp)]
    pub fn toggle_stamp(&self, index: usize, icon: usize) -> Result<JsValue, JsValue> {
        self.run(BoardAction::ToggleStamp { index, icon })
    }

    /// # Errors
    /// Returns an error if the outcome cannot be converted.
    pub fn randomize(&self) -> Result<JsValue, JsValue> {
        self.run(BoardAction::Randomize)
    }

    /// # Errors
    /// Returns an error for a side outside `1..=12`.
    pub fn resize(&self, side: usize) -> Result<JsValue, JsValue> {
        self.run(BoardAction::Resize { side })
    }

    /// # Errors
    /// Returns an error if the outcome cannot be converted.
    pub fn reset(&self) -> Result<JsValue, JsValue> {
        self.run(BoardAction::Reset)
    }

    /// Apply a `{ type: "toggleStamp", index, icon }` style action object.
    ///
    /// # Errors
    /// Returns an error for an unknown action shape or a rejected action.
    pub fn dispatch(&self, action: JsValue) -> Result<JsValue, JsValue> {
        let action = serde_wasm_bindgen::from_value::<BoardAction>(action);
        self.run(action.map_err(WebError::from)?)
    }

    /// Overwrite goals from a JSON array of strings; returns how many applied.
    ///
    /// # Errors
    /// Returns a readable message for malformed lists or when not editing.
    #[wasm_bindgen(js_name = importGoals)]
    pub fn import_goals(&self, json: &str) -> Result<usize, JsValue> {
        let applied = self
            .inner
            .borrow_mut()
            .session
            .import_goals(json, dom::now_ms())
            .map_err(WebError::from)?;
        schedule_persist(&self.inner)?;
        Ok(applied)
    }

    /// Current board payload for the `d` query parameter.
    #[must_use]
    pub fn encoded(&self) -> String {
        self.inner.borrow().session.encoded()
    }

    #[wasm_bindgen(js_name = shareTitle)]
    #[must_use]
    pub fn share_title(&self) -> String {
        self.inner.borrow().session.share_title()
    }

    /// Link to this board, whether or not the address bar has caught up.
    ///
    /// # Errors
    /// Returns an error outside a browser.
    #[wasm_bindgen(js_name = shareUrl)]
    pub fn share_url(&self) -> Result<String, JsValue> {
        let payload = self.encoded();
        Ok(url::with_payload(&url::current_href()?, &payload)?)
    }

    /// Write the URL now, copy it and offer the share sheet.
    ///
    /// Resolves to `"shared"` or `"copied"`.
    #[must_use]
    pub fn share(&self) -> js_sys::Promise {
        let prepared = self.prepare_share();
        wasm_bindgen_futures::future_to_promise(async move {
            let (title, link) = prepared?;
            let outcome = share::share_link(&title, &link).await?;
            Ok(to_js(&outcome)?)
        })
    }
}

impl StampedeBoard {
    fn run(&self, action: BoardAction) -> Result<JsValue, JsValue> {
        let outcome: Outcome = self
            .inner
            .borrow_mut()
            .session
            .dispatch(&action, dom::now_ms())
            .map_err(WebError::from)?;
        schedule_persist(&self.inner)?;
        Ok(to_js(&outcome)?)
    }

    fn prepare_share(&self) -> Result<(String, String), WebError> {
        let mut inner = self.inner.borrow_mut();
        inner.timer.cancel();
        inner.session.cancel_persist();
        let link = url::write_payload(&inner.session.encoded())?;
        Ok((inner.session.share_title(), link))
    }
}

/// Theme table for the renderer's palette picker.
///
/// # Errors
/// Returns an error if the table cannot be converted.
#[wasm_bindgen]
pub fn themes() -> Result<JsValue, JsValue> {
    Ok(to_js(&THEMES[..])?)
}

/// Stamp icon table for the renderer's stamp picker.
///
/// # Errors
/// Returns an error if the table cannot be converted.
#[wasm_bindgen]
pub fn icons() -> Result<JsValue, JsValue> {
    Ok(to_js(&ICONS[..])?)
}
