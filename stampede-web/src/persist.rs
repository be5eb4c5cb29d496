//! Debounced address-bar updates.
//!
//! The board session decides *what* to write and *when* it is due; this timer
//! only wakes the page up at that moment. Re-arming clears the previous
//! timeout so a burst of edits produces a single write.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;
use crate::error::WebError;

#[derive(Default)]
pub struct PersistTimer {
    pending: Option<(i32, Closure<dyn FnMut()>)>,
}

impl PersistTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_fire` after `delay_ms`, replacing any timeout still waiting.
    ///
    /// # Errors
    /// Returns an error when no window is available or the timer is refused.
    pub fn arm(&mut self, delay_ms: u64, on_fire: impl FnOnce() + 'static) -> Result<(), WebError> {
        self.cancel();
        let window = dom::require_window()?;
        let mut slot = Some(on_fire);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(fire) = slot.take() {
                fire();
            }
        });
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        )?;
        self.pending = Some((handle, closure));
        Ok(())
    }

    /// Clear the waiting timeout, if any.
    pub fn cancel(&mut self) {
        if let Some((handle, _closure)) = self.pending.take()
            && let Some(window) = dom::window()
        {
            window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for PersistTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
