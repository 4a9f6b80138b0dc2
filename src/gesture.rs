use std::cell::{Cell, RefCell};

/// Value built inside a user gesture and collected later by the frame loop.
///
/// Only the first `prepare_with` runs its builder; later gestures are no-ops
/// even after the value has been taken.
pub struct GestureSlot<T> {
    armed: Cell<bool>,
    value: RefCell<Option<T>>,
}

impl<T> Default for GestureSlot<T> {
    fn default() -> Self {
        Self {
            armed: Cell::new(false),
            value: RefCell::new(None),
        }
    }
}

impl<T> GestureSlot<T> {
    /// Returns whether `build` ran.
    pub fn prepare_with(&self, build: impl FnOnce() -> T) -> bool {
        if self.armed.replace(true) {
            return false;
        }
        *self.value.borrow_mut() = Some(build());
        true
    }

    pub fn take(&self) -> Option<T> {
        self.value.borrow_mut().take()
    }
}
