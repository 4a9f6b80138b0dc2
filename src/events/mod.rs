pub mod controls;
pub mod pointer;

pub use controls::wire_start_button;
pub use pointer::{wire_pointermove, wire_resize};

use particles_core::{InputEvent, PointerInputSource};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// DOM listeners push here; the frame callback drains it before rendering.
#[derive(Clone, Default)]
pub struct EventQueue {
    pending: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl EventQueue {
    #[inline]
    pub fn push(&self, event: InputEvent) {
        self.pending.borrow_mut().push_back(event);
    }
}

impl PointerInputSource for EventQueue {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.pending.borrow_mut().pop_front()
    }
}
