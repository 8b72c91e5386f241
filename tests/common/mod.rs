//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_range_slider::ValueEvent;
use std::cell::RefCell;
use std::rc::Rc;

/// Tracks value notifications for testing.
///
/// Each entry records the event together with `(left, right)` as observed
/// from inside the listener.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    pub events: Rc<RefCell<Vec<(ValueEvent, i32, i32)>>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they were fired.
    pub fn kinds(&self) -> Vec<ValueEvent> {
        self.events.borrow().iter().map(|(e, _, _)| *e).collect()
    }

    pub fn count(&self, event: ValueEvent) -> usize {
        self.events.borrow().iter().filter(|(e, _, _)| *e == event).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Clear all recorded callbacks.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
