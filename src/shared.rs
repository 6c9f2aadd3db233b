//! Shared strip access for multi-context use.
//!
//! The engine itself is single-threaded and non-reentrant. When a strip
//! must be reached from more than one execution context (main loop plus
//! interrupt handler), a single mutex around all operations is
//! sufficient serialization. Built on `critical-section` so it works in
//! bare-metal environments.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::StripSink;
use crate::strip::Strip;

/// A [`Strip`] wrapped in a critical-section mutex.
pub struct SharedStrip<S: StripSink, const BUF_CAP: usize> {
    inner: Mutex<RefCell<Strip<S, BUF_CAP>>>,
}

impl<S: StripSink, const BUF_CAP: usize> SharedStrip<S, BUF_CAP> {
    pub const fn new(strip: Strip<S, BUF_CAP>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(strip)),
        }
    }

    /// Run `f` with exclusive access to the strip.
    pub fn with<R>(&self, f: impl FnOnce(&mut Strip<S, BUF_CAP>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }
}
