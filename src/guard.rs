//! Re-entrancy flag for frame output.
//!
//! Built on `critical-section`, so it can be shared with interrupt
//! handlers through a `static`. It is a single flag, not a lock: a caller
//! that finds it taken gets nothing and nothing is queued.

use core::cell::Cell;

use critical_section::Mutex;

/// Marks that strips are being written to hardware.
pub struct FrameGuard {
    writing: Mutex<Cell<bool>>,
}

impl FrameGuard {
    /// Create a released guard.
    pub const fn new() -> Self {
        Self {
            writing: Mutex::new(Cell::new(false)),
        }
    }

    /// Try to take the guard.
    ///
    /// Returns `None` if a frame is already being written. The flag is
    /// released when the returned token is dropped.
    pub fn try_acquire(&self) -> Option<FrameToken<'_>> {
        critical_section::with(|cs| {
            let writing = self.writing.borrow(cs);
            if writing.get() {
                return None;
            }
            writing.set(true);
            Some(FrameToken { guard: self })
        })
    }

    /// Check if a frame is being written.
    pub fn is_writing(&self) -> bool {
        critical_section::with(|cs| self.writing.borrow(cs).get())
    }
}

impl Default for FrameGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Proof of holding a [`FrameGuard`].
pub struct FrameToken<'a> {
    guard: &'a FrameGuard,
}

impl Drop for FrameToken<'_> {
    fn drop(&mut self) {
        critical_section::with(|cs| self.guard.writing.borrow(cs).set(false));
    }
}
