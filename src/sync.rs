//! ISR-to-foreground signaling primitive.
//!
//! The crystal-fail diagnostic observes an asynchronous hardware event
//! through a one-slot flag: the interrupt handler is the only writer, the
//! foreground polling loop the only reader. No lock is needed for that
//! discipline, but the accesses must not be cached or reordered across
//! loop iterations - [`FailFlag`] goes through `critical_section::with`,
//! which orders them on every supported core.

use core::cell::Cell;

use critical_section::Mutex;

/// One-slot failure flag, settable from interrupt context.
///
/// Const-constructible, so it can live in a `static` that both the
/// interrupt handler and the polling loop reach.
///
/// # Example
///
/// ```ignore
/// static XTAL_DEAD: FailFlag = FailFlag::new();
///
/// fn crystal_fail_isr() {
///     XTAL_DEAD.set();
/// }
/// ```
pub struct FailFlag {
    inner: Mutex<Cell<bool>>,
}

impl FailFlag {
    /// Create a cleared flag (const, suitable for static initialization).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(false)),
        }
    }

    /// Raise the flag. Called from interrupt context.
    #[inline]
    pub fn set(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(true));
    }

    /// Whether the flag has been raised
    #[inline]
    pub fn is_set(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// Lower the flag, typically before arming the hardware block
    #[inline]
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(false));
    }
}

impl Default for FailFlag {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
