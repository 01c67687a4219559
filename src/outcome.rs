//! Result taxonomy shared by every diagnostic.
//!
//! Each diagnostic returns exactly one [`TestOutcome`]: the single success
//! value [`TestOutcome::Ok`] or a dedicated failure value identifying the
//! subsystem that failed. There is no generic/unclassified error and no
//! aggregate result; retry and escalation policy belong to the caller.

/// Verdict of a single diagnostic invocation.
///
/// Two values deserve a note:
///
/// - [`StackOverflowFault`](TestOutcome::StackOverflowFault) is returned by
///   the runtime guard probe ([`diag::stack::overflow_check`]) when the
///   guard word has been disturbed. Inside the full stack-overflow test a
///   disturbed guard is the *expected* observation and maps to `Ok`.
/// - [`FlashFault`](TestOutcome::FlashFault) is reserved by the taxonomy
///   for external flash diagnostics; no flash test ships in this crate.
///
/// [`diag::stack::overflow_check`]: crate::diag::stack::overflow_check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TestOutcome {
    /// Subsystem healthy
    Ok,
    /// A general-purpose register has a stuck bit
    CpuRegisterFault,
    /// A control/status register has a stuck bit
    CsrFault,
    /// A RAM cell failed a march sequence
    RamFault,
    /// Reserved: external flash fault
    FlashFault,
    /// A program-counter address bit is stuck
    ProgramCounterFault,
    /// Crystal failed or main crystal frequency out of tolerance
    ClockFault,
    /// Stack guard word disturbed (overflow detected)
    StackOverflowFault,
    /// Stack guard never triggered within the recursion bound
    StackOverflowTestFailed,
    /// Watchdog did not reset the system when unserviced
    WatchdogTestFailed,
}

impl TestOutcome {
    /// Returns `true` for the single success value.
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, TestOutcome::Ok)
    }

    /// Returns a human-readable description of the outcome
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TestOutcome::Ok => "ok",
            TestOutcome::CpuRegisterFault => "CPU register fault",
            TestOutcome::CsrFault => "CSR fault",
            TestOutcome::RamFault => "RAM fault",
            TestOutcome::FlashFault => "flash fault",
            TestOutcome::ProgramCounterFault => "program counter fault",
            TestOutcome::ClockFault => "clock fault",
            TestOutcome::StackOverflowFault => "stack overflow detected",
            TestOutcome::StackOverflowTestFailed => "stack overflow guard never triggered",
            TestOutcome::WatchdogTestFailed => "watchdog did not reset",
        }
    }
}

impl core::fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
