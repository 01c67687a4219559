//! Clock capabilities: crystal-health monitoring and frequency calibration.

// =============================================================================
// Crystal Monitor
// =============================================================================

/// Crystal-health watchdog block watching the external 32 kHz crystal.
///
/// Arming installs the implementation's interrupt handler; when the
/// hardware declares the crystal dead, the handler sets a failure flag
/// that [`failed`](CrystalMonitor::failed) reports. The flag has exactly
/// one writer (interrupt context) and one reader (the polling loop), and
/// implementations must make it immune to caching and reordering -
/// `sync::FailFlag` does (with the `critical-section` feature), or an
/// equivalent acquire/release atomic.
///
/// The diagnostic arms without an automatic backup clock: a dead crystal
/// must stay observable, not be papered over.
pub trait CrystalMonitor {
    /// Arm the watchdog with `timeout_ticks` of the 32 kHz clock.
    ///
    /// Clears any stale failure flag. Returns `false` if the hardware
    /// block could not be armed.
    fn arm(&mut self, timeout_ticks: u32) -> bool;

    /// Whether the failure flag has been set from interrupt context
    fn failed(&self) -> bool;

    /// Disable the watchdog and detach the handler
    fn disarm(&mut self);
}

// =============================================================================
// Clock Calibration
// =============================================================================

/// Hardware clock-ratio calibration between the main crystal and the
/// 32 kHz reference.
pub trait ClockCalibration {
    /// Count main-crystal cycles over `slow_cycles` reference cycles.
    ///
    /// The result is the period of the reference clock in main-crystal
    /// cycles, fixed-point with [`CLK_CAL_FRACT`] fraction bits. Zero is
    /// the degenerate no-measurement case and is treated as a fault by
    /// the caller.
    ///
    /// [`CLK_CAL_FRACT`]: crate::constants::CLK_CAL_FRACT
    fn measure_ratio(&mut self, slow_cycles: u32) -> u32;
}
