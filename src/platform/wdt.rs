//! Watchdog capability and the reset-cause query.

// =============================================================================
// Reset Cause
// =============================================================================

/// Hardware event that caused the most recent boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetCause {
    /// Power-on or external reset pin
    PowerOn,
    /// Brownout detector
    Brownout,
    /// Software-requested reset
    Software,
    /// Main system watchdog (the one this crate tests)
    MainWatchdog,
    /// RTC/super watchdog
    RtcWatchdog,
    /// Wake from deep sleep
    DeepSleepWake,
    /// Anything the platform cannot classify
    Unknown,
}

// =============================================================================
// Watchdog Session
// =============================================================================

/// Action taken when a watchdog stage expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WdtStageAction {
    /// Stage disabled
    Off,
    /// Raise an interrupt
    Interrupt,
    /// Reset the whole system
    ResetSystem,
}

/// One stage of a watchdog session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WdtStage {
    /// Stage expiry, in milliseconds from the last feed
    pub timeout_ms: u32,
    /// Action on expiry
    pub action: WdtStageAction,
}

/// System watchdog block.
///
/// The diagnostic owns the block exclusively while it runs: it arms a
/// two-stage session, deliberately never feeds, and either the hardware
/// resets the system (observed as [`ResetCause::MainWatchdog`] on the next
/// boot) or the test disarms and reports failure.
pub trait SystemWatchdog {
    /// Which hardware event caused the current boot
    fn reset_cause(&self) -> ResetCause;

    /// Configure and enable both stages.
    ///
    /// Implementations handle the write-protect dance the hardware
    /// requires; the session is live when this returns.
    fn arm(&mut self, stages: [WdtStage; 2]);

    /// Disable the watchdog and release the block
    fn disarm(&mut self);
}
