//! Watchdog reset diagnostic.
//!
//! A watchdog that cannot reset the system is worse than none, so this
//! test provokes the real thing. The proof arrives on the *next* boot: if
//! the current reset cause already says "main watchdog", the mechanism is
//! proven and the hardware is left untouched. Otherwise a two-stage
//! session is armed - interrupt at the timeout, full system reset at
//! twice the timeout - deliberately never fed, and the test busy-waits.
//! Surviving the wait is the failure signature.

use embedded_hal::delay::DelayNs;

use crate::constants::{WDT_POLL_INTERVAL_US, WDT_WAIT_ITERATIONS};
use crate::outcome::TestOutcome;
use crate::platform::wdt::{ResetCause, SystemWatchdog, WdtStage, WdtStageAction};

/// Verify the watchdog resets the system when unserviced.
///
/// Returns [`TestOutcome::Ok`] immediately when the current boot was
/// caused by this watchdog. Otherwise arms, never feeds, waits the
/// bounded interval, and - still being alive - disarms and returns
/// [`TestOutcome::WatchdogTestFailed`]. A healthy watchdog never lets
/// this function return from the armed path.
pub fn run<W, D>(wdt: &mut W, delay: &mut D, timeout_ms: u32) -> TestOutcome
where
    W: SystemWatchdog,
    D: DelayNs,
{
    if wdt.reset_cause() == ResetCause::MainWatchdog {
        return TestOutcome::Ok;
    }

    wdt.arm([
        WdtStage {
            timeout_ms,
            action: WdtStageAction::Interrupt,
        },
        WdtStage {
            timeout_ms: timeout_ms.saturating_mul(2),
            action: WdtStageAction::ResetSystem,
        },
    ]);

    #[cfg(feature = "defmt")]
    defmt::info!("watchdog armed for {} ms, not feeding", timeout_ms);

    // a real reset cuts this loop short; only a broken watchdog lets it
    // finish
    for _ in 0..WDT_WAIT_ITERATIONS {
        delay.delay_us(WDT_POLL_INTERVAL_US);
    }

    wdt.disarm();
    TestOutcome::WatchdogTestFailed
}

// =============================================================================
// Unit Tests
// =============================================================================
