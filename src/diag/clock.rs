//! Clock integrity diagnostics.
//!
//! Two independent checks:
//!
//! - [`external_crystal`] proves the external 32 kHz crystal is alive by
//!   arming the crystal-health watchdog (no automatic backup clock) and
//!   polling its interrupt-set failure flag for a bounded window.
//! - [`main_crystal`] measures the main crystal against the 32 kHz
//!   reference through the hardware calibration unit and compares the
//!   estimated frequency with the configured expectation.

use embedded_hal::delay::DelayNs;

use crate::constants::{
    CLK_CAL_CYCLES, CLK_CAL_FRACT, CRYSTAL_POLL_INTERVAL_US, CRYSTAL_WDT_TIMEOUT, SLOW_CLK_HZ,
};
use crate::outcome::TestOutcome;
use crate::platform::clock::{ClockCalibration, CrystalMonitor};

/// External-crystal failure test.
///
/// Arms the monitor, then polls the failure flag once per millisecond for
/// `wait_ms`. The flag never rising within the window is the healthy
/// verdict; there is no separate timeout outcome. A monitor that cannot
/// be armed reports [`TestOutcome::ClockFault`] too. The monitor is
/// disarmed on every path before returning.
pub fn external_crystal<C, D>(monitor: &mut C, delay: &mut D, wait_ms: u32) -> TestOutcome
where
    C: CrystalMonitor,
    D: DelayNs,
{
    if !monitor.arm(CRYSTAL_WDT_TIMEOUT) {
        #[cfg(feature = "defmt")]
        defmt::warn!("failed to arm the crystal-health watchdog");
        return TestOutcome::ClockFault;
    }

    let mut failed = false;
    for _ in 0..wait_ms {
        delay.delay_us(CRYSTAL_POLL_INTERVAL_US);
        if monitor.failed() {
            failed = true;
            break;
        }
    }

    monitor.disarm();

    if failed {
        TestOutcome::ClockFault
    } else {
        TestOutcome::Ok
    }
}

/// Main-crystal frequency drift test.
///
/// `expected_hz` and `tolerance_percent` come from the configuration; a
/// zero calibration ratio is degenerate and reported as a fault without
/// further math. The deviation comparison is exact integer arithmetic:
/// the estimate is within tolerance iff
/// `|measured - expected| * 100 <= expected * tolerance_percent`.
pub fn main_crystal<C>(cal: &mut C, expected_hz: u32, tolerance_percent: u32) -> TestOutcome
where
    C: ClockCalibration,
{
    let ratio = cal.measure_ratio(CLK_CAL_CYCLES);
    if ratio == 0 {
        return TestOutcome::ClockFault;
    }

    // ratio is the 32 kHz period in main-crystal cycles, fixed point with
    // CLK_CAL_FRACT fraction bits
    let measured_hz = (ratio >> CLK_CAL_FRACT) * SLOW_CLK_HZ;

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "xtal calibration ratio {:#010x}, estimated {} Hz, expected {} Hz",
        ratio,
        measured_hz,
        expected_hz
    );

    let deviation = u64::from(measured_hz.abs_diff(expected_hz));
    if deviation * 100 > u64::from(expected_hz) * u64::from(tolerance_percent) {
        return TestOutcome::ClockFault;
    }

    TestOutcome::Ok
}

// =============================================================================
// Unit Tests
// =============================================================================
