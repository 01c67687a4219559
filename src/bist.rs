//! BIST engine facade.
//!
//! [`Bist`] bundles a [`Platform`] implementation, a delay provider and a
//! [`BistConfig`] into the public contract: one entry point per
//! diagnostic, each taking no arguments and returning a
//! [`TestOutcome`]. An external orchestrator (boot sequence or runtime
//! loop) decides when to call which test and what to do with a fault;
//! the facade only runs one diagnostic at a time, to completion.

use embedded_hal::delay::DelayNs;

use crate::config::BistConfig;
use crate::constants::{RAM_BACKUP_CHUNK_WORDS, STACK_RECURSION_LIMIT};
use crate::diag;
use crate::outcome::TestOutcome;
use crate::platform::Platform;

/// Built-in self test engine.
///
/// Owns the platform capabilities and the backup buffer the RAM marches
/// restore from, so repeated invocations need no allocation and no setup.
///
/// # Example
/// ```ignore
/// let mut bist = Bist::new(platform, delay);
///
/// let results = [
///     bist.cpu_register_test(),
///     bist.csr_test(),
///     bist.ram_march_x_test(),
///     bist.main_crystal_test(),
/// ];
///
/// if results.iter().any(|r| !r.is_ok()) {
///     // escalation policy belongs to the caller
/// }
/// ```
pub struct Bist<P: Platform, D: DelayNs> {
    platform: P,
    delay: D,
    config: BistConfig,
    backup: [u32; RAM_BACKUP_CHUNK_WORDS],
}

impl<P: Platform, D: DelayNs> Bist<P, D> {
    /// Create an engine with the default configuration
    pub fn new(platform: P, delay: D) -> Self {
        Self::with_config(platform, delay, BistConfig::new())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(platform: P, delay: D, config: BistConfig) -> Self {
        Self {
            platform,
            delay,
            config,
            backup: [0; RAM_BACKUP_CHUNK_WORDS],
        }
    }

    /// Active configuration
    pub fn config(&self) -> &BistConfig {
        &self.config
    }

    /// Release the platform and delay provider
    pub fn into_parts(self) -> (P, D) {
        (self.platform, self.delay)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Bit-pattern round-trip over the general-purpose register file
    pub fn cpu_register_test(&mut self) -> TestOutcome {
        diag::cpu_regs::run(self.platform.gprs())
    }

    /// Masked bit-pattern round-trip over the control/status registers
    pub fn csr_test(&mut self) -> TestOutcome {
        diag::csr_regs::run(self.platform.csrs())
    }

    /// Provoke a stack overflow and confirm the guard mechanism fires
    pub fn stack_overflow_test(&mut self) -> TestOutcome {
        diag::stack::run(self.platform.stack_guard(), STACK_RECURSION_LIMIT)
    }

    /// Arm the stack guard word for runtime monitoring
    pub fn stack_guard_arm(&mut self) {
        diag::stack::arm(self.platform.stack_guard());
    }

    /// Probe the stack guard word without driving any recursion
    pub fn stack_overflow_check(&mut self) -> TestOutcome {
        diag::stack::overflow_check(self.platform.stack_guard())
    }

    /// Address-bit coverage test over the four placement slots
    pub fn program_counter_test(&mut self) -> TestOutcome {
        diag::pc::run(&self.platform.pc_slots())
    }

    /// March A over the heap region
    pub fn ram_march_a_test(&mut self) -> TestOutcome {
        let chunk_words = self.config.effective_ram_chunk_words();
        diag::ram::march_a(self.platform.ram(), chunk_words, &mut self.backup)
    }

    /// March X over the heap region
    pub fn ram_march_x_test(&mut self) -> TestOutcome {
        let chunk_words = self.config.effective_ram_chunk_words();
        diag::ram::march_x(self.platform.ram(), chunk_words, &mut self.backup)
    }

    /// External-crystal failure test
    pub fn external_crystal_test(&mut self) -> TestOutcome {
        diag::clock::external_crystal(
            self.platform.crystal(),
            &mut self.delay,
            self.config.crystal_wait_ms,
        )
    }

    /// Main-crystal frequency drift test
    pub fn main_crystal_test(&mut self) -> TestOutcome {
        diag::clock::main_crystal(
            self.platform.calibration(),
            self.config.xtal_freq_hz,
            self.config.drift_tolerance_percent,
        )
    }

    /// Watchdog reset verification
    pub fn watchdog_test(&mut self) -> TestOutcome {
        diag::wdt::run(
            self.platform.watchdog(),
            &mut self.delay,
            self.config.wdt_timeout_ms,
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
