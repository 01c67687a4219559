//! Testing utilities and mock implementations
//!
//! This module provides mock capability implementations for exercising the
//! diagnostics on the host without hardware access, including fault
//! injection (stuck register bits, stuck RAM cells, scripted crystal
//! failures).
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::Cell;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::platform::Platform;
use crate::platform::clock::{ClockCalibration, CrystalMonitor};
use crate::platform::memory::{RamBus, StackGuard};
use crate::platform::pc::{PC_SLOT_COUNT, PcSlot};
use crate::platform::registers::{CSR_TEST_PLAN, Csr, CsrFile, Gpr, GprFile};
use crate::platform::wdt::{ResetCause, SystemWatchdog, WdtStage};

// =============================================================================
// Mock Register Files
// =============================================================================

/// General-purpose register file with optional stuck bits.
///
/// A stuck entry forces `mask` bits of every write to `forced`, modeling a
/// hardware stuck-at fault.
#[derive(Debug, Default)]
pub struct MockGprFile {
    values: [u32; 31],
    stuck: Vec<(Gpr, u32, u32)>,
    write_log: Vec<(Gpr, u32)>,
}

impl MockGprFile {
    pub fn healthy() -> Self {
        Self::default()
    }

    /// Force `mask` bits of `reg` to the corresponding bits of `forced`
    pub fn stick_bits(&mut self, reg: Gpr, mask: u32, forced: u32) {
        self.stuck.push((reg, mask, forced));
    }

    /// Set a register directly, bypassing fault injection
    pub fn set(&mut self, reg: Gpr, value: u32) {
        self.values[reg as usize] = value;
    }

    /// Current stored value of `reg`
    pub fn get(&self, reg: Gpr) -> u32 {
        self.values[reg as usize]
    }

    /// Whether the diagnostic ever wrote `reg`
    pub fn was_written(&self, reg: Gpr) -> bool {
        self.write_log.iter().any(|(r, _)| *r == reg)
    }
}

impl GprFile for MockGprFile {
    fn read(&mut self, reg: Gpr) -> u32 {
        self.values[reg as usize]
    }

    fn write(&mut self, reg: Gpr, value: u32) {
        let mut effective = value;
        for &(r, mask, forced) in &self.stuck {
            if r == reg {
                effective = (effective & !mask) | (forced & mask);
            }
        }
        self.values[reg as usize] = effective;
        self.write_log.push((reg, value));
    }
}

/// CSR file with hardware-accurate reserved bits and optional stuck bits.
///
/// Writes are masked by the register's implemented bits first (reserved
/// bits read back as zero, as on the real part), then fault injection is
/// applied.
#[derive(Debug, Default)]
pub struct MockCsrFile {
    values: [u32; 21],
    stuck: Vec<(Csr, u32, u32)>,
    write_log: Vec<(Csr, u32)>,
}

impl MockCsrFile {
    pub fn healthy() -> Self {
        Self::default()
    }

    /// Implemented bits of `csr` on the real part
    pub fn implemented_mask(&self, csr: Csr) -> u32 {
        CSR_TEST_PLAN
            .iter()
            .find(|spec| spec.id == csr)
            .map_or(0xFFFF_FFFF, |spec| spec.mask)
    }

    /// Force `mask` bits of `csr` to the corresponding bits of `forced`
    pub fn stick_bits(&mut self, csr: Csr, mask: u32, forced: u32) {
        self.stuck.push((csr, mask, forced));
    }

    /// Set a register directly, bypassing reserved-bit masking and fault
    /// injection
    pub fn set(&mut self, csr: Csr, value: u32) {
        self.values[csr as usize] = value;
    }

    /// Current stored value of `csr`
    pub fn get(&self, csr: Csr) -> u32 {
        self.values[csr as usize]
    }

    /// Whether the diagnostic ever wrote `csr`
    pub fn was_written(&self, csr: Csr) -> bool {
        self.write_log.iter().any(|(c, _)| *c == csr)
    }
}

impl CsrFile for MockCsrFile {
    fn read(&mut self, csr: Csr) -> u32 {
        self.values[csr as usize]
    }

    fn write(&mut self, csr: Csr, value: u32) {
        let mut effective = value & self.implemented_mask(csr);
        for &(c, mask, forced) in &self.stuck {
            if c == csr {
                effective = (effective & !mask) | (forced & mask);
            }
        }
        self.values[csr as usize] = effective;
        self.write_log.push((csr, value));
    }
}

// =============================================================================
// Mock RAM
// =============================================================================

/// Word-addressed RAM with optional stuck-at cells.
///
/// A stuck cell ignores writes and always reads back its forced value.
/// Every access updates a high-water mark so tests can prove the marches
/// stop where they should.
#[derive(Debug, Default)]
pub struct MockRam {
    cells: Vec<u32>,
    stuck: Vec<(usize, u32)>,
    highest_touched: usize,
}

impl MockRam {
    /// Region of `words` cells filled with an index-derived pattern
    pub fn patterned(words: usize) -> Self {
        Self {
            cells: (0..words)
                .map(|i| (i as u32).wrapping_mul(0x9E37_79B9) ^ 0x5A5A_5A5A)
                .collect(),
            stuck: Vec::new(),
            highest_touched: 0,
        }
    }

    /// Make the cell at `index` stuck at `value`
    pub fn stick_cell(&mut self, index: usize, value: u32) {
        self.cells[index] = value;
        self.stuck.push((index, value));
    }

    /// Copy of the whole region
    pub fn snapshot(&self) -> Vec<u32> {
        self.cells.clone()
    }

    /// Highest word index any access reached
    pub fn highest_touched(&self) -> usize {
        self.highest_touched
    }
}

impl RamBus for MockRam {
    fn len_words(&self) -> usize {
        self.cells.len()
    }

    fn read_word(&mut self, index: usize) -> u32 {
        self.highest_touched = self.highest_touched.max(index);
        self.cells[index]
    }

    fn write_word(&mut self, index: usize, value: u32) {
        self.highest_touched = self.highest_touched.max(index);
        if self.stuck.iter().any(|&(i, _)| i == index) {
            return;
        }
        self.cells[index] = value;
    }
}

// =============================================================================
// Mock Stack Guard
// =============================================================================

/// Guard word that reports disturbed after a scripted number of checks.
#[derive(Debug)]
pub struct MockStackGuard {
    armed: bool,
    trip_after: Option<u32>,
    checks: u32,
}

impl MockStackGuard {
    /// Guard intact for the first `checks` probes, disturbed afterwards
    pub fn tripping_after(checks: u32) -> Self {
        Self {
            armed: false,
            trip_after: Some(checks),
            checks: 0,
        }
    }

    /// Guard that never reports a disturbance
    pub fn never_tripping() -> Self {
        Self {
            armed: false,
            trip_after: None,
            checks: 0,
        }
    }

    /// Number of probes made so far
    pub fn checks(&self) -> u32 {
        self.checks
    }

    pub fn was_armed(&self) -> bool {
        self.armed
    }
}

impl StackGuard for MockStackGuard {
    fn arm(&mut self) {
        self.armed = true;
    }

    fn is_intact(&mut self) -> bool {
        let intact = self.trip_after.is_none_or(|n| self.checks < n);
        self.checks += 1;
        intact
    }
}

// =============================================================================
// Mock Clock Capabilities
// =============================================================================

/// Crystal monitor with a scripted failure point.
#[derive(Debug)]
pub struct MockCrystalMonitor {
    arm_ok: bool,
    fail_after: Option<u32>,
    polls: Cell<u32>,
    armed_timeout: Option<u32>,
    disarmed: bool,
}

impl MockCrystalMonitor {
    /// Crystal that never fails
    pub fn healthy() -> Self {
        Self {
            arm_ok: true,
            fail_after: None,
            polls: Cell::new(0),
            armed_timeout: None,
            disarmed: false,
        }
    }

    /// Flag rises after `polls` foreground reads (the interrupt fired)
    pub fn failing_after(polls: u32) -> Self {
        Self {
            fail_after: Some(polls),
            ..Self::healthy()
        }
    }

    /// Hardware block that cannot be armed
    pub fn refusing_to_arm() -> Self {
        Self {
            arm_ok: false,
            ..Self::healthy()
        }
    }

    pub fn polls(&self) -> u32 {
        self.polls.get()
    }

    pub fn armed_timeout(&self) -> Option<u32> {
        self.armed_timeout
    }

    pub fn was_disarmed(&self) -> bool {
        self.disarmed
    }
}

impl CrystalMonitor for MockCrystalMonitor {
    fn arm(&mut self, timeout_ticks: u32) -> bool {
        if self.arm_ok {
            self.armed_timeout = Some(timeout_ticks);
            self.polls.set(0);
        }
        self.arm_ok
    }

    fn failed(&self) -> bool {
        let count = self.polls.get() + 1;
        self.polls.set(count);
        self.fail_after.is_some_and(|n| count > n)
    }

    fn disarm(&mut self) {
        self.disarmed = true;
    }
}

/// Calibration unit reporting a fixed ratio.
#[derive(Debug)]
pub struct MockCalibration {
    ratio: u32,
    sampled_cycles: Option<u32>,
}

impl MockCalibration {
    pub fn reporting(ratio: u32) -> Self {
        Self {
            ratio,
            sampled_cycles: None,
        }
    }

    /// Slow-clock cycle count of the last measurement
    pub fn sampled_cycles(&self) -> Option<u32> {
        self.sampled_cycles
    }
}

impl ClockCalibration for MockCalibration {
    fn measure_ratio(&mut self, slow_cycles: u32) -> u32 {
        self.sampled_cycles = Some(slow_cycles);
        self.ratio
    }
}

// =============================================================================
// Mock System Watchdog
// =============================================================================

/// Watchdog block that records the session it was armed with.
#[derive(Debug)]
pub struct MockSystemWatchdog {
    cause: ResetCause,
    armed_stages: Option<[WdtStage; 2]>,
    disarmed: bool,
}

impl MockSystemWatchdog {
    /// Watchdog on a system whose current boot had the given cause
    pub fn booted_from(cause: ResetCause) -> Self {
        Self {
            cause,
            armed_stages: None,
            disarmed: false,
        }
    }

    pub fn armed_stages(&self) -> Option<[WdtStage; 2]> {
        self.armed_stages
    }

    pub fn was_disarmed(&self) -> bool {
        self.disarmed
    }
}

impl SystemWatchdog for MockSystemWatchdog {
    fn reset_cause(&self) -> ResetCause {
        self.cause
    }

    fn arm(&mut self, stages: [WdtStage; 2]) {
        self.armed_stages = Some(stages);
    }

    fn disarm(&mut self) {
        self.disarmed = true;
    }
}

// =============================================================================
// Delay and PC Probes
// =============================================================================

/// Delay that returns immediately but accounts every nanosecond requested.
#[derive(Debug, Default)]
pub struct InstantDelay {
    total_ns: u64,
}

impl InstantDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total delay requested so far, in nanoseconds
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }
}

impl DelayNs for InstantDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

// =============================================================================
// Mock Platform Bundle
// =============================================================================

/// Full capability bundle over the mocks above.
///
/// Fields are public so tests can swap a single capability for a faulty
/// one before handing the bundle to the facade.
#[derive(Debug)]
pub struct MockPlatform {
    pub gprs: MockGprFile,
    pub csrs: MockCsrFile,
    pub ram: MockRam,
    pub guard: MockStackGuard,
    pub crystal: MockCrystalMonitor,
    pub calibration: MockCalibration,
    pub watchdog: MockSystemWatchdog,
    pub slots: [PcSlot; PC_SLOT_COUNT],
}

impl MockPlatform {
    /// Platform with no injected faults.
    ///
    /// The stack guard trips after a few probes (a working guard), the
    /// calibration unit reports a nominal 40 MHz crystal, and the current
    /// boot was caused by the main watchdog so the watchdog test proves
    /// itself without arming hardware.
    pub fn healthy() -> Self {
        Self {
            gprs: MockGprFile::healthy(),
            csrs: MockCsrFile::healthy(),
            ram: MockRam::patterned(1024),
            guard: MockStackGuard::tripping_after(3),
            crystal: MockCrystalMonitor::healthy(),
            calibration: MockCalibration::reporting((40_000_000 / 32_768) << 19),
            watchdog: MockSystemWatchdog::booted_from(ResetCause::MainWatchdog),
            slots: healthy_pc_slots(),
        }
    }
}

impl Platform for MockPlatform {
    type Gprs = MockGprFile;
    type Csrs = MockCsrFile;
    type Ram = MockRam;
    type Guard = MockStackGuard;
    type Crystal = MockCrystalMonitor;
    type Calibration = MockCalibration;
    type Watchdog = MockSystemWatchdog;

    fn gprs(&mut self) -> &mut Self::Gprs {
        &mut self.gprs
    }

    fn csrs(&mut self) -> &mut Self::Csrs {
        &mut self.csrs
    }

    fn ram(&mut self) -> &mut Self::Ram {
        &mut self.ram
    }

    fn stack_guard(&mut self) -> &mut Self::Guard {
        &mut self.guard
    }

    fn pc_slots(&self) -> [PcSlot; PC_SLOT_COUNT] {
        self.slots
    }

    fn crystal(&mut self) -> &mut Self::Crystal {
        &mut self.crystal
    }

    fn calibration(&mut self) -> &mut Self::Calibration {
        &mut self.calibration
    }

    fn watchdog(&mut self) -> &mut Self::Watchdog {
        &mut self.watchdog
    }
}

pub fn pc_probe_0() -> usize {
    pc_probe_0 as usize
}

pub fn pc_probe_1() -> usize {
    pc_probe_1 as usize
}

pub fn pc_probe_2() -> usize {
    pc_probe_2 as usize
}

pub fn pc_probe_3() -> usize {
    pc_probe_3 as usize
}

/// Four self-reporting slots, as a healthy link layer would provide
pub fn healthy_pc_slots() -> [PcSlot; PC_SLOT_COUNT] {
    [
        PcSlot::new(pc_probe_0),
        PcSlot::new(pc_probe_1),
        PcSlot::new(pc_probe_2),
        PcSlot::new(pc_probe_3),
    ]
}
