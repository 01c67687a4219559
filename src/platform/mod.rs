//! Platform capabilities consumed by the diagnostics.
//!
//! The engine does not own any hardware access: raw register moves, CSR
//! instructions, memory-mapped watchdog blocks, the calibration unit and
//! the linker-provided region bounds are all supplied by the surrounding
//! system through the traits in this module. Each diagnostic in
//! [`diag`](crate::diag) is generic over exactly the capability it needs;
//! the [`Platform`] bundle wires a full set into the
//! [`Bist`](crate::Bist) facade.

pub mod clock;
pub mod memory;
pub mod pc;
pub mod registers;
pub mod wdt;

pub use clock::{ClockCalibration, CrystalMonitor};
pub use memory::{GuardWord, HeapRegion, RamBus, StackGuard};
pub use pc::{PC_SLOT_COUNT, PcSlot};
pub use registers::{
    CSR_TEST_PLAN, Csr, CsrFile, GPR_TEST_PLAN, Gpr, GprFile, RegisterSpec,
};
pub use wdt::{ResetCause, SystemWatchdog, WdtStage, WdtStageAction};

/// Full capability bundle for the [`Bist`](crate::Bist) facade.
///
/// Accessors hand out each capability one at a time; the facade borrows
/// them sequentially, matching the shared-hardware ownership rule that a
/// running test owns its block exclusively.
pub trait Platform {
    /// General-purpose register file access
    type Gprs: GprFile;
    /// Control/status register access
    type Csrs: CsrFile;
    /// RAM region under march test
    type Ram: RamBus;
    /// Stack guard word
    type Guard: StackGuard;
    /// Crystal-health watchdog block
    type Crystal: CrystalMonitor;
    /// Clock-ratio calibration unit
    type Calibration: ClockCalibration;
    /// System watchdog block
    type Watchdog: SystemWatchdog;

    /// Access the general-purpose register file
    fn gprs(&mut self) -> &mut Self::Gprs;
    /// Access the control/status registers
    fn csrs(&mut self) -> &mut Self::Csrs;
    /// Access the RAM region under test (the heap)
    fn ram(&mut self) -> &mut Self::Ram;
    /// Access the stack guard word
    fn stack_guard(&mut self) -> &mut Self::Guard;
    /// The four program-counter placement slots
    fn pc_slots(&self) -> [PcSlot; PC_SLOT_COUNT];
    /// Access the crystal-health watchdog
    fn crystal(&mut self) -> &mut Self::Crystal;
    /// Access the clock-calibration unit
    fn calibration(&mut self) -> &mut Self::Calibration;
    /// Access the system watchdog
    fn watchdog(&mut self) -> &mut Self::Watchdog;
}
