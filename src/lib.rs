//! ESP32-C3 BIST Engine
//!
//! A `no_std`, `no_alloc` Rust implementation of a Built-In Self Test
//! (BIST) engine for ESP32-C3 class RISC-V microcontrollers.
//!
//! The crate is a library of deterministic diagnostics that exercise CPU
//! registers, control/status registers, the program counter, RAM, the
//! system clock and the watchdog hardware, classifying each subsystem as
//! healthy or faulty before or while the device runs its application.
//!
//! # Architecture
//!
//! The engine is organized into three layers:
//!
//! 1. **Diagnostics** ([`diag`]): the self-test algorithms themselves
//! 2. **Platform** ([`platform`]): capability traits the surrounding
//!    system implements over its register, memory and interrupt
//!    primitives
//! 3. **Facade** ([`Bist`]): one no-argument entry point per diagnostic,
//!    wired to a [`platform::Platform`] bundle and a [`BistConfig`]
//!
//! Every test returns a single [`TestOutcome`]; there is no generic
//! error. Apart from the two deliberately destructive diagnostics (stack
//! overflow, watchdog reset), every test backs up the state it touches
//! and restores it on every exit path - a healthy system yields
//! [`TestOutcome::Ok`] on every repeated invocation.
//!
//! What the engine deliberately does *not* do: decide when to run tests,
//! retry, persist results, or provide the underlying hardware access.
//! Those belong to the orchestrator and the platform layer.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and diagnostic logging
//! - `critical-section`: Enable the `sync::FailFlag` ISR signaling
//!   primitive
//!
//! # Example
//!
//! ```ignore
//! use ph_esp32c3_bist::{Bist, BistConfig, TestOutcome};
//!
//! // `BoardPlatform` implements `platform::Platform` over the chip's
//! // register primitives, linker symbols and hardware blocks.
//! let platform = BoardPlatform::take();
//! let delay = /* your embedded_hal::delay::DelayNs implementation */;
//!
//! let config = BistConfig::new()
//!     .with_xtal_freq_hz(40_000_000)
//!     .with_drift_tolerance_percent(1);
//!
//! let mut bist = Bist::with_config(platform, delay, config);
//!
//! if !bist.cpu_register_test().is_ok() {
//!     // halt/retry/continue policy is the caller's
//! }
//!
//! // the watchdog test proves itself on the boot after the reset it
//! // provokes; run it every boot and check the outcome
//! match bist.watchdog_test() {
//!     TestOutcome::Ok => { /* mechanism proven */ }
//!     outcome => report(outcome),
//! }
//! ```
//!
//! # Destructive tests
//!
//! Two diagnostics safely provoke the fault-handling mechanism they
//! verify instead of preserving state:
//!
//! - [`Bist::stack_overflow_test`] drives real recursion into the
//!   protected stack region until the guard word is disturbed.
//! - [`Bist::watchdog_test`] arms the watchdog and never feeds it; on a
//!   healthy part the system resets and the proof is read from the reset
//!   cause on the next boot.

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod bist;
pub mod config;
pub mod constants;
pub mod diag;
pub mod outcome;
pub mod platform;

#[cfg(feature = "critical-section")]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use bist::Bist;
pub use config::{BistConfig, ClockSource};
pub use outcome::TestOutcome;
pub use platform::{
    ClockCalibration, CrystalMonitor, CsrFile, GprFile, GuardWord, HeapRegion, PcSlot, Platform,
    RamBus, ResetCause, StackGuard, SystemWatchdog, WdtStage, WdtStageAction,
};

#[cfg(feature = "critical-section")]
pub use sync::FailFlag;
