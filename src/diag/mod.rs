//! The diagnostics.
//!
//! One module per subsystem under test:
//!
//! - [`cpu_regs`]: general-purpose register bit patterns
//! - [`csr_regs`]: masked control/status register bit patterns
//! - [`stack`]: stack-overflow guard verification
//! - [`pc`]: program-counter address-bit coverage
//! - [`ram`]: March A / March X memory fault detection
//! - [`clock`]: external-crystal failure and main-crystal drift
//! - [`wdt`]: watchdog reset verification
//!
//! Every function here is generic over the narrow capability it drives and
//! returns a [`TestOutcome`](crate::TestOutcome). The [`Bist`](crate::Bist)
//! facade wires them to a full [`Platform`](crate::platform::Platform) and
//! the configured parameters; call into these modules directly when only a
//! single capability is available.
//!
//! Apart from the two deliberately destructive tests (stack overflow,
//! watchdog), every diagnostic restores the state it touched on every exit
//! path and is idempotent on healthy hardware.

pub mod clock;
pub mod cpu_regs;
pub mod csr_regs;
pub mod pc;
pub mod ram;
pub mod stack;
pub mod wdt;
