//! General-purpose register diagnostic.
//!
//! Verifies that every register in [`GPR_TEST_PLAN`] can hold and return
//! two complementary bit patterns without stuck bits. Each pattern is
//! loaded into the register under test and into a disposable scratch
//! register, then both are read back and compared - a mismatch means one
//! of the two could not hold the value, and the scratch registers were
//! verified first in plan order.
//!
//! Registers live across the call (return address, stack pointer, global
//! pointer, thread pointer, callee-saved bank) are parked before the
//! patterns go in and written back on every exit path, including the
//! failure path - the stack-pointer sub-test in particular must get its
//! value back before anything stack-relative happens.

use crate::constants::{PATTERN_5, PATTERN_A};
use crate::outcome::TestOutcome;
use crate::platform::registers::{GPR_TEST_PLAN, Gpr, GprFile};

/// Scratch register for a sub-test: t0, except t1 while t0 itself is
/// under test
const fn scratch_for(reg: Gpr) -> Gpr {
    match reg {
        Gpr::T0 => Gpr::T1,
        _ => Gpr::T0,
    }
}

/// Run the two-pattern round-trip over the whole register plan.
///
/// The first mismatch aborts the remaining sub-tests, restores the
/// register under test if it was preservation-required, and yields
/// [`TestOutcome::CpuRegisterFault`].
pub fn run<F: GprFile>(file: &mut F) -> TestOutcome {
    for spec in &GPR_TEST_PLAN {
        let parked = if spec.preserve {
            Some(file.read(spec.id))
        } else {
            None
        };

        let healthy = round_trip(file, spec.id, scratch_for(spec.id));

        if let Some(value) = parked {
            file.write(spec.id, value);
        }

        if !healthy {
            #[cfg(feature = "defmt")]
            defmt::warn!("register {} failed pattern round-trip", spec.id.abi_name());
            return TestOutcome::CpuRegisterFault;
        }
    }

    TestOutcome::Ok
}

fn round_trip<F: GprFile>(file: &mut F, reg: Gpr, scratch: Gpr) -> bool {
    for pattern in [PATTERN_A, PATTERN_5] {
        file.write(reg, pattern);
        file.write(scratch, pattern);
        if file.read(reg) != file.read(scratch) {
            return false;
        }
    }
    true
}

// =============================================================================
// Unit Tests
// =============================================================================
