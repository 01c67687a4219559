//! Control/status register diagnostic.
//!
//! Same two-pattern round-trip as the general-purpose register test,
//! applied to the machine-mode CSRs in [`CSR_TEST_PLAN`] with each
//! comparison masked by the register's valid bits - trap-vector base
//! ignores its low alignment bits, the exception PC ignores bit 0, the
//! cause register implements only its interrupt flag and low cause code.
//!
//! Every CSR here is live system-control state, so every one is captured
//! before its sub-test and written back afterwards, pass or fail.

use crate::constants::{PATTERN_5, PATTERN_A};
use crate::outcome::TestOutcome;
use crate::platform::registers::{CSR_TEST_PLAN, Csr, CsrFile, RegisterSpec};

/// Run the masked two-pattern round-trip over the CSR plan.
///
/// The first mismatch aborts the remaining sub-tests (after restoring the
/// failing register) and yields [`TestOutcome::CsrFault`].
pub fn run<F: CsrFile>(file: &mut F) -> TestOutcome {
    for spec in &CSR_TEST_PLAN {
        let parked = file.read(spec.id);
        let healthy = masked_round_trip(file, spec);
        file.write(spec.id, parked);

        if !healthy {
            #[cfg(feature = "defmt")]
            defmt::warn!("CSR {} failed pattern round-trip", spec.id.name());
            return TestOutcome::CsrFault;
        }
    }

    TestOutcome::Ok
}

fn masked_round_trip<F: CsrFile>(file: &mut F, spec: &RegisterSpec<Csr>) -> bool {
    for pattern in [PATTERN_A, PATTERN_5] {
        let expected = pattern & spec.mask;
        file.write(spec.id, expected);
        if file.read(spec.id) & spec.mask != expected {
            return false;
        }
    }
    true
}

// =============================================================================
// Unit Tests
// =============================================================================
