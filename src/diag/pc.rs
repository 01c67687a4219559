//! Program-counter coverage diagnostic.
//!
//! Calls each of the four [`PcSlot`]s the build/link layer placed in
//! disjoint address regions and compares the address execution actually
//! reached against the slot's linked address. A stuck PC bit lands the
//! call somewhere else (or returns a different self-address), so any
//! mismatch is a [`TestOutcome::ProgramCounterFault`]. See
//! [`platform::pc`](crate::platform::pc) for the regions and the address
//! bits they cover.

use crate::outcome::TestOutcome;
use crate::platform::pc::{PC_SLOT_COUNT, PcSlot};

/// Invoke all placement slots and verify their return addresses.
pub fn run(slots: &[PcSlot; PC_SLOT_COUNT]) -> TestOutcome {
    for slot in slots {
        let reached = slot.invoke();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "pc probe linked at {:#010x} returned {:#010x}",
            slot.address(),
            reached
        );

        if reached != slot.address() {
            return TestOutcome::ProgramCounterFault;
        }
    }

    TestOutcome::Ok
}

// =============================================================================
// Unit Tests
// =============================================================================
