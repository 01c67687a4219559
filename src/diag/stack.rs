//! Stack-overflow guard diagnostic.
//!
//! The platform reserves a protection region past the stack and the guard
//! word sits at its edge. This test proves the mechanism actually fires:
//! it arms the guard, then drives recursion of increasing depth - each
//! frame writes into a local buffer so the stack genuinely grows - until
//! either the guard is disturbed (the mechanism works) or a bounded
//! maximum depth is reached (it does not).
//!
//! Detection happens one frame *after* the write that corrupted the
//! guard, not at the instant of corruption; that latency is inherent to
//! the guard-word approach and callers must not rely on exact-point
//! detection.

use crate::constants::STACK_FRAME_FILL_BYTES;
use crate::outcome::TestOutcome;
use crate::platform::memory::StackGuard;

/// Write the sentinel into the guard word.
///
/// Call once at boot (or before a monitoring period); pair with
/// [`overflow_check`] for cheap runtime probes between test runs.
pub fn arm<G: StackGuard>(guard: &mut G) {
    guard.arm();
}

/// Runtime probe of the guard word.
///
/// Returns [`TestOutcome::StackOverflowFault`] when the sentinel has been
/// disturbed - the overflow already happened - and [`TestOutcome::Ok`]
/// otherwise.
pub fn overflow_check<G: StackGuard>(guard: &mut G) -> TestOutcome {
    if guard.is_intact() {
        TestOutcome::Ok
    } else {
        TestOutcome::StackOverflowFault
    }
}

/// Provoke a genuine stack overflow and confirm the guard catches it.
///
/// `max_depth` bounds the recursion so the test terminates even when the
/// guard never triggers; the facade passes
/// [`STACK_RECURSION_LIMIT`](crate::constants::STACK_RECURSION_LIMIT). A
/// disturbed guard at any depth is the success signal
/// ([`TestOutcome::Ok`]); surviving the full bound means the mechanism
/// failed ([`TestOutcome::StackOverflowTestFailed`]).
pub fn run<G: StackGuard>(guard: &mut G, max_depth: u32) -> TestOutcome {
    guard.arm();

    for depth in 0..max_depth {
        consume_frames(depth);

        if overflow_check(guard) == TestOutcome::StackOverflowFault {
            #[cfg(feature = "defmt")]
            defmt::info!("stack guard tripped at depth {}", depth);
            return TestOutcome::Ok;
        }
    }

    TestOutcome::StackOverflowTestFailed
}

/// Recurse `depth` frames, each consuming real stack.
///
/// The buffer write and `black_box` keep the frame from being optimized
/// into a tail call or elided entirely.
#[inline(never)]
fn consume_frames(depth: u32) {
    let mut frame = [0u8; STACK_FRAME_FILL_BYTES];
    frame[0] = depth as u8;
    core::hint::black_box(&mut frame);

    if depth > 0 {
        consume_frames(depth - 1);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
