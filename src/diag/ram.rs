//! RAM march diagnostics.
//!
//! Detects stuck-at, transition and coupling faults in the target region
//! (the heap) without permanently altering its contents. The region is
//! processed in chunks bounded by the caller's backup buffer: each chunk
//! is saved, marched, and restored before the next chunk is touched -
//! restored on the fault path too, before the test reports.
//!
//! Two sequences are provided (march element notation: direction, then
//! the read/write operations applied per cell):
//!
//! - **March A** (ascending only): `up(W0); up(R0,W1); up(R1)`
//! - **March X** (bidirectional): `up(W0); up(R0,W1); down(R1,W0);
//!   up(R0,W1); down(R1,W0)`
//!
//! Any read mismatch aborts the sequence for that chunk, the chunk is
//! restored, and the whole test returns [`TestOutcome::RamFault`] without
//! touching the chunks after it.

use crate::constants::{MARCH_ONES, MARCH_ZEROS};
use crate::outcome::TestOutcome;
use crate::platform::memory::RamBus;

/// Run the March A sequence over the whole region.
///
/// `chunk_words` is clamped to the backup buffer's capacity.
pub fn march_a<M: RamBus>(ram: &mut M, chunk_words: usize, backup: &mut [u32]) -> TestOutcome {
    run_chunks(ram, chunk_words, backup, march_a_chunk)
}

/// Run the March X sequence over the whole region.
///
/// `chunk_words` is clamped to the backup buffer's capacity.
pub fn march_x<M: RamBus>(ram: &mut M, chunk_words: usize, backup: &mut [u32]) -> TestOutcome {
    run_chunks(ram, chunk_words, backup, march_x_chunk)
}

/// Chunk loop shared by both sequences: save, march, restore, bail on the
/// first faulting chunk.
fn run_chunks<M, F>(ram: &mut M, chunk_words: usize, backup: &mut [u32], march: F) -> TestOutcome
where
    M: RamBus,
    F: Fn(&mut M, usize, usize) -> bool,
{
    let chunk_words = chunk_words.clamp(1, backup.len());
    let total = ram.len_words();
    let mut base = 0;

    while base < total {
        let len = chunk_words.min(total - base);

        for (slot, index) in backup.iter_mut().zip(base..base + len) {
            *slot = ram.read_word(index);
        }

        let passed = march(ram, base, len);

        for (slot, index) in backup.iter().zip(base..base + len) {
            ram.write_word(index, *slot);
        }

        if !passed {
            return TestOutcome::RamFault;
        }

        base += len;
    }

    TestOutcome::Ok
}

fn march_a_chunk<M: RamBus>(ram: &mut M, base: usize, len: usize) -> bool {
    // up(W0)
    for i in base..base + len {
        ram.write_word(i, MARCH_ZEROS);
    }

    // up(R0, W1)
    for i in base..base + len {
        if ram.read_word(i) != MARCH_ZEROS {
            return false;
        }
        ram.write_word(i, MARCH_ONES);
    }

    // up(R1)
    for i in base..base + len {
        if ram.read_word(i) != MARCH_ONES {
            return false;
        }
    }

    true
}

fn march_x_chunk<M: RamBus>(ram: &mut M, base: usize, len: usize) -> bool {
    // up(W0)
    for i in base..base + len {
        ram.write_word(i, MARCH_ZEROS);
    }

    // up(R0, W1)
    for i in base..base + len {
        if ram.read_word(i) != MARCH_ZEROS {
            return false;
        }
        ram.write_word(i, MARCH_ONES);
    }

    // down(R1, W0)
    for i in (base..base + len).rev() {
        if ram.read_word(i) != MARCH_ONES {
            return false;
        }
        ram.write_word(i, MARCH_ZEROS);
    }

    // up(R0, W1)
    for i in base..base + len {
        if ram.read_word(i) != MARCH_ZEROS {
            return false;
        }
        ram.write_word(i, MARCH_ONES);
    }

    // down(R1, W0)
    for i in (base..base + len).rev() {
        if ram.read_word(i) != MARCH_ONES {
            return false;
        }
        ram.write_word(i, MARCH_ZEROS);
    }

    true
}

// =============================================================================
// Unit Tests
// =============================================================================
