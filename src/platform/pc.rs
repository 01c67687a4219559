//! Program-counter placement slots.
//!
//! The PC coverage test needs callables linked into four disjoint address
//! regions. On the reference part the regions are chosen so the slots
//! together exercise PC bits 2-17, 19-21, 25 and 28 (bits 0-1 are always
//! zero on 4-byte-aligned entry points):
//!
//! - slot 0: low instruction memory (0x4038_xxxx)
//! - slot 1: high instruction memory (0x403B_xxxx), bits 2-15 inverted
//!   relative to slot 0
//! - slot 2: flash mapped through the instruction cache (0x4201_xxxx),
//!   adds bits 19/20/21/25
//! - slot 3: low-power retention memory (0x5000_xxxx), adds bit 28
//!
//! Placement itself is the build/link layer's job; the algorithm only
//! calls each slot and compares addresses.
//!
//! # Example
//! ```ignore
//! #[unsafe(link_section = ".pc_probe_0")]
//! fn pc_probe_iram_low() -> usize {
//!     pc_probe_iram_low as usize
//! }
//!
//! let slot = PcSlot::new(pc_probe_iram_low);
//! ```

/// Number of placement slots the coverage test calls
pub const PC_SLOT_COUNT: usize = 4;

/// A callable placed in a known address region.
///
/// The callable returns its own entry address when invoked; the test
/// compares that against the address recorded here.
#[derive(Debug, Clone, Copy)]
pub struct PcSlot {
    entry: fn() -> usize,
    address: usize,
}

impl PcSlot {
    /// Slot whose expected address is the callable's own address
    #[must_use]
    pub fn new(entry: fn() -> usize) -> Self {
        Self {
            entry,
            address: entry as usize,
        }
    }

    /// Slot with an explicitly recorded expected address.
    ///
    /// Used by simulations that decouple the callable from the address it
    /// claims to live at.
    #[must_use]
    pub const fn with_address(entry: fn() -> usize, address: usize) -> Self {
        Self { entry, address }
    }

    /// Call the slot, returning the address execution actually reached
    #[inline]
    #[must_use]
    pub fn invoke(&self) -> usize {
        (self.entry)()
    }

    /// The address the slot is linked at
    #[inline]
    #[must_use]
    pub const fn address(&self) -> usize {
        self.address
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
