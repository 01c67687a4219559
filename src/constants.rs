//! Centralized Constants
//!
//! This module provides a single source of truth for the magic numbers used
//! throughout the BIST engine.
//!
//! # Organization
//!
//! Constants are grouped by category:
//! - **Bit patterns**: register and RAM test patterns
//! - **RAM test**: chunk bound for the backup buffer
//! - **Stack test**: guard sentinel and recursion bound
//! - **Timing**: polling intervals and bounded waits
//! - **Clock calibration**: reference clock and fixed-point format
//!
//! # Note
//!
//! Register identifiers and valid-bit masks live in
//! [`platform::registers`](crate::platform::registers) next to the test
//! plans that consume them.

// =============================================================================
// Bit Patterns
// =============================================================================

/// First register test pattern (alternating bits, 1010...)
pub const PATTERN_A: u32 = 0xAAAA_AAAA;

/// Second register test pattern, bitwise complement of [`PATTERN_A`]
pub const PATTERN_5: u32 = 0x5555_5555;

/// March element "all ones" value
pub const MARCH_ONES: u32 = 0xFFFF_FFFF;

/// March element "all zeros" value
pub const MARCH_ZEROS: u32 = 0x0000_0000;

// =============================================================================
// RAM Test
// =============================================================================

/// Capacity of the RAM backup buffer in 32-bit words (1024 bytes).
///
/// March tests process the target region in chunks of at most this many
/// words so the backup storage stays small regardless of region size.
pub const RAM_BACKUP_CHUNK_WORDS: usize = 256;

// =============================================================================
// Stack Test
// =============================================================================

/// Sentinel written to the guard word past the protected stack region
pub const STACK_GUARD_PATTERN: u32 = 0xDEAD_BEEF;

/// Upper bound on recursion depth; guarantees termination even when the
/// guard mechanism never triggers
pub const STACK_RECURSION_LIMIT: u32 = 20_000;

/// Minimum stack consumed per recursion frame in bytes
pub const STACK_FRAME_FILL_BYTES: usize = 128;

// =============================================================================
// Timing
// =============================================================================

/// Polling increment for the crystal-fail wait in microseconds
pub const CRYSTAL_POLL_INTERVAL_US: u32 = 1_000;

/// Default bounded wait for the crystal-fail flag in milliseconds.
///
/// Tunable via [`BistConfig::with_crystal_wait_ms`]; real hardware may
/// want a longer window (~1 s) than this documented default.
///
/// [`BistConfig::with_crystal_wait_ms`]: crate::config::BistConfig::with_crystal_wait_ms
pub const CRYSTAL_WAIT_MS: u32 = 500;

/// Crystal-health watchdog timeout, in 32 kHz clock ticks
pub const CRYSTAL_WDT_TIMEOUT: u32 = 200;

/// Default watchdog test timeout in milliseconds (stage two fires at twice
/// this value)
pub const WDT_TEST_TIMEOUT_MS: u32 = 100;

/// Per-iteration delay of the watchdog wait loop in microseconds
pub const WDT_POLL_INTERVAL_US: u32 = 1_000;

/// Iteration count of the watchdog wait loop (1 s total on real hardware)
pub const WDT_WAIT_ITERATIONS: u32 = 1_000;

// =============================================================================
// Clock Calibration
// =============================================================================

/// Reference slow clock frequency in Hz (external 32 kHz crystal)
pub const SLOW_CLK_HZ: u32 = 32_768;

/// Number of slow-clock cycles sampled per calibration
pub const CLK_CAL_CYCLES: u32 = 500;

/// Fraction bits of the fixed-point calibration ratio
pub const CLK_CAL_FRACT: u32 = 19;

// =============================================================================
// Unit Tests
// =============================================================================
