//! Configuration types for the BIST engine

use crate::constants::{
    CRYSTAL_WAIT_MS, RAM_BACKUP_CHUNK_WORDS, WDT_TEST_TIMEOUT_MS,
};

/// Clock source driving the CPU when the diagnostics run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// External main crystal (40 MHz on most boards)
    #[default]
    Xtal,
    /// PLL derived from the main crystal
    Pll,
    /// Internal RC fast clock
    RcFast,
}

/// BIST engine configuration
///
/// All options have defaults matching the reference ESP32-C3 deployment.
/// Values are supplied by the surrounding system; the engine never reads
/// them from hardware.
///
/// # Example
/// ```ignore
/// let config = BistConfig::new()
///     .with_xtal_freq_hz(40_000_000)
///     .with_drift_tolerance_percent(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BistConfig {
    /// CPU frequency in Hz
    pub cpu_freq_hz: u32,
    /// Expected main crystal frequency in Hz
    pub xtal_freq_hz: u32,
    /// Clock source assumed active while the diagnostics run
    pub clock_source: ClockSource,
    /// Watchdog test timeout in milliseconds; the reset stage fires at
    /// twice this value
    pub wdt_timeout_ms: u32,
    /// Allowed main-crystal frequency deviation in whole percent
    pub drift_tolerance_percent: u32,
    /// RAM march chunk size in 32-bit words (clamped to the backup buffer
    /// capacity)
    pub ram_chunk_words: usize,
    /// Flash test chunk size in bytes (recognized for the reserved flash
    /// diagnostic; unused by the shipped tests)
    pub flash_chunk_bytes: usize,
    /// Bounded wait for the crystal-fail flag in milliseconds
    pub crystal_wait_ms: u32,
}

impl BistConfig {
    /// Create a configuration with reference defaults
    ///
    /// This is a const function suitable for static initialization.
    pub const fn new() -> Self {
        Self {
            cpu_freq_hz: 160_000_000,
            xtal_freq_hz: 40_000_000,
            clock_source: ClockSource::Xtal,
            wdt_timeout_ms: WDT_TEST_TIMEOUT_MS,
            drift_tolerance_percent: 1,
            ram_chunk_words: RAM_BACKUP_CHUNK_WORDS,
            flash_chunk_bytes: 0x1000,
            crystal_wait_ms: CRYSTAL_WAIT_MS,
        }
    }

    /// Set the CPU frequency in Hz
    #[must_use]
    pub const fn with_cpu_freq_hz(mut self, hz: u32) -> Self {
        self.cpu_freq_hz = hz;
        self
    }

    /// Set the expected main crystal frequency in Hz
    #[must_use]
    pub const fn with_xtal_freq_hz(mut self, hz: u32) -> Self {
        self.xtal_freq_hz = hz;
        self
    }

    /// Set the active clock source
    #[must_use]
    pub const fn with_clock_source(mut self, source: ClockSource) -> Self {
        self.clock_source = source;
        self
    }

    /// Set the watchdog test timeout in milliseconds
    #[must_use]
    pub const fn with_wdt_timeout_ms(mut self, ms: u32) -> Self {
        self.wdt_timeout_ms = ms;
        self
    }

    /// Set the allowed crystal frequency deviation in whole percent
    #[must_use]
    pub const fn with_drift_tolerance_percent(mut self, percent: u32) -> Self {
        self.drift_tolerance_percent = percent;
        self
    }

    /// Set the RAM march chunk size in words.
    ///
    /// Values larger than the backup buffer capacity are clamped when the
    /// test runs.
    #[must_use]
    pub const fn with_ram_chunk_words(mut self, words: usize) -> Self {
        self.ram_chunk_words = words;
        self
    }

    /// Set the flash test chunk size in bytes
    #[must_use]
    pub const fn with_flash_chunk_bytes(mut self, bytes: usize) -> Self {
        self.flash_chunk_bytes = bytes;
        self
    }

    /// Set the bounded crystal-fail wait in milliseconds.
    ///
    /// Production deployments on real hardware may prefer a longer window
    /// than the 500 ms default.
    #[must_use]
    pub const fn with_crystal_wait_ms(mut self, ms: u32) -> Self {
        self.crystal_wait_ms = ms;
        self
    }

    /// Effective RAM chunk size after clamping to the backup capacity
    #[must_use]
    pub const fn effective_ram_chunk_words(&self) -> usize {
        if self.ram_chunk_words > RAM_BACKUP_CHUNK_WORDS {
            RAM_BACKUP_CHUNK_WORDS
        } else {
            self.ram_chunk_words
        }
    }
}

impl Default for BistConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
