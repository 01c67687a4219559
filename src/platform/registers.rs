//! Register identifiers, valid-bit masks, and the data-driven test plans.
//!
//! The register diagnostics are table-driven: a [`RegisterSpec`] names a
//! register, the mask of bits that must round-trip, and whether the
//! pre-test value has to be captured and restored. One generic two-pattern
//! routine in [`diag`](crate::diag) consumes the tables; the platform
//! supplies the actual read/write primitives through [`GprFile`] and
//! [`CsrFile`] (on hardware these bottom out in `mv`/`csrr`/`csrw`
//! sequences, on the host in a plain array).
//!
//! # RISC-V integer register roles
//!
//! | ABI name | Role                | Preserved by the test |
//! |----------|---------------------|-----------------------|
//! | t0-t6    | temporaries         | no                    |
//! | ra       | return address      | yes                   |
//! | sp       | stack pointer       | yes                   |
//! | gp       | global pointer      | yes                   |
//! | tp       | thread pointer      | yes                   |
//! | s0-s11   | callee-saved        | yes                   |
//! | a0-a7    | arguments/returns   | no                    |
//!
//! `x0`/`zero` is hardwired and untestable; it does not appear in the plan.

// =============================================================================
// Identifiers
// =============================================================================

/// General-purpose register, by RISC-V ABI name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Gpr {
    T0,
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    Ra,
    Sp,
    Gp,
    Tp,
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    S11,
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
}

impl Gpr {
    /// Returns the ABI name of the register
    #[must_use]
    pub const fn abi_name(self) -> &'static str {
        match self {
            Gpr::T0 => "t0",
            Gpr::T1 => "t1",
            Gpr::T2 => "t2",
            Gpr::T3 => "t3",
            Gpr::T4 => "t4",
            Gpr::T5 => "t5",
            Gpr::T6 => "t6",
            Gpr::Ra => "ra",
            Gpr::Sp => "sp",
            Gpr::Gp => "gp",
            Gpr::Tp => "tp",
            Gpr::S0 => "s0",
            Gpr::S1 => "s1",
            Gpr::S2 => "s2",
            Gpr::S3 => "s3",
            Gpr::S4 => "s4",
            Gpr::S5 => "s5",
            Gpr::S6 => "s6",
            Gpr::S7 => "s7",
            Gpr::S8 => "s8",
            Gpr::S9 => "s9",
            Gpr::S10 => "s10",
            Gpr::S11 => "s11",
            Gpr::A0 => "a0",
            Gpr::A1 => "a1",
            Gpr::A2 => "a2",
            Gpr::A3 => "a3",
            Gpr::A4 => "a4",
            Gpr::A5 => "a5",
            Gpr::A6 => "a6",
            Gpr::A7 => "a7",
        }
    }
}

/// Machine-mode control/status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Csr {
    Mtvec,
    Mscratch,
    Mepc,
    Mcause,
    Mtval,
    Pmpaddr0,
    Pmpaddr1,
    Pmpaddr2,
    Pmpaddr3,
    Pmpaddr4,
    Pmpaddr5,
    Pmpaddr6,
    Pmpaddr7,
    Pmpaddr8,
    Pmpaddr9,
    Pmpaddr10,
    Pmpaddr11,
    Pmpaddr12,
    Pmpaddr13,
    Pmpaddr14,
    Pmpaddr15,
}

impl Csr {
    /// Returns the assembler name of the register
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Csr::Mtvec => "mtvec",
            Csr::Mscratch => "mscratch",
            Csr::Mepc => "mepc",
            Csr::Mcause => "mcause",
            Csr::Mtval => "mtval",
            Csr::Pmpaddr0 => "pmpaddr0",
            Csr::Pmpaddr1 => "pmpaddr1",
            Csr::Pmpaddr2 => "pmpaddr2",
            Csr::Pmpaddr3 => "pmpaddr3",
            Csr::Pmpaddr4 => "pmpaddr4",
            Csr::Pmpaddr5 => "pmpaddr5",
            Csr::Pmpaddr6 => "pmpaddr6",
            Csr::Pmpaddr7 => "pmpaddr7",
            Csr::Pmpaddr8 => "pmpaddr8",
            Csr::Pmpaddr9 => "pmpaddr9",
            Csr::Pmpaddr10 => "pmpaddr10",
            Csr::Pmpaddr11 => "pmpaddr11",
            Csr::Pmpaddr12 => "pmpaddr12",
            Csr::Pmpaddr13 => "pmpaddr13",
            Csr::Pmpaddr14 => "pmpaddr14",
            Csr::Pmpaddr15 => "pmpaddr15",
        }
    }
}

// =============================================================================
// Access Traits
// =============================================================================

/// Raw access to the general-purpose register file.
///
/// On hardware this is a thin veneer over move instructions executed with
/// interrupts masked; the diagnostic assumes exclusive ownership of every
/// register in the plan for the duration of a call.
pub trait GprFile {
    /// Read the current value of `reg`
    fn read(&mut self, reg: Gpr) -> u32;
    /// Write `value` into `reg`
    fn write(&mut self, reg: Gpr, value: u32);
}

/// Raw access to machine-mode control/status registers.
///
/// Reserved and hard-wired bits may read back differently from what was
/// written; the test plan masks them out before comparison.
pub trait CsrFile {
    /// Read the current value of `csr`
    fn read(&mut self, csr: Csr) -> u32;
    /// Write `value` into `csr`
    fn write(&mut self, csr: Csr, value: u32);
}

// =============================================================================
// Test Plans
// =============================================================================

/// One register's entry in a test plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterSpec<R: 'static> {
    /// Register under test
    pub id: R,
    /// Bits that must round-trip; reserved/hard-wired bits are excluded
    pub mask: u32,
    /// Capture the pre-test value and restore it on every exit path
    pub preserve: bool,
}

/// All 32 bits are implemented
pub const MASK_32BIT: u32 = 0xFFFF_FFFF;

/// `mtvec` ignores its low alignment/mode bits
pub const CSR_MTVEC_MASK: u32 = 0xFFFF_FF00;

/// `mepc` ignores bit 0 (instructions are at least 2-byte aligned)
pub const CSR_MEPC_MASK: u32 = 0xFFFF_FFFE;

/// `mcause` implements the interrupt flag and the low cause code only
pub const CSR_MCAUSE_MASK: u32 = 0x8000_001F;

const fn gpr(id: Gpr, preserve: bool) -> RegisterSpec<Gpr> {
    RegisterSpec {
        id,
        mask: MASK_32BIT,
        preserve,
    }
}

const fn csr(id: Csr, mask: u32) -> RegisterSpec<Csr> {
    RegisterSpec {
        id,
        mask,
        preserve: true,
    }
}

/// General-purpose register test plan.
///
/// Temporaries first so later sub-tests can rely on a verified scratch
/// register, then the live registers (preserved), then the callee-saved
/// bank (preserved per the ABI), then the argument registers.
pub const GPR_TEST_PLAN: [RegisterSpec<Gpr>; 31] = [
    gpr(Gpr::T0, false),
    gpr(Gpr::T1, false),
    gpr(Gpr::T2, false),
    gpr(Gpr::T3, false),
    gpr(Gpr::T4, false),
    gpr(Gpr::T5, false),
    gpr(Gpr::T6, false),
    gpr(Gpr::Ra, true),
    gpr(Gpr::Sp, true),
    gpr(Gpr::Gp, true),
    gpr(Gpr::Tp, true),
    gpr(Gpr::S0, true),
    gpr(Gpr::S1, true),
    gpr(Gpr::S2, true),
    gpr(Gpr::S3, true),
    gpr(Gpr::S4, true),
    gpr(Gpr::S5, true),
    gpr(Gpr::S6, true),
    gpr(Gpr::S7, true),
    gpr(Gpr::S8, true),
    gpr(Gpr::S9, true),
    gpr(Gpr::S10, true),
    gpr(Gpr::S11, true),
    gpr(Gpr::A0, false),
    gpr(Gpr::A1, false),
    gpr(Gpr::A2, false),
    gpr(Gpr::A3, false),
    gpr(Gpr::A4, false),
    gpr(Gpr::A5, false),
    gpr(Gpr::A6, false),
    gpr(Gpr::A7, false),
];

/// Control/status register test plan.
///
/// Trap setup, trap handling, then the PMP address bank. Every CSR here is
/// live system-control state, so all entries are preservation-required.
pub const CSR_TEST_PLAN: [RegisterSpec<Csr>; 21] = [
    csr(Csr::Mtvec, CSR_MTVEC_MASK),
    csr(Csr::Mscratch, MASK_32BIT),
    csr(Csr::Mepc, CSR_MEPC_MASK),
    csr(Csr::Mcause, CSR_MCAUSE_MASK),
    csr(Csr::Mtval, MASK_32BIT),
    csr(Csr::Pmpaddr0, MASK_32BIT),
    csr(Csr::Pmpaddr1, MASK_32BIT),
    csr(Csr::Pmpaddr2, MASK_32BIT),
    csr(Csr::Pmpaddr3, MASK_32BIT),
    csr(Csr::Pmpaddr4, MASK_32BIT),
    csr(Csr::Pmpaddr5, MASK_32BIT),
    csr(Csr::Pmpaddr6, MASK_32BIT),
    csr(Csr::Pmpaddr7, MASK_32BIT),
    csr(Csr::Pmpaddr8, MASK_32BIT),
    csr(Csr::Pmpaddr9, MASK_32BIT),
    csr(Csr::Pmpaddr10, MASK_32BIT),
    csr(Csr::Pmpaddr11, MASK_32BIT),
    csr(Csr::Pmpaddr12, MASK_32BIT),
    csr(Csr::Pmpaddr13, MASK_32BIT),
    csr(Csr::Pmpaddr14, MASK_32BIT),
    csr(Csr::Pmpaddr15, MASK_32BIT),
];

// =============================================================================
// Unit Tests
// =============================================================================
