//! Error types for oracle synthesis and program execution.

use thiserror::Error;

use qrange_hal::HalError;
use qrange_ir::IrError;

/// Errors from integer/bit-string conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The number needs more bits than the requested width provides.
    #[error("number {number} does not fit in {width} bits")]
    DoesNotFit { number: u64, width: u32 },

    /// A bit-string contained a character other than '0' or '1'.
    #[error("invalid character '{0}' in bit-string")]
    InvalidBit(char),

    /// A bit-string was empty.
    #[error("empty bit-string")]
    Empty,

    /// A bit-string is too wide to decode into a 64-bit value.
    #[error("bit-string of width {0} exceeds the 64-bit value range")]
    TooWide(usize),
}

/// Errors from oracle construction.
///
/// All checks run before any gate is emitted, so a returned error means no
/// partially built circuit exists.
#[derive(Debug, Error)]
pub enum RangeOracleError {
    /// Register width of zero qubits.
    #[error("register width must be at least 1 qubit")]
    ZeroWidth,

    /// Range bounds in the wrong order.
    #[error("bounds out of order: lower {lower} must be strictly less than upper {upper}")]
    BoundsOutOfOrder { lower: u64, upper: u64 },

    /// A bound does not fit in the register.
    #[error("value {value} is not representable in {width} bits")]
    OutOfRange { value: u64, width: u32 },

    /// Encoding failure.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Circuit construction failure.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for oracle construction.
pub type OracleResult<T> = Result<T, RangeOracleError>;

/// Errors from assembling and running a full amplification program.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// Oracle or circuit construction failed.
    #[error(transparent)]
    Oracle(#[from] RangeOracleError),

    /// The backend failed; surfaced unchanged, there is no retry policy here.
    #[error("simulation failed: {0}")]
    Simulation(#[from] HalError),

    /// The backend returned an empty counts table.
    #[error("backend returned no measurement outcomes")]
    NoOutcome,
}
