//! Error types for the PCS autonegotiation layer
//!
//! Errors are organized by domain:
//! - [`NegotiationError`]: the interface mode has no defined behavior for the
//!   requested operation
//! - [`IoError`]: MDIO bus failures surfaced by the Clause 22 helpers
//!
//! The unified [`Error`] enum wraps both and is returned by the bus-backed
//! helpers in [`pcs::c22`](crate::pcs::c22).

// =============================================================================
// Negotiation Errors
// =============================================================================

/// Errors from the pure decode/encode layer
///
/// These are expected outcomes for valid-but-unsupported interface modes.
/// Callers should skip the configuration step rather than treat them as
/// faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NegotiationError {
    /// The interface mode defines no value for this operation
    NotApplicable,
}

impl core::fmt::Display for NegotiationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NegotiationError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NegotiationError::NotApplicable => "not applicable to interface mode",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// MDIO access errors
///
/// Returned by [`MdioBus`](crate::hal::mdio::MdioBus) implementations and by
/// address validation in the Clause 22 helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// PHY address outside 0-31
    InvalidPhyAddress,
    /// Management bus transaction timed out
    Timeout,
    /// Management bus reported a failure
    BusError,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::InvalidPhyAddress => "invalid PHY address",
            IoError::Timeout => "MDIO operation timed out",
            IoError::BusError => "MDIO bus error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match result {
///     Err(Error::Negotiation(NegotiationError::NotApplicable)) => { /* skip */ }
///     Err(Error::Io(IoError::Timeout)) => { /* retry later */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Negotiation layer error
    Negotiation(NegotiationError),
    /// MDIO error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Negotiation(e) => write!(f, "negotiation: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<NegotiationError> for Error {
    fn from(e: NegotiationError) -> Self {
        Error::Negotiation(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for bus-backed operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for pure decode/encode operations
pub type NegotiationResult<T> = core::result::Result<T, NegotiationError>;

/// Result type alias for MDIO operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
