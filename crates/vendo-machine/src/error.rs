//! # Machine Error Types
//!
//! Administrative (configuration) errors for vendo-machine.
//!
//! These cover operator mistakes made while setting up or restocking the
//! machine. They never fire during a customer transaction: a selection that
//! cannot be satisfied is an outcome value ([`crate::SelectOutcome`]), not
//! an error, and leaves the machine in a well-defined state.

use thiserror::Error;
use vendo_core::ValidationError;

// =============================================================================
// Machine Error
// =============================================================================

/// Errors from the administrative surface (add_rack, load_product).
///
/// ## When These Occur
/// - `DuplicateRack`: installing a rack under a number already in use
/// - `NoSuchRack`: restocking a rack that was never installed
/// - `Validation`: a rejected input (negative quantity, oversize load)
///
/// No variant mutates machine state; the failed call is a no-op.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A rack with this number is already installed.
    #[error("rack {rack} already exists")]
    DuplicateRack { rack: u32 },

    /// No rack is installed under this number.
    #[error("no such rack: {rack}")]
    NoSuchRack { rack: u32 },

    /// Input validation failed (wraps vendo-core's ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with MachineError.
pub type MachineResult<T> = Result<T, MachineError>;

// =============================================================================
// Unit Tests
// =============================================================================
