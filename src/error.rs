use thiserror::Error;

/// Error types for `StepVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StepVecError {
    /// A configuration parameter that must be positive was zero
    #[error("Invalid configuration: {parameter} must be positive, got {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
    /// Zero slots requested from the growth manager
    #[error("Invalid growth amount: {amount}")]
    InvalidGrowthAmount {
        /// Requested number of extra slots
        amount: usize,
    },
    /// Index is outside the valid range for the operation
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// The requested capacity cannot be allocated
    #[error("Capacity overflow: cannot add {requested} slots to capacity {capacity}")]
    CapacityOverflow {
        /// Capacity before the request
        capacity: usize,
        /// Number of slots requested on top of it
        requested: usize,
    },
}
