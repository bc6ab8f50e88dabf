// Error types for tensor construction and quantization

use thiserror::Error;

/// Errors returned by tensor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TensorError {
    /// Absent or empty source buffer
    #[error("Invalid argument: source buffer is empty")]
    InvalidArgument,

    /// Operation requires a representation the tensor is not in
    #[error("Invalid state: tensor must hold an f32 buffer")]
    InvalidState,

    #[error("Allocation failure: could not reserve {0} elements")]
    AllocationFailure(usize),

    /// Every element is exactly zero, so no scale can be derived
    #[error("Degenerate scale: maximum absolute value is zero")]
    DegenerateScale,
}

impl TensorError {
    /// Legacy numeric status code (0 is success).
    pub fn code(&self) -> i32 {
        match self {
            TensorError::InvalidArgument | TensorError::InvalidState => -1,
            TensorError::AllocationFailure(_) => -2,
            TensorError::DegenerateScale => -3,
        }
    }
}

pub type Result<T> = core::result::Result<T, TensorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TensorError::InvalidArgument.code(), -1);
        assert_eq!(TensorError::InvalidState.code(), -1);
        assert_eq!(TensorError::AllocationFailure(8).code(), -2);
        assert_eq!(TensorError::DegenerateScale.code(), -3);
    }

    #[test]
    fn test_display() {
        let msg = TensorError::AllocationFailure(16).to_string();
        assert!(msg.contains("16"));
        assert!(TensorError::DegenerateScale.to_string().starts_with("Degenerate scale"));
    }
}
