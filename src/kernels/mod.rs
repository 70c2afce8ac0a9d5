pub mod activation;
pub mod lookup;
pub mod qlinear;
pub mod quantization;
pub use activation::*;
pub use lookup::*;
pub use qlinear::*;
pub use quantization::*;

use thiserror::Error;

/// Errors raised by kernel construction and per-call execution.
#[derive(Error, Debug)]
pub enum KernelError {
    /// Malformed construction-time attribute. No kernel object is produced.
    #[error("invalid kernel configuration: {0}")]
    Configuration(String),
    /// Bad quantization parameters or buffer lengths. Fails construction when
    /// detected from graph constants, otherwise only the offending call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Unexpected internal numeric failure. Correct inputs cannot reach this.
    #[error("compute failed: {0}")]
    Compute(String),
}
