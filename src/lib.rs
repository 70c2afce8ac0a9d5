pub mod kernels;
pub mod node;
pub mod tensor;
pub use kernels::*;
