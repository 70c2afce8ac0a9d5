use super::KernelError;

/// The nonlinear transforms the QLinear lookup kernels apply between
/// dequantization and requantization. Each variant is a pure `f32 -> f32`
/// function; adding an op means adding a variant here, the table engine is
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    LeakyRelu { alpha: f32 },
    Sigmoid,
}

impl Activation {
    /// Attribute check at kernel construction. A non-finite slope would
    /// poison every table entry.
    pub fn validate(&self) -> Result<(), KernelError> {
        match *self {
            Activation::LeakyRelu { alpha } if !alpha.is_finite() => Err(
                KernelError::Configuration(format!("leaky relu alpha must be finite, got {}", alpha)),
            ),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        match *self {
            Activation::LeakyRelu { alpha } => {
                if x >= 0.0 {
                    x
                } else {
                    alpha * x
                }
            }
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Bulk form used by the table builder: one pass over the dequantized
    /// domain instead of 256 scattered calls. Results match `apply` exactly.
    pub fn apply_slice(&self, values: &mut [f32]) {
        match *self {
            Activation::LeakyRelu { alpha } => {
                for v in values.iter_mut() {
                    if *v < 0.0 {
                        *v *= alpha;
                    }
                }
            }
            Activation::Sigmoid => {
                for v in values.iter_mut() {
                    *v = 1.0 / (1.0 + (-*v).exp());
                }
            }
        }
    }
}
