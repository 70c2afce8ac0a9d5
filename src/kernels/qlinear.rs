use super::activation::Activation;
use super::lookup::LookupTable;
use super::quantization::{validate_scale, validate_zero_point, QuantElement, QuantParams};
use super::KernelError;
use crate::node::NodeInfo;
use crate::tensor::{QuantView, QuantViewMut};
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Operand layout of the QLinear activation ops.
pub const X: usize = 0;
pub const X_SCALE: usize = 1;
pub const X_ZERO_POINT: usize = 2;
pub const Y_SCALE: usize = 3;
pub const Y_ZERO_POINT: usize = 4;

/// Slope used when a LeakyRelu node carries no `alpha` attribute.
const DEFAULT_LEAKY_RELU_ALPHA: f32 = 0.01;

// Decided exactly once at construction; `compute` never switches branch.
#[derive(Debug)]
enum KernelState {
    Precomputed(LookupTable),
    Deferred,
}

/// One quantized unary activation kernel (QLinearLeakyRelu or QLinearSigmoid
/// over `u8` or `i8` tensors).
///
/// When all four quantization operands are graph constants the full 256-entry
/// table is computed here, once, and `compute` is a pure byte lookup with no
/// float arithmetic. Otherwise each call resolves the parameters from its
/// tensor views and builds an equivalent call-local table.
#[derive(Debug)]
pub struct QLinearKernel<T: QuantElement> {
    activation: Activation,
    state: KernelState,
    _element: PhantomData<T>,
}

impl<T: QuantElement> QLinearKernel<T> {
    pub fn leaky_relu(info: &dyn NodeInfo) -> Result<Self, KernelError> {
        let alpha = info.attr_f32("alpha").unwrap_or(DEFAULT_LEAKY_RELU_ALPHA);
        Self::with_activation(Activation::LeakyRelu { alpha }, info)
    }

    pub fn sigmoid(info: &dyn NodeInfo) -> Result<Self, KernelError> {
        Self::with_activation(Activation::Sigmoid, info)
    }

    /// Construction entry point: validates the activation, resolves the four
    /// quantization operands, and fixes the table when all are constant.
    pub fn with_activation(activation: Activation, info: &dyn NodeInfo) -> Result<Self, KernelError> {
        activation.validate()?;
        let state = match resolve_constant_params::<T>(info)? {
            Some((input, output)) => {
                debug!(?activation, "quantization params constant, precomputing table");
                KernelState::Precomputed(LookupTable::build::<T>(input, output, &activation))
            }
            None => {
                debug!(?activation, "quantization params not constant, resolving per call");
                KernelState::Deferred
            }
        };
        Ok(Self {
            activation,
            state,
            _element: PhantomData,
        })
    }

    pub fn is_precomputed(&self) -> bool {
        matches!(self.state, KernelState::Precomputed(_))
    }

    /// Per-call entry point: fills `output.data` from `input.data`. Nothing
    /// is written before every argument check has passed.
    pub fn compute(&self, input: &QuantView<'_, T>, output: QuantViewMut<'_, T>) -> Result<(), KernelError> {
        if output.data.len() != input.data.len() {
            return Err(KernelError::InvalidArgument(format!(
                "output length {} does not match input length {}",
                output.data.len(),
                input.data.len()
            )));
        }
        match &self.state {
            KernelState::Precomputed(table) => {
                table.map(&input.data, output.data);
            }
            KernelState::Deferred => {
                let input_params = runtime_params::<T>(input.params, "input")?;
                let output_params = runtime_params::<T>(output.params, "output")?;
                trace!("building call-local lookup table from runtime params");
                // Local to this call: params may differ between calls, and
                // concurrent calls on one kernel must not share state.
                let table = LookupTable::build::<T>(input_params, output_params, &self.activation);
                table.map(&input.data, output.data);
            }
        }
        Ok(())
    }
}

fn runtime_params<T: QuantElement>(
    params: Option<QuantParams>,
    side: &str,
) -> Result<QuantParams, KernelError> {
    let params = params.ok_or_else(|| {
        KernelError::InvalidArgument(format!("{} quantization params missing from the call", side))
    })?;
    params.validate::<T>()?;
    Ok(params)
}

// Every operand that does resolve is validated on the spot, even when the
// kernel ends up deferring: a graph carrying a bad constant must fail at
// construction, not at the first inference call.
fn resolve_constant_params<T: QuantElement>(
    info: &dyn NodeInfo,
) -> Result<Option<(QuantParams, QuantParams)>, KernelError> {
    let x_scale = info.scalar_f32(X_SCALE);
    let x_zero_point = info.scalar_i32(X_ZERO_POINT);
    let y_scale = info.scalar_f32(Y_SCALE);
    let y_zero_point = info.scalar_i32(Y_ZERO_POINT);

    for scale in [x_scale, y_scale].into_iter().flatten() {
        validate_scale(scale)?;
    }
    for zero_point in [x_zero_point, y_zero_point].into_iter().flatten() {
        validate_zero_point::<T>(zero_point)?;
    }

    match (x_scale, x_zero_point, y_scale, y_zero_point) {
        (Some(xs), Some(xzp), Some(ys), Some(yzp)) => Ok(Some((
            QuantParams::new(xs, xzp),
            QuantParams::new(ys, yzp),
        ))),
        _ => Ok(None),
    }
}
