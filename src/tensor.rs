use crate::kernels::quantization::{QuantElement, QuantParams};
use std::borrow::Cow;

/// Read-only view over a contiguous buffer of 8-bit quantized elements.
///
/// `params` carries the affine quantization parameters when the surrounding
/// engine resolved them at run time; it stays `None` when they were graph
/// constants already consumed at kernel construction. The buffer is not
/// owned by this crate — the engine supplies it per call.
#[derive(Debug, Clone)]
pub struct QuantView<'a, T>
where
    T: QuantElement,
{
    pub data: Cow<'a, [T]>,
    pub shape: Cow<'a, [usize]>,
    pub params: Option<QuantParams>,
}

impl<'a, T: QuantElement> QuantView<'a, T> {
    pub fn new(data: &'a [T], shape: &'a [usize]) -> Self {
        let len: usize = shape.iter().product();
        assert_eq!(data.len(), len, "Data length mismatch");
        Self {
            data: Cow::Borrowed(data),
            shape: Cow::Borrowed(shape),
            params: None,
        }
    }

    pub fn from_owned(data: Vec<T>, shape: Vec<usize>) -> Self {
        let len: usize = shape.iter().product();
        assert_eq!(data.len(), len, "Data length mismatch");
        Self {
            data: Cow::Owned(data),
            shape: Cow::Owned(shape),
            params: None,
        }
    }

    pub fn from_slice(data: &'a [T], shape: Vec<usize>) -> Self {
        let len: usize = shape.iter().product();
        assert_eq!(data.len(), len, "Data length mismatch");
        Self {
            data: Cow::Borrowed(data),
            shape: Cow::Owned(shape),
            params: None,
        }
    }

    pub fn with_params(mut self, params: QuantParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.shape.len()
    }
}

/// Write view handed to `compute`; the kernel fills `data` in place.
#[derive(Debug)]
pub struct QuantViewMut<'a, T>
where
    T: QuantElement,
{
    pub data: &'a mut [T],
    pub params: Option<QuantParams>,
}

impl<'a, T: QuantElement> QuantViewMut<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data, params: None }
    }

    pub fn with_params(mut self, params: QuantParams) -> Self {
        self.params = Some(params);
        self
    }
}
