use std::collections::HashMap;

/// Construction-time introspection over one graph node, implemented by the
/// surrounding engine: whether an operand is fed by a scalar graph constant
/// (an initializer, not a runtime-computed value) and what the node's
/// attributes are.
pub trait NodeInfo {
    /// Scalar f32 initializer feeding operand `index`, if graph-constant.
    fn scalar_f32(&self, index: usize) -> Option<f32>;
    /// Scalar integer initializer feeding operand `index`, if graph-constant.
    /// Zero-point tensors store 8-bit values; implementations widen to i32.
    fn scalar_i32(&self, index: usize) -> Option<i32>;
    /// Float attribute declared on the node.
    fn attr_f32(&self, name: &str) -> Option<f32>;
}

/// Map-backed `NodeInfo` for engines that materialize their initializers up
/// front, and for tests.
#[derive(Debug, Default, Clone)]
pub struct StaticNodeInfo {
    float_consts: HashMap<usize, f32>,
    int_consts: HashMap<usize, i32>,
    attrs: HashMap<String, f32>,
}

impl StaticNodeInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scalar_f32(mut self, index: usize, value: f32) -> Self {
        self.float_consts.insert(index, value);
        self
    }

    pub fn with_scalar_i32(mut self, index: usize, value: i32) -> Self {
        self.int_consts.insert(index, value);
        self
    }

    pub fn with_attr(mut self, name: &str, value: f32) -> Self {
        self.attrs.insert(name.to_string(), value);
        self
    }
}

impl NodeInfo for StaticNodeInfo {
    fn scalar_f32(&self, index: usize) -> Option<f32> {
        self.float_consts.get(&index).copied()
    }

    fn scalar_i32(&self, index: usize) -> Option<i32> {
        self.int_consts.get(&index).copied()
    }

    fn attr_f32(&self, name: &str) -> Option<f32> {
        self.attrs.get(name).copied()
    }
}
