use super::{layer_shape::LayerShape, tensor_desc::TensorDesc};

/// Where one layer's parameters live inside a flat parameter vector.
///
/// Weights occupy `[offset, offset + weights.num_elements())` in row-major
/// order and the biases follow immediately after.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerDesc {
    pub shape: LayerShape,
    pub weights: TensorDesc,
    pub biases: TensorDesc,
    pub offset: usize,
}

impl LayerDesc {
    pub fn new(shape: LayerShape, offset: usize) -> Self {
        Self {
            weights: shape.weight_desc(),
            biases: shape.bias_desc(),
            shape,
            offset,
        }
    }

    pub fn weight_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset.saturating_add(self.weights.num_elements())
    }

    pub fn bias_range(&self) -> std::ops::Range<usize> {
        let start = self.weight_range().end;
        start..start.saturating_add(self.biases.num_elements())
    }

    /// Cursor position after this layer has been consumed.
    pub fn end(&self) -> usize {
        self.bias_range().end
    }

    pub fn parameter_count(&self) -> usize {
        self.shape.parameter_count()
    }

    pub fn memory_requirements(&self) -> u64 {
        (self.weights.size_in_bytes() as u64).saturating_add(self.biases.size_in_bytes() as u64)
    }
}
