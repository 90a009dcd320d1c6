use serde::{Deserialize, Serialize};

use crate::layer::activations::ActivationType;

use super::tensor_desc::TensorDesc;

/// One dense layer of a feed-forward network: `out_features × in_features`
/// weights, `out_features` biases, and the activation applied afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerShape {
    pub out_features: usize,
    pub in_features: usize,
    pub activation: ActivationType,
}

impl LayerShape {
    pub fn new(out_features: usize, in_features: usize, activation: ActivationType) -> Self {
        Self {
            out_features,
            in_features,
            activation,
        }
    }

    pub fn tanh(out_features: usize, in_features: usize) -> Self {
        Self::new(out_features, in_features, ActivationType::Tanh)
    }

    pub fn sigmoid(out_features: usize, in_features: usize) -> Self {
        Self::new(out_features, in_features, ActivationType::Sigmoid)
    }

    pub fn weight_desc(&self) -> TensorDesc {
        TensorDesc::new_matrix(self.out_features, self.in_features)
    }

    pub fn bias_desc(&self) -> TensorDesc {
        TensorDesc::new_vector(self.out_features)
    }

    /// `out·in + out`, saturating at `usize::MAX`.
    pub fn parameter_count(&self) -> usize {
        self.checked_parameter_count().unwrap_or(usize::MAX)
    }

    pub fn checked_parameter_count(&self) -> Option<usize> {
        self.weight_desc()
            .checked_num_elements()?
            .checked_add(self.bias_desc().checked_num_elements()?)
    }
}
