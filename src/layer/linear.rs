use crate::error::{NetError, Result};
use crate::model::tensor_desc::TensorDesc;

/// A decoded dense layer: `out_features × in_features` row-major weights
/// and an `out_features` bias vector. Never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearLayer {
    in_features: usize,
    out_features: usize,
    weights: Vec<f32>,
    biases: Vec<f32>,
}

impl LinearLayer {
    pub fn new(in_features: usize, out_features: usize, weights: Vec<f32>, biases: Vec<f32>) -> Result<Self> {
        if weights.len() != out_features * in_features {
            return Err(NetError::DimensionMismatch(format!(
                "Linear layer expects {}×{} = {} weights, got {}",
                out_features,
                in_features,
                out_features * in_features,
                weights.len()
            )));
        }
        if biases.len() != out_features {
            return Err(NetError::DimensionMismatch(format!(
                "Linear layer expects {} biases, got {}",
                out_features,
                biases.len()
            )));
        }

        Ok(Self {
            in_features,
            out_features,
            weights,
            biases,
        })
    }

    /// Builds a layer from nested rows, mostly useful for hand-written weights.
    pub fn from_rows(rows: &[Vec<f32>], biases: Vec<f32>) -> Result<Self> {
        let in_features = rows.first().map_or(0, |row| row.len());
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != in_features) {
            return Err(NetError::DimensionMismatch(format!(
                "row {} has {} columns, expected {}",
                idx,
                row.len(),
                in_features
            )));
        }

        let weights = rows.iter().flatten().copied().collect();
        Self::new(in_features, rows.len(), weights, biases)
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn biases(&self) -> &[f32] {
        &self.biases
    }

    pub fn weight_desc(&self) -> TensorDesc {
        TensorDesc::new_matrix(self.out_features, self.in_features)
    }

    pub fn bias_desc(&self) -> TensorDesc {
        TensorDesc::new_vector(self.out_features)
    }

    pub fn row(&self, output: usize) -> &[f32] {
        let start = output * self.in_features;
        &self.weights[start..start + self.in_features]
    }

    pub fn weight(&self, output: usize, input: usize) -> f32 {
        self.weights[output * self.in_features + input]
    }

    /// `W · input + b`.
    pub fn affine(&self, input: &[f32]) -> Result<Vec<f32>> {
        if input.len() != self.in_features {
            return Err(NetError::DimensionMismatch(format!(
                "Linear layer expected {} input features, got {}",
                self.in_features,
                input.len()
            )));
        }

        let output = (0..self.out_features)
            .map(|o| {
                self.row(o)
                    .iter()
                    .zip(input)
                    .fold(self.biases[o], |acc, (w, x)| acc + w * x)
            })
            .collect();

        Ok(output)
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }
}
