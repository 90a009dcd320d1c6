use rayon::prelude::*;

use crate::codec;
use crate::error::{NetError, Result};
use crate::layer::activations::{ActivationFunction, ActivationType};
use crate::layer::linear::LinearLayer;
use crate::model::network_shape::NetworkShape;

/// Runs `x` through every layer: `current = activation(W · current + b)`.
pub fn forward(x: &[f32], layers: &[LinearLayer], activations: &[ActivationType]) -> Result<Vec<f32>> {
    if layers.is_empty() {
        return Err(NetError::DimensionMismatch("forward pass over zero layers".to_string()));
    }
    if layers.len() != activations.len() {
        return Err(NetError::DimensionMismatch(format!(
            "{} layers but {} activations",
            layers.len(),
            activations.len()
        )));
    }

    let mut current = x.to_vec();
    for (idx, (layer, activation)) in layers.iter().zip(activations).enumerate() {
        let mut next = layer.affine(&current).map_err(|e| match e {
            NetError::DimensionMismatch(msg) => NetError::DimensionMismatch(format!("layer {}: {}", idx, msg)),
            other => other,
        })?;
        activation.apply_in_place(&mut next);
        current = next;
    }

    Ok(current)
}

/// Evaluates many inputs against the same decoded layers in parallel.
pub fn forward_batch(
    inputs: &[Vec<f32>],
    layers: &[LinearLayer],
    activations: &[ActivationType],
) -> Result<Vec<Vec<f32>>> {
    inputs
        .par_iter()
        .map(|x| forward(x, layers, activations))
        .collect()
}

/// A network shape paired with decode + forward.
#[derive(Clone, Debug, PartialEq)]
pub struct Network {
    shape: NetworkShape,
    activations: Vec<ActivationType>,
}

impl Network {
    pub fn new(shape: NetworkShape) -> Result<Self> {
        shape.validate_adjacency()?;
        let activations = shape.activations();
        Ok(Self { shape, activations })
    }

    pub fn shape(&self) -> &NetworkShape {
        &self.shape
    }

    pub fn activations(&self) -> &[ActivationType] {
        &self.activations
    }

    pub fn parameter_count(&self) -> usize {
        self.shape.parameter_count()
    }

    pub fn decode(&self, flat: &[f32]) -> Result<Vec<LinearLayer>> {
        codec::decode(flat, &self.shape)
    }

    /// Decodes `flat` fresh and runs one forward pass.
    pub fn evaluate(&self, flat: &[f32], x: &[f32]) -> Result<Vec<f32>> {
        let layers = self.decode(flat)?;
        forward(x, &layers, &self.activations)
    }

    pub fn evaluate_batch(&self, flat: &[f32], inputs: &[Vec<f32>]) -> Result<Vec<Vec<f32>>> {
        let layers = self.decode(flat)?;
        forward_batch(inputs, &layers, &self.activations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layer_shape::LayerShape;

    const EPS: f32 = 1e-4;

    #[test]
    fn single_sigmoid_unit() {
        let shape = NetworkShape::new_with(vec![LayerShape::sigmoid(1, 2)]);
        let layers = codec::decode(&[0.5, -0.5, 0.0], &shape).unwrap();
        let out = forward(&[1.0, 2.0], &layers, &[ActivationType::Sigmoid]).unwrap();
        assert_eq!(out.len(), 1);
        assert!((out[0] - 0.3775).abs() < EPS);
    }

    #[test]
    fn zero_parameters_give_half() {
        let shape = NetworkShape::new_with(vec![LayerShape::tanh(2, 2), LayerShape::sigmoid(1, 2)]);
        let network = Network::new(shape).unwrap();
        let out = network.evaluate(&[0.0; 9], &[1.0, 1.0]).unwrap();
        assert!((out[0] - 0.5).abs() < EPS);
    }

    #[test]
    fn input_length_must_match_first_layer() {
        let shape = NetworkShape::new_with(vec![LayerShape::sigmoid(1, 2)]);
        let layers = codec::decode(&[0.5, -0.5, 0.0], &shape).unwrap();
        let err = forward(&[1.0, 2.0, 3.0], &layers, &[ActivationType::Sigmoid]).unwrap_err();
        assert!(matches!(err, NetError::DimensionMismatch(_)));
    }

    #[test]
    fn non_adjacent_layers_fail_mid_pass() {
        let shape = NetworkShape::new_with(vec![LayerShape::tanh(3, 2), LayerShape::sigmoid(1, 2)]);
        let layers = codec::decode(&vec![0.1; shape.parameter_count()], &shape).unwrap();
        let err = forward(&[1.0, 1.0], &layers, &shape.activations()).unwrap_err();
        match err {
            NetError::DimensionMismatch(msg) => assert!(msg.starts_with("layer 1")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn activation_count_must_match_layers() {
        let shape = NetworkShape::new_with(vec![LayerShape::sigmoid(1, 2)]);
        let layers = codec::decode(&[0.5, -0.5, 0.0], &shape).unwrap();
        assert!(matches!(forward(&[1.0, 2.0], &layers, &[]), Err(NetError::DimensionMismatch(_))));
        assert!(matches!(forward(&[1.0], &[], &[]), Err(NetError::DimensionMismatch(_))));
    }

    #[test]
    fn batch_matches_sequential() {
        let shape = NetworkShape::new_with(vec![LayerShape::tanh(3, 2), LayerShape::sigmoid(1, 3)]);
        let flat: Vec<f32> = (0..shape.parameter_count()).map(|i| (i as f32 * 0.37).sin()).collect();
        let network = Network::new(shape).unwrap();
        let inputs = vec![vec![0.0, 1.0], vec![-1.0, 0.5], vec![2.0, -3.0]];

        let batch = network.evaluate_batch(&flat, &inputs).unwrap();
        for (x, out) in inputs.iter().zip(&batch) {
            assert_eq!(&network.evaluate(&flat, x).unwrap(), out);
        }
    }

    #[test]
    fn network_rejects_broken_chain() {
        let shape = NetworkShape::new_with(vec![LayerShape::tanh(3, 2), LayerShape::sigmoid(1, 2)]);
        assert!(matches!(Network::new(shape), Err(NetError::InvalidShape(_))));
    }
}
