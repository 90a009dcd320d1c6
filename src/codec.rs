//! Flat parameter vector <-> per-layer weight/bias layout.
//!
//! Layout per layer, in shape order: `out × in` weights in row-major order
//! followed by `out` biases. Values past the shape's parameter count are
//! ignored, so a longer sampler state can be decoded without slicing first.

use log::debug;

use crate::error::{NetError, Result};
use crate::layer::linear::LinearLayer;
use crate::model::network_shape::NetworkShape;

pub fn decode(flat: &[f32], shape: &NetworkShape) -> Result<Vec<LinearLayer>> {
    let required = shape
        .checked_parameter_count()
        .ok_or_else(|| NetError::InvalidShape("parameter count overflows usize".to_string()))?;
    if flat.len() < required {
        return Err(NetError::LayoutError {
            required,
            provided: flat.len(),
        });
    }
    if flat.len() > required {
        debug!(
            "Ignoring {} trailing parameters beyond the {} the shape consumes",
            flat.len() - required,
            required
        );
    }

    let mut layers = Vec::with_capacity(shape.len());
    for desc in shape.layer_descs() {
        let weights = flat[desc.weight_range()].to_vec();
        let biases = flat[desc.bias_range()].to_vec();
        layers.push(LinearLayer::new(
            desc.shape.in_features,
            desc.shape.out_features,
            weights,
            biases,
        )?);
    }

    Ok(layers)
}

/// Inverse of [`decode`]: concatenates each layer's weights then biases.
pub fn encode(layers: &[LinearLayer]) -> Vec<f32> {
    let total = layers.iter().map(|layer| layer.parameter_count()).sum();
    let mut flat = Vec::with_capacity(total);
    for layer in layers {
        flat.extend_from_slice(layer.weights());
        flat.extend_from_slice(layer.biases());
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layer_shape::LayerShape;

    fn single() -> NetworkShape {
        NetworkShape::new_with(vec![LayerShape::tanh(3, 2)])
    }

    fn ramp(len: usize) -> Vec<f32> {
        (0..len).map(|i| i as f32).collect()
    }

    #[test]
    fn short_vector_is_layout_error() {
        let err = decode(&ramp(8), &single()).unwrap_err();
        assert!(matches!(err, NetError::LayoutError { required: 9, provided: 8 }));
    }

    #[test]
    fn exact_and_excess_lengths_decode() {
        let exact = decode(&ramp(9), &single()).unwrap();
        let excess = decode(&ramp(10), &single()).unwrap();
        assert_eq!(exact, excess);
    }

    #[test]
    fn weights_fill_rows_then_bias() {
        let layers = decode(&ramp(9), &single()).unwrap();
        let layer = &layers[0];
        assert_eq!(layer.out_features(), 3);
        assert_eq!(layer.in_features(), 2);
        assert_eq!(layer.row(0), &[0.0, 1.0]);
        assert_eq!(layer.row(1), &[2.0, 3.0]);
        assert_eq!(layer.row(2), &[4.0, 5.0]);
        assert_eq!(layer.biases(), &[6.0, 7.0, 8.0]);
    }

    #[test]
    fn cursor_carries_across_layers() {
        let shape = NetworkShape::new_with(vec![LayerShape::tanh(2, 2), LayerShape::sigmoid(1, 2)]);
        let layers = decode(&ramp(9), &shape).unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].weights(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(layers[0].biases(), &[4.0, 5.0]);
        assert_eq!(layers[1].weights(), &[6.0, 7.0]);
        assert_eq!(layers[1].biases(), &[8.0]);
    }

    #[test]
    fn encode_inverts_decode() {
        let shape = NetworkShape::new_with(vec![LayerShape::tanh(4, 3), LayerShape::sigmoid(2, 4)]);
        let flat = ramp(shape.parameter_count());
        let layers = decode(&flat, &shape).unwrap();
        assert_eq!(encode(&layers), flat);
    }

    #[test]
    fn overflowing_shape_is_rejected_before_slicing() {
        let side = 1usize << (usize::BITS / 2);
        let shape = NetworkShape::new_with(vec![LayerShape::tanh(side, side)]);
        assert!(matches!(decode(&[0.0; 4], &shape), Err(NetError::InvalidShape(_))));
    }

    #[test]
    fn empty_shape_decodes_to_nothing() {
        assert!(decode(&[], &NetworkShape::new()).unwrap().is_empty());
    }
}
