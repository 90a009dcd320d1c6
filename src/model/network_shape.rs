use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::layer::activations::ActivationType;

use super::{layer_desc::LayerDesc, layer_shape::LayerShape};

/// Ordered dense-layer topology of a feed-forward network.
///
/// Layer `i`'s `out_features` is expected to match layer `i + 1`'s
/// `in_features`, but only [`NetworkShape::validate_adjacency`] checks it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkShape {
    pub layers: Vec<LayerShape>,
}

impl NetworkShape {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn new_with(layers: Vec<LayerShape>) -> Self {
        Self { layers }
    }

    pub fn add_layer(&mut self, layer: LayerShape) {
        self.layers.push(layer);
    }

    pub fn add_layers(&mut self, layers: Vec<LayerShape>) {
        for layer in layers.into_iter() {
            self.add_layer(layer);
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total flat parameters the shape consumes: `Σ(out·in + out)`,
    /// saturating at `usize::MAX`. `validate` rejects shapes where it would.
    pub fn parameter_count(&self) -> usize {
        self.checked_parameter_count().unwrap_or(usize::MAX)
    }

    pub fn checked_parameter_count(&self) -> Option<usize> {
        self.layers
            .iter()
            .try_fold(0usize, |total, layer| total.checked_add(layer.checked_parameter_count()?))
    }

    pub fn input_features(&self) -> Option<usize> {
        self.layers.first().map(|layer| layer.in_features)
    }

    pub fn output_features(&self) -> Option<usize> {
        self.layers.last().map(|layer| layer.out_features)
    }

    pub fn activations(&self) -> Vec<ActivationType> {
        self.layers.iter().map(|layer| layer.activation).collect()
    }

    /// Parameter descriptors with their offsets into the flat vector.
    pub fn layer_descs(&self) -> Vec<LayerDesc> {
        let mut cursor = 0;
        self.layers
            .iter()
            .map(|&shape| {
                let desc = LayerDesc::new(shape, cursor);
                cursor = desc.end();
                desc
            })
            .collect()
    }

    pub fn total_memory_requirements(&self) -> u64 {
        self.layer_descs()
            .iter()
            .fold(0u64, |total, desc| total.saturating_add(desc.memory_requirements()))
    }

    /// Rejects empty shapes, zero-sized layers and shapes whose parameter
    /// count does not fit in `usize`.
    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NetError::InvalidShape("network has no layers".to_string()));
        }

        for (idx, layer) in self.layers.iter().enumerate() {
            if layer.out_features == 0 || layer.in_features == 0 {
                return Err(NetError::InvalidShape(format!(
                    "layer {} has a zero dimension ({}×{})",
                    idx, layer.out_features, layer.in_features
                )));
            }
        }

        if self.checked_parameter_count().is_none() {
            return Err(NetError::InvalidShape("parameter count overflows usize".to_string()));
        }

        Ok(())
    }

    /// `validate` plus the `out_i == in_{i+1}` chain check.
    pub fn validate_adjacency(&self) -> Result<()> {
        self.validate()?;

        for (idx, pair) in self.layers.windows(2).enumerate() {
            if pair[0].out_features != pair[1].in_features {
                return Err(NetError::InvalidShape(format!(
                    "layer {} outputs {} features but layer {} expects {}",
                    idx,
                    pair[0].out_features,
                    idx + 1,
                    pair[1].in_features
                )));
            }
        }

        Ok(())
    }
}

impl From<Vec<LayerShape>> for NetworkShape {
    fn from(layers: Vec<LayerShape>) -> Self {
        Self::new_with(layers)
    }
}
