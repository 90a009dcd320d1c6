use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::error::{NetError, Result};

use super::{network_shape::NetworkShape, tensor_desc::TensorDesc};

/// Strategy for drawing a flat parameter vector, e.g. a prior draw for a
/// sampler's first state or an optimizer's starting point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightInit {
    Xavier,             // Good for tanh activation
    He,                 // Good for ReLU-like activations
    LeCun,
    Normal {            // Isotropic Gaussian prior
        std_dev: f32,
    },
    UniformRandom {
        min: f32,
        max: f32,
    },
    Constant(f32),
}

impl WeightInit {
    // Box-Muller transform to generate normal distribution
    fn normal_sample<R: Rng>(rng: &mut R, mean: f32, std_dev: f32) -> f32 {
        // Lower bound keeps ln() finite
        let uniform = Uniform::new(f32::MIN_POSITIVE, 1.0);

        let u1 = uniform.sample(rng);
        let u2 = uniform.sample(rng);

        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }

    /// Rejects parameters the samplers cannot draw from.
    pub fn validate(&self) -> Result<()> {
        match self {
            WeightInit::Normal { std_dev } if !std_dev.is_finite() => Err(NetError::InvalidInit(format!(
                "normal std_dev must be finite, got {}",
                std_dev
            ))),
            WeightInit::UniformRandom { min, max } if !(max - min).is_finite() => {
                Err(NetError::InvalidInit(format!(
                    "uniform bounds must be finite with a finite width, got [{}, {}]",
                    min, max
                )))
            }
            WeightInit::Constant(value) if !value.is_finite() => Err(NetError::InvalidInit(format!(
                "constant must be finite, got {}",
                value
            ))),
            _ => Ok(()),
        }
    }

    pub fn init<R: Rng>(&self, desc: &TensorDesc, rng: &mut R) -> Result<Vec<f32>> {
        self.validate()?;
        let total_elements = desc.checked_num_elements().ok_or_else(|| {
            NetError::InvalidShape(format!("{} elements overflow usize", desc.dims_label()))
        })?;

        // Matrix is [out_features, in_features]
        let (fan_in, fan_out) = match desc {
            TensorDesc::Matrix { rows, cols } => (*cols, *rows),
            TensorDesc::Vector { length } => (1, *length),
        };

        let values = match self {
            WeightInit::Xavier => {
                let limit = (6.0 / (fan_in + fan_out).max(1) as f32).sqrt();
                let dist = Uniform::new_inclusive(-limit, limit);
                (0..total_elements).map(|_| dist.sample(rng)).collect()
            }

            WeightInit::He => {
                let std_dev = (2.0 / fan_in.max(1) as f32).sqrt();
                (0..total_elements)
                    .map(|_| Self::normal_sample(rng, 0.0, std_dev))
                    .collect()
            }

            WeightInit::LeCun => {
                let std_dev = (1.0 / fan_in.max(1) as f32).sqrt();
                (0..total_elements)
                    .map(|_| Self::normal_sample(rng, 0.0, std_dev))
                    .collect()
            }

            WeightInit::Normal { std_dev } => (0..total_elements)
                .map(|_| Self::normal_sample(rng, 0.0, *std_dev))
                .collect(),

            WeightInit::UniformRandom { min, max } => {
                let dist = Uniform::new_inclusive(min.min(*max), max.max(*min));
                (0..total_elements).map(|_| dist.sample(rng)).collect()
            }

            WeightInit::Constant(value) => vec![*value; total_elements],
        };

        Ok(values)
    }

    /// Draws a flat parameter vector laid out the way `codec::decode` reads it.
    ///
    /// The same seed always yields the same vector; `None` seeds from entropy.
    pub fn init_network(&self, shape: &NetworkShape, seed: Option<u64>) -> Result<Vec<f32>> {
        self.validate()?;
        let required = shape
            .checked_parameter_count()
            .ok_or_else(|| NetError::InvalidShape("parameter count overflows usize".to_string()))?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut flat = Vec::with_capacity(required);
        for desc in shape.layer_descs() {
            flat.extend(self.init(&desc.weights, &mut rng)?);
            flat.extend(self.init(&desc.biases, &mut rng)?);
        }
        Ok(flat)
    }
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Xavier
    }
}
