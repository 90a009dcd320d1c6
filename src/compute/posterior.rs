//! Posterior-predictive evaluation over a set of flat parameter samples,
//! e.g. the draws of an MCMC chain over a Bayesian network's weights.

use log::debug;
use rayon::prelude::*;

use crate::error::{NetError, Result};

use super::forward::{forward, Network};

/// Element-wise mean of the network output over every sample.
pub fn predict_mean(network: &Network, samples: &[Vec<f32>], x: &[f32]) -> Result<Vec<f32>> {
    if samples.is_empty() {
        return Err(NetError::LayoutError {
            required: network.parameter_count(),
            provided: 0,
        });
    }

    let outputs = samples
        .par_iter()
        .map(|flat| network.evaluate(flat, x))
        .collect::<Result<Vec<_>>>()?;

    debug!("Averaged {} posterior samples", outputs.len());

    let width = outputs[0].len();
    let mut mean = vec![0.0f32; width];
    for out in &outputs {
        for (acc, v) in mean.iter_mut().zip(out) {
            *acc += v;
        }
    }
    let n = outputs.len() as f32;
    mean.iter_mut().for_each(|v| *v /= n);

    Ok(mean)
}

/// Mean prediction for every input, sharing the decoded samples.
pub fn predict_mean_batch(network: &Network, samples: &[Vec<f32>], inputs: &[Vec<f32>]) -> Result<Vec<Vec<f32>>> {
    if samples.is_empty() {
        return Err(NetError::LayoutError {
            required: network.parameter_count(),
            provided: 0,
        });
    }

    let decoded = samples
        .par_iter()
        .map(|flat| network.decode(flat))
        .collect::<Result<Vec<_>>>()?;

    inputs
        .par_iter()
        .map(|x| -> Result<Vec<f32>> {
            let mut mean = Vec::new();
            for layers in &decoded {
                let out = forward(x, layers, network.activations())?;
                if mean.is_empty() {
                    mean = out;
                } else {
                    mean.iter_mut().zip(&out).for_each(|(acc, v)| *acc += v);
                }
            }
            let n = decoded.len() as f32;
            mean.iter_mut().for_each(|v| *v /= n);
            Ok(mean)
        })
        .collect()
}

/// Binary decision per output unit: `mean > threshold`.
pub fn predict_class(network: &Network, samples: &[Vec<f32>], x: &[f32], threshold: f32) -> Result<Vec<bool>> {
    Ok(predict_mean(network, samples, x)?
        .into_iter()
        .map(|p| p > threshold)
        .collect())
}
