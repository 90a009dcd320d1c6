//! JSON loading for network shapes, parameter vectors and inputs.
//!
//! Shape files look like
//! `{"layers":[{"out_features":3,"in_features":2,"activation":"tanh"}]}`;
//! parameter vectors and inputs are plain arrays of numbers, sample sets are
//! arrays of such arrays.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::model::network_shape::NetworkShape;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub fn parse_shape(json: &str) -> Result<NetworkShape> {
    let shape: NetworkShape = serde_json::from_str(json)?;
    shape.validate()?;
    Ok(shape)
}

/// Loads and validates a shape. Unknown activation tags fail here.
pub fn load_shape(path: &Path) -> Result<NetworkShape> {
    let shape: NetworkShape = read_json(path)?;
    shape.validate()?;
    debug!(
        "Loaded {} layer shape from {} ({} parameters)",
        shape.len(),
        path.display(),
        shape.parameter_count()
    );
    Ok(shape)
}

pub fn load_vector(path: &Path) -> Result<Vec<f32>> {
    read_json(path)
}

pub fn load_samples(path: &Path) -> Result<Vec<Vec<f32>>> {
    let samples: Vec<Vec<f32>> = read_json(path)?;
    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
