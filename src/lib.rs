//! Flat parameter vector layout for dense feed-forward networks.
//!
//! [`codec::decode`] turns the flat vector a sampler or optimizer works on
//! into per-layer weight matrices and bias vectors, and
//! [`compute::forward::forward`] runs an input through them.

pub mod codec;
pub mod compute;
pub mod config;
pub mod error;
pub mod layer;
pub mod model;

pub use codec::{decode, encode};
pub use compute::forward::{forward, forward_batch, Network};
pub use compute::posterior::{predict_class, predict_mean, predict_mean_batch};
pub use error::{NetError, Result};
pub use layer::activations::{ActivationFunction, ActivationType};
pub use layer::linear::LinearLayer;
pub use model::layer_shape::LayerShape;
pub use model::network_shape::NetworkShape;
pub use model::weight_init::WeightInit;
