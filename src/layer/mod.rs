pub mod activations;
pub mod linear;
