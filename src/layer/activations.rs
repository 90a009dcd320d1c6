use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetError;

pub trait ActivationFunction: Copy {
    fn name(&self) -> &'static str;
    fn apply(&self, z: f32) -> f32;

    fn apply_in_place(&self, values: &mut [f32]) {
        for v in values.iter_mut() {
            *v = self.apply(*v);
        }
    }
}

/// Element-wise nonlinearity applied after a dense layer's affine transform.
///
/// Only the tags below are recognised. Anything else is rejected when the
/// tag is parsed, so a decoded network can never carry an unknown activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActivationType {
    Tanh,
    Sigmoid,
}

impl ActivationFunction for ActivationType {
    fn name(&self) -> &'static str {
        match self {
            ActivationType::Tanh => "tanh",
            ActivationType::Sigmoid => "sigmoid",
        }
    }

    fn apply(&self, z: f32) -> f32 {
        match self {
            ActivationType::Tanh => z.tanh(),
            ActivationType::Sigmoid => 1.0 / (1.0 + (-z).exp()),
        }
    }
}

impl fmt::Display for ActivationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationType {
    type Err = NetError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "tanh" => Ok(ActivationType::Tanh),
            "sigmoid" | "σ" | "logistic" => Ok(ActivationType::Sigmoid),
            other => Err(NetError::DimensionMismatch(format!(
                "unrecognized activation tag '{}', expected one of: tanh, sigmoid",
                other
            ))),
        }
    }
}

impl TryFrom<String> for ActivationType {
    type Error = NetError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<ActivationType> for String {
    fn from(activation: ActivationType) -> Self {
        activation.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn sigmoid_values() {
        let s = ActivationType::Sigmoid;
        assert!((s.apply(0.0) - 0.5).abs() < EPS);
        assert!((s.apply(-0.5) - 0.377_540_7).abs() < EPS);
        assert!(s.apply(50.0) <= 1.0);
        assert!(s.apply(-50.0) >= 0.0);
    }

    #[test]
    fn tanh_values() {
        let t = ActivationType::Tanh;
        assert_eq!(t.apply(0.0), 0.0);
        assert!((t.apply(1.0) - 0.761_594_2).abs() < EPS);
        assert!((t.apply(-1.0) + 0.761_594_2).abs() < EPS);
    }

    #[test]
    fn apply_in_place_maps_every_element() {
        let mut values = [0.0, 0.0, 0.0];
        ActivationType::Sigmoid.apply_in_place(&mut values);
        assert!(values.iter().all(|v| (v - 0.5).abs() < EPS));
    }

    #[test]
    fn parses_known_tags() {
        assert_eq!("tanh".parse::<ActivationType>().unwrap(), ActivationType::Tanh);
        assert_eq!("Sigmoid".parse::<ActivationType>().unwrap(), ActivationType::Sigmoid);
        assert_eq!("σ".parse::<ActivationType>().unwrap(), ActivationType::Sigmoid);
    }

    #[test]
    fn unknown_tag_is_dimension_mismatch() {
        let err = "relu".parse::<ActivationType>().unwrap_err();
        assert!(matches!(err, NetError::DimensionMismatch(_)));
    }

    #[test]
    fn serde_uses_tag_strings() {
        let json = serde_json::to_string(&ActivationType::Tanh).unwrap();
        assert_eq!(json, "\"tanh\"");

        let parsed: ActivationType = serde_json::from_str("\"sigmoid\"").unwrap();
        assert_eq!(parsed, ActivationType::Sigmoid);

        assert!(serde_json::from_str::<ActivationType>("\"gelu\"").is_err());
    }
}
