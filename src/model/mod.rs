pub mod layer_desc;
pub mod layer_shape;
pub mod network_shape;
pub mod tensor_desc;
pub mod weight_init;
