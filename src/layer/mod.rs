pub mod conv2d;
pub mod conv_transpose2d;
pub mod factory;
pub mod layer;
pub mod pass_through;

pub use factory::Layers;
pub use layer::{Layer, SpatialDims};
