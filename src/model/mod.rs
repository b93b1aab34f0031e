pub mod layer_shape;
pub mod layer_spec;
pub mod layer_type;
pub mod model;
pub mod shape_record;

pub use layer_shape::LayerShape;
pub use layer_spec::LayerSpec;
pub use layer_type::LayerType;
pub use model::{InputShape, ModelDesc};
pub use shape_record::ShapeRecord;
