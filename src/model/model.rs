use super::layer_spec::LayerSpec;

/// Input volume as (channels, width, height).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputShape {
    pub channels: usize,
    pub width: usize,
    pub height: usize,
}

impl InputShape {
    pub fn new(channels: usize, width: usize, height: usize) -> Self {
        Self {
            channels,
            width,
            height,
        }
    }
}

/// A validated, immutable plan: what the propagator consumes.
///
/// Built by [`crate::config::PlannerConfig::build`], or directly from
/// already assembled layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelDesc {
    pub batch_size: usize,
    pub initial_shape: InputShape,
    pub layers: Vec<LayerSpec>,
}

impl ModelDesc {
    pub fn new(batch_size: usize, initial_shape: InputShape) -> Self {
        Self {
            batch_size,
            initial_shape,
            layers: Vec::new(),
        }
    }

    pub fn new_with(batch_size: usize, initial_shape: InputShape, layers: Vec<LayerSpec>) -> Self {
        Self {
            batch_size,
            initial_shape,
            layers,
        }
    }

    pub fn with_layer(mut self, layer: LayerSpec) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }
}
