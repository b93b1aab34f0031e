use super::layer::{Layer, SpatialDims};

/// Stand-in for an unrecognised layer tag: channels change, the spatial
/// extent does not.
#[derive(Clone)]
pub struct PassThroughLayer {
    pub tag: char,
    pub out_features: usize,
}

impl PassThroughLayer {
    pub fn new(tag: char, out_features: usize) -> Self {
        Self { tag, out_features }
    }
}

impl Layer for PassThroughLayer {
    fn output_dims(&self, input: SpatialDims) -> Option<SpatialDims> {
        Some(input)
    }

    fn out_channels(&self) -> usize {
        self.out_features
    }

    fn name(&self) -> String {
        format!("PassThrough({:?})", self.tag)
    }
}
