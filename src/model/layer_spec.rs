use std::fmt;

use super::{layer_shape::LayerShape, layer_type::LayerType};

/// One fully assembled layer of a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerSpec {
    pub layer_type: LayerType,
    pub shape: LayerShape,
}

impl LayerSpec {
    pub fn new(layer_type: LayerType, shape: LayerShape) -> Self {
        Self { layer_type, shape }
    }

    pub fn conv2d(out_channels: usize, kernel_size: usize, stride: usize, padding: usize) -> Self {
        Self::new(
            LayerType::Conv2D,
            LayerShape::new_with(out_channels, kernel_size, stride, padding, 0),
        )
    }

    pub fn conv_transpose2d(
        out_channels: usize,
        kernel_size: usize,
        stride: usize,
        padding: usize,
        output_padding: usize,
    ) -> Self {
        Self::new(
            LayerType::ConvTranspose2D,
            LayerShape::new_with(out_channels, kernel_size, stride, padding, output_padding),
        )
    }

    pub fn pass_through(tag: char, out_channels: usize) -> Self {
        Self::new(LayerType::PassThrough(tag), LayerShape::new(out_channels))
    }
}

impl fmt::Display for LayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.shape;
        write!(
            f,
            "{}(out_channels={}, kernel={}, stride={}, padding={}, output_padding={})",
            self.layer_type, s.out_channels, s.kernel_size, s.stride, s.padding, s.output_padding
        )
    }
}
