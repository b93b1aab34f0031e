/// Hyperparameters of a single layer. Scalars only: kernel, stride and
/// padding apply to width and height alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerShape {
    pub out_channels: usize,
    pub kernel_size: usize,
    pub stride: usize,
    pub padding: usize,
    // Only read by transposed convolutions
    pub output_padding: usize,
}

impl LayerShape {
    pub fn new(out_channels: usize) -> Self {
        Self {
            out_channels,
            ..Default::default()
        }
    }

    pub fn new_with(
        out_channels: usize,
        kernel_size: usize,
        stride: usize,
        padding: usize,
        output_padding: usize,
    ) -> Self {
        Self {
            out_channels,
            kernel_size,
            stride,
            padding,
            output_padding,
        }
    }
}

impl Default for LayerShape {
    fn default() -> Self {
        Self {
            out_channels: 0,
            kernel_size: 3,
            stride: 1,
            padding: 0,
            output_padding: 0,
        }
    }
}
