use crate::model::layer_shape::LayerShape;

use super::layer::{Layer, SpatialDims};

#[derive(Clone)]
pub struct Conv2DLayer {
    pub out_features: usize, // Output channels
    pub kernel_size: usize,
    pub stride: usize,
    pub padding: usize,
}

impl Conv2DLayer {
    pub fn new_with(out_features: usize, kernel_size: usize, stride: usize, padding: usize) -> Self {
        Self {
            out_features,
            kernel_size,
            stride,
            padding,
        }
    }

    pub fn from_shape(shape: &LayerShape) -> Self {
        Self::new_with(shape.out_channels, shape.kernel_size, shape.stride, shape.padding)
    }

    /// `(dim - kernel + 2 * padding) / stride + 1` as a real quotient,
    /// truncated toward zero. Since `n / s + 1 == (n + s) / s`, integer
    /// division (which truncates toward zero) gives the exact result.
    ///
    /// Returns `None` on overflow or a zero stride.
    pub fn output_dim(&self, dim: i64) -> Option<i64> {
        let kernel = i64::try_from(self.kernel_size).ok()?;
        let stride = i64::try_from(self.stride).ok()?;
        let padding = i64::try_from(self.padding).ok()?;

        let numerator = dim
            .checked_sub(kernel)?
            .checked_add(padding.checked_mul(2)?)?;
        numerator.checked_add(stride)?.checked_div(stride)
    }
}

impl Layer for Conv2DLayer {
    fn output_dims(&self, (w_in, h_in): SpatialDims) -> Option<SpatialDims> {
        Some((self.output_dim(w_in)?, self.output_dim(h_in)?))
    }

    fn out_channels(&self) -> usize {
        self.out_features
    }

    fn name(&self) -> String {
        "Conv2D".to_string()
    }

    fn config_string(&self) -> Option<String> {
        Some(format!(
            "out_channels={}, kernel={}, stride={}, padding={}",
            self.out_features, self.kernel_size, self.stride, self.padding
        ))
    }
}
