use crate::model::layer_shape::LayerShape;

use super::layer::{Layer, SpatialDims};

#[derive(Clone)]
pub struct ConvTranspose2DLayer {
    pub out_features: usize, // Output channels
    pub kernel_size: usize,
    pub stride: usize,
    pub padding: usize,
    pub output_padding: usize,
}

impl ConvTranspose2DLayer {
    pub fn new_with(
        out_features: usize,
        kernel_size: usize,
        stride: usize,
        padding: usize,
        output_padding: usize,
    ) -> Self {
        Self {
            out_features,
            kernel_size,
            stride,
            padding,
            output_padding,
        }
    }

    pub fn from_shape(shape: &LayerShape) -> Self {
        Self::new_with(
            shape.out_channels,
            shape.kernel_size,
            shape.stride,
            shape.padding,
            shape.output_padding,
        )
    }

    /// `(dim - 1) * stride - 2 * padding + kernel + output_padding`, or
    /// `None` on overflow.
    pub fn output_dim(&self, dim: i64) -> Option<i64> {
        let kernel = i64::try_from(self.kernel_size).ok()?;
        let stride = i64::try_from(self.stride).ok()?;
        let padding = i64::try_from(self.padding).ok()?;
        let output_padding = i64::try_from(self.output_padding).ok()?;

        dim.checked_sub(1)?
            .checked_mul(stride)?
            .checked_sub(padding.checked_mul(2)?)?
            .checked_add(kernel)?
            .checked_add(output_padding)
    }
}

impl Layer for ConvTranspose2DLayer {
    fn output_dims(&self, (w_in, h_in): SpatialDims) -> Option<SpatialDims> {
        Some((self.output_dim(w_in)?, self.output_dim(h_in)?))
    }

    fn out_channels(&self) -> usize {
        self.out_features
    }

    fn name(&self) -> String {
        "ConvTranspose2D".to_string()
    }

    fn config_string(&self) -> Option<String> {
        Some(format!(
            "out_channels={}, kernel={}, stride={}, padding={}, output_padding={}",
            self.out_features, self.kernel_size, self.stride, self.padding, self.output_padding
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_with_same_padding() {
        let deconv = ConvTranspose2DLayer::new_with(16, 3, 2, 1, 0);
        // (13 - 1) * 2 - 2 + 3 + 0
        assert_eq!(deconv.output_dims((13, 13)), Some((25, 25)));
    }

    #[test]
    fn output_padding_adds_once() {
        let deconv = ConvTranspose2DLayer::new_with(16, 3, 2, 1, 1);
        assert_eq!(deconv.output_dims((14, 7)), Some((28, 14)));
    }

    #[test]
    fn zero_stride_collapses_to_kernel() {
        let deconv = ConvTranspose2DLayer::new_with(4, 3, 0, 0, 0);
        assert_eq!(deconv.output_dim(100), Some(3));
    }

    #[test]
    fn growth_past_i64_is_none() {
        let deconv = ConvTranspose2DLayer::new_with(4, 3, 1000, 1, 0);
        assert_eq!(deconv.output_dim(i64::MAX / 100), None);
        assert_eq!(deconv.output_dim(i64::MIN), None);

        let deconv = ConvTranspose2DLayer::new_with(4, 3, usize::MAX, 1, 0);
        assert_eq!(deconv.output_dim(2), None);
    }
}
