use crate::model::{layer_spec::LayerSpec, layer_type::LayerType};

use super::{
    conv2d::Conv2DLayer, conv_transpose2d::ConvTranspose2DLayer, layer::Layer,
    pass_through::PassThroughLayer,
};

pub struct Layers;

impl Layers {
    pub fn from_spec(spec: &LayerSpec) -> Box<dyn Layer> {
        match spec.layer_type {
            LayerType::Conv2D => Box::new(Conv2DLayer::from_shape(&spec.shape)),
            LayerType::ConvTranspose2D => Box::new(ConvTranspose2DLayer::from_shape(&spec.shape)),
            LayerType::PassThrough(tag) => {
                Box::new(PassThroughLayer::new(tag, spec.shape.out_channels))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_spec_picks_the_matching_rule() {
        let conv = Layers::from_spec(&LayerSpec::conv2d(8, 3, 2, 1));
        assert_eq!(conv.name(), "Conv2D");
        assert_eq!(conv.output_dims((28, 28)), Some((14, 14)));

        let deconv = Layers::from_spec(&LayerSpec::conv_transpose2d(8, 3, 2, 1, 1));
        assert_eq!(deconv.name(), "ConvTranspose2D");
        assert_eq!(deconv.output_dims((14, 14)), Some((28, 28)));

        let other = Layers::from_spec(&LayerSpec::pass_through('x', 5));
        assert_eq!(other.name(), "PassThrough('x')");
        assert_eq!(other.out_channels(), 5);
        assert_eq!(other.output_dims((9, 3)), Some((9, 3)));
        assert!(other.config_string().is_none());
    }

    #[test]
    fn from_spec_carries_every_hyperparameter() {
        let deconv = Layers::from_spec(&LayerSpec::conv_transpose2d(4, 4, 2, 1, 1));
        assert_eq!(
            deconv.config_string().as_deref(),
            Some("out_channels=4, kernel=4, stride=2, padding=1, output_padding=1")
        );
        // (7 - 1) * 2 - 2 + 4 + 1
        assert_eq!(deconv.output_dims((7, 7)), Some((15, 15)));
    }
}
