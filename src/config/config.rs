use log::{info, warn};

use crate::{
    error::{PlannerError, Result},
    model::{
        layer_shape::LayerShape,
        layer_spec::LayerSpec,
        layer_type::LayerType,
        model::{InputShape, ModelDesc},
    },
};

/// Raw planner input: parallel per-layer arrays as they come from the
/// command line or a config file.
///
/// `hidden_dims` sets the number of layers. The four hyperparameter arrays
/// hold either one value (used for every layer) or one value per layer.
/// Nothing is checked until [`PlannerConfig::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    pub batch_size: usize,
    pub initial_dims: Vec<usize>,
    pub hidden_dims: Vec<usize>,
    pub stride: Vec<usize>,
    pub padding: Vec<usize>,
    pub kernel_size: Vec<usize>,
    pub output_padding: Vec<usize>,
    pub layers: String,
    // Reject a tag string shorter than hidden_dims instead of truncating
    pub strict_layers: bool,
}

impl PlannerConfig {
    pub fn build(self) -> Result<ModelDesc> {
        if self.batch_size == 0 {
            return Err(PlannerError::NonPositive("batch size"));
        }
        let initial_shape = check_initial_dims(&self.initial_dims)?;

        let n = self.hidden_dims.len();
        let stride = broadcast("stride", &self.stride, n)?;
        let padding = broadcast("padding", &self.padding, n)?;
        let kernel_size = broadcast("kernel size", &self.kernel_size, n)?;
        let output_padding = broadcast("output padding", &self.output_padding, n)?;
        for (name, values) in [
            ("stride", &stride),
            ("padding", &padding),
            ("kernel size", &kernel_size),
            ("output padding", &output_padding),
        ] {
            check_fits_i64(name, values)?;
        }

        let tags = LayerType::parse_tags(&self.layers);
        if tags.len() < n {
            if self.strict_layers {
                return Err(PlannerError::LayerTagsTooShort {
                    tags: self.layers,
                    available: tags.len(),
                    expected: n,
                });
            }
            warn!(
                "layer tags \"{}\" cover only {} of {} hidden dims, dropping the last {}",
                self.layers,
                tags.len(),
                n,
                n - tags.len()
            );
        }

        let layers: Vec<LayerSpec> = tags
            .into_iter()
            .zip(self.hidden_dims)
            .enumerate()
            .map(|(i, (layer_type, out_channels))| {
                LayerSpec::new(
                    layer_type,
                    LayerShape::new_with(
                        out_channels,
                        kernel_size[i],
                        stride[i],
                        padding[i],
                        output_padding[i],
                    ),
                )
            })
            .collect();

        if let Some(pos) = layers
            .iter()
            .position(|l| l.layer_type == LayerType::Conv2D && l.shape.stride == 0)
        {
            return Err(PlannerError::ZeroStride { index: pos + 1 });
        }

        info!(
            "built plan: batch={}, input={:?}, {} layers",
            self.batch_size,
            initial_shape,
            layers.len()
        );

        Ok(ModelDesc::new_with(self.batch_size, initial_shape, layers))
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            batch_size: 1,
            initial_dims: vec![1, 28, 28],
            hidden_dims: vec![32, 64, 128, 256],
            stride: vec![2],
            padding: vec![1],
            kernel_size: vec![3],
            output_padding: vec![0],
            layers: "cccc".to_string(),
            strict_layers: false,
        }
    }
}

/// Expands a per-layer parameter to `n` values. A single value is
/// repeated; `n` values are kept; anything else is an error.
pub fn broadcast(name: &'static str, values: &[usize], n: usize) -> Result<Vec<usize>> {
    match values.len() {
        1 => Ok(vec![values[0]; n]),
        len if len == n => Ok(values.to_vec()),
        len => Err(PlannerError::BroadcastMismatch {
            name,
            len,
            expected: n,
        }),
    }
}

fn check_initial_dims(dims: &[usize]) -> Result<InputShape> {
    let &[channels, width, height] = dims else {
        return Err(PlannerError::InitialDims(dims.len()));
    };
    if channels == 0 || width == 0 || height == 0 {
        return Err(PlannerError::NonPositive("initial dims"));
    }
    check_fits_i64("initial dims", &[width, height])?;
    Ok(InputShape::new(channels, width, height))
}

// Spatial arithmetic runs in i64
fn check_fits_i64(name: &'static str, values: &[usize]) -> Result<()> {
    match values.iter().find(|&&v| i64::try_from(v).is_err()) {
        Some(&value) => Err(PlannerError::ValueTooLarge { name, value }),
        None => Ok(()),
    }
}
