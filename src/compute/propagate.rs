use log::{debug, warn};

use crate::{
    error::{PlannerError, Result},
    layer::factory::Layers,
    model::{model::ModelDesc, shape_record::ShapeRecord},
};

/// Runs the plan layer by layer and returns one record per layer, preceded
/// by the input shape at index 0.
///
/// The batch size is carried through untouched. Degenerate dims (zero or
/// negative) are reported, not rejected; dims that leave the `i64` range
/// are an error.
pub fn propagate(model: &ModelDesc) -> Result<Vec<ShapeRecord>> {
    let batch = model.batch_size;
    let input = model.initial_shape;

    let mut records = Vec::with_capacity(model.num_layers() + 1);
    let mut dims = (
        to_dim("initial width", input.width)?,
        to_dim("initial height", input.height)?,
    );
    records.push(ShapeRecord::new(0, batch, input.channels, dims.0, dims.1));

    for (i, spec) in model.layers.iter().enumerate() {
        let index = i + 1;
        let layer = Layers::from_spec(spec);
        dims = layer
            .output_dims(dims)
            .ok_or(PlannerError::DimOverflow { index })?;

        debug!(
            "layer {}: {} [{}] -> {}x{}",
            index,
            layer.name(),
            layer.config_string().unwrap_or_default(),
            dims.0,
            dims.1
        );
        if dims.0 <= 0 || dims.1 <= 0 {
            warn!(
                "layer {} ({}) produced a non-positive spatial size {}x{}",
                index,
                layer.name(),
                dims.0,
                dims.1
            );
        }

        records.push(ShapeRecord::new(index, batch, layer.out_channels(), dims.0, dims.1));
    }

    Ok(records)
}

fn to_dim(name: &'static str, value: usize) -> Result<i64> {
    i64::try_from(value).map_err(|_| PlannerError::ValueTooLarge { name, value })
}
