/// Spatial extent (width, height) flowing between layers.
pub type SpatialDims = (i64, i64);

pub trait Layer {
    // Width and height after this layer, None if the result overflows i64
    fn output_dims(&self, input: SpatialDims) -> Option<SpatialDims>;

    // Channel count reported for this layer
    fn out_channels(&self) -> usize;

    // Return a string representation of the layers name
    fn name(&self) -> String;

    // Return optional configuration details for the layer
    fn config_string(&self) -> Option<String> {
        None
    }
}
