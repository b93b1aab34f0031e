/// Shape snapshot after a layer. Index 0 is the input itself.
///
/// Width and height are signed: a misconfigured layer can drive them to
/// zero or below and the value is reported as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeRecord {
    pub index: usize,
    pub batch: usize,
    pub channels: usize,
    pub width: i64,
    pub height: i64,
}

impl ShapeRecord {
    pub fn new(index: usize, batch: usize, channels: usize, width: i64, height: i64) -> Self {
        Self {
            index,
            batch,
            channels,
            width,
            height,
        }
    }

    pub fn spatial(&self) -> (i64, i64) {
        (self.width, self.height)
    }
}
