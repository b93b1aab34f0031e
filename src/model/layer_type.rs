use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerType {
    Conv2D,
    ConvTranspose2D,
    // Unrecognised tag, keeps width and height as they are
    PassThrough(char),
}

impl LayerType {
    pub const CONV_TAG: char = 'c';
    pub const TRANSPOSED_CONV_TAG: char = 't';

    pub fn from_tag(tag: char) -> Self {
        match tag {
            Self::CONV_TAG => LayerType::Conv2D,
            Self::TRANSPOSED_CONV_TAG => LayerType::ConvTranspose2D,
            other => LayerType::PassThrough(other),
        }
    }

    /// Parses a tag string such as `"cctt"`, one layer per character.
    pub fn parse_tags(tags: &str) -> Vec<Self> {
        tags.chars().map(Self::from_tag).collect()
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerType::Conv2D => write!(f, "Conv2D"),
            LayerType::ConvTranspose2D => write!(f, "ConvTranspose2D"),
            LayerType::PassThrough(tag) => write!(f, "PassThrough({:?})", tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_conv_kinds() {
        assert_eq!(LayerType::from_tag('c'), LayerType::Conv2D);
        assert_eq!(LayerType::from_tag('t'), LayerType::ConvTranspose2D);
    }

    #[test]
    fn other_tags_pass_through() {
        assert_eq!(LayerType::from_tag('x'), LayerType::PassThrough('x'));
        // Tags are case sensitive
        assert_eq!(LayerType::from_tag('C'), LayerType::PassThrough('C'));
    }

    #[test]
    fn parse_tags_keeps_order() {
        let parsed = LayerType::parse_tags("ctx");
        assert_eq!(
            parsed,
            vec![
                LayerType::Conv2D,
                LayerType::ConvTranspose2D,
                LayerType::PassThrough('x')
            ]
        );
    }
}
