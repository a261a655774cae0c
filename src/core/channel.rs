use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual role a chart mark binds to a data column.
///
/// Variant order is the declared channel order: encodings always iterate
/// `x, y, color, size, shape` regardless of how controls were registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    X,
    Y,
    Color,
    Size,
    Shape,
}

impl Channel {
    pub const ALL: [Self; 5] = [Self::X, Self::Y, Self::Color, Self::Size, Self::Shape];

    /// Channels that get a control when no explicit configuration is given.
    pub const DEFAULT_CONTROLS: [Self; 3] = [Self::X, Self::Y, Self::Color];

    /// Encoding key used by Vega-Lite.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Color => "color",
            Self::Size => "size",
            Self::Shape => "shape",
        }
    }

    /// Label shown next to the channel's column dropdown.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Color => "Color",
            Self::Size => "Size",
            Self::Shape => "Shape",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
