use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a shape inside a host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

/// Identifier of a container (layer or group) inside a host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(pub usize);

/// Which paintable channel of a shape carries a gradient.
///
/// Opaque to the refiner: it is only handed back to the host when the
/// channel's origin is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintChannel {
    Stroke,
    Fill,
}

impl fmt::Display for PaintChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintChannel::Stroke => f.write_str("stroke"),
            PaintChannel::Fill => f.write_str("fill"),
        }
    }
}

/// A `(shape, channel)` pair selected for origin recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientRef {
    pub shape: ShapeId,
    pub channel: PaintChannel,
}
