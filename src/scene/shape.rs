use crate::types::{PaintChannel, ShapeId};
use nalgebra::Vector2;

/// Paint applied to one channel of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Nothing painted on this channel.
    None,
    /// Flat colour; carries no origin.
    Solid,
    /// Linear gradient; has an axis rather than an origin, never refined.
    Linear,
    /// Radial gradient with its exact origin in document coordinates.
    Radial { origin: Vector2<f64> },
}

impl Paint {
    /// Radial paint centred on `(x, y)`.
    pub fn radial(x: f64, y: f64) -> Self {
        Self::Radial {
            origin: Vector2::new(x, y),
        }
    }

    pub fn is_radial(&self) -> bool {
        matches!(self, Self::Radial { .. })
    }

    pub(crate) fn origin(&self) -> Option<Vector2<f64>> {
        match self {
            Self::Radial { origin } => Some(*origin),
            _ => None,
        }
    }
}

/// Geometry variant of a shape.
#[derive(Clone, Debug)]
pub enum ShapeKind {
    /// A single path with independently painted stroke and fill.
    Path { stroke: Paint, fill: Paint },
    /// A compound of sub-paths transformed as one unit. Paints live on the
    /// sub-paths; origin readouts use the first of them.
    Compound { children: Vec<ShapeId> },
}

/// One shape slot in the document.
#[derive(Clone, Debug)]
pub(crate) struct ShapeRecord {
    pub kind: ShapeKind,
    pub hidden: bool,
    /// Cumulative translation applied so far.
    pub translation: Vector2<f64>,
    /// Translation last materialized by a refresh; readouts use this, so
    /// reads between a translate and the next refresh observe stale state.
    pub materialized: Vector2<f64>,
}

impl ShapeRecord {
    pub(crate) fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            hidden: false,
            translation: Vector2::zeros(),
            materialized: Vector2::zeros(),
        }
    }

    pub(crate) fn paint(&self, channel: PaintChannel) -> Option<Paint> {
        match &self.kind {
            ShapeKind::Path { stroke, fill } => Some(match channel {
                PaintChannel::Stroke => *stroke,
                PaintChannel::Fill => *fill,
            }),
            ShapeKind::Compound { .. } => None,
        }
    }
}
