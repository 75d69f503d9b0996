//! Contract between the refiner and the document host.
//!
//! The refiner never touches document structure directly; everything it
//! needs from the host (duplication into a scratch container, rigid
//! translation, rounded origin readouts, and the refresh barrier that makes
//! those readouts trustworthy) goes through [`Host`]. This is the only seam
//! in the crate: production adapters wrap a real document API, while tests
//! drive the refiner with synthetic hosts that misround or miscount on
//! purpose.
//!
//! Readout semantics the refiner relies on:
//!
//! - [`Host::read_origin`] returns the gradient origin rounded to the
//!   nearest integer. The tie direction at exact half-units is the host's
//!   choice but must stay the same across calls.
//! - Readouts are only accurate after [`Host::refresh`]; reads taken between
//!   a [`Host::translate`] and the next refresh may reflect stale state.

use crate::types::{ContainerId, PaintChannel, ShapeId};
use nalgebra::Vector2;
use thiserror::Error;

/// Failures of individual host operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("unknown shape {0:?}")]
    UnknownShape(ShapeId),
    #[error("unknown container {0:?}")]
    UnknownContainer(ContainerId),
    #[error("shape {shape:?} carries no radial gradient on its {channel} channel")]
    MissingGradient {
        shape: ShapeId,
        channel: PaintChannel,
    },
    #[error("compound shape {0:?} has no sub-paths")]
    EmptyCompound(ShapeId),
}

/// Document-side operations the refiner drives.
pub trait Host {
    /// Creates an isolated container for working duplicates.
    fn create_scratch_container(&mut self) -> Result<ContainerId, HostError>;

    /// Destroys a scratch container and everything inside it.
    fn destroy_scratch_container(&mut self, container: ContainerId) -> Result<(), HostError>;

    /// Deep-copies `shape` into `destination`. The copy is independent:
    /// mutating it must not affect the original.
    fn duplicate(&mut self, shape: ShapeId, destination: ContainerId)
        -> Result<ShapeId, HostError>;

    /// Toggles visibility so working duplicates never render.
    fn set_hidden(&mut self, shape: ShapeId, hidden: bool) -> Result<(), HostError>;

    /// Shape the rounded origin should be read from: the shape itself for a
    /// plain path, its first sub-path for a compound.
    fn readout_shape(&self, shape: ShapeId) -> Result<ShapeId, HostError>;

    /// Applies a rigid displacement to `shape` (and, transitively, to its
    /// gradient origins) in document coordinates.
    fn translate(&mut self, shape: ShapeId, delta: Vector2<f64>) -> Result<(), HostError>;

    /// Returns the channel's gradient origin rounded to the nearest integer.
    /// Only accurate after a [`Host::refresh`].
    fn read_origin(&self, shape: ShapeId, channel: PaintChannel)
        -> Result<Vector2<i64>, HostError>;

    /// Blocks until pending geometric changes are materialized. Side-effect
    /// free on document content.
    fn refresh(&mut self);
}
