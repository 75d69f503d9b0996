//! In-memory document model.
//!
//! [`Document`] is the reference [`Host`] implementation: a container tree
//! holding paths and compound shapes whose gradient origins are stored
//! exactly, but only ever read out rounded to the nearest integer, and only
//! as of the last [`Host::refresh`]. Translations accumulate immediately in
//! the exact state while readouts keep serving the previously materialized
//! state, which reproduces the refresh-gated readout behaviour of real
//! document hosts.
//!
//! The rounding tie direction is selectable via [`Rounding`] so callers can
//! verify behaviour against either convention.

use crate::host::{Host, HostError};
use crate::types::{ContainerId, PaintChannel, ShapeId};
use nalgebra::Vector2;

mod shape;
mod walk;

pub use shape::{Paint, ShapeKind};
pub use walk::collect_radial_gradients;

use shape::ShapeRecord;

/// Integer rounding rule applied by origin readouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Nearest integer, ties away from zero.
    #[default]
    HalfAwayFromZero,
    /// Nearest integer, ties toward zero.
    HalfTowardZero,
}

impl Rounding {
    fn apply(self, value: f64) -> i64 {
        match self {
            Rounding::HalfAwayFromZero => value.round() as i64,
            Rounding::HalfTowardZero => {
                if (value - value.trunc()).abs() == 0.5 {
                    value.trunc() as i64
                } else {
                    value.round() as i64
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
struct ContainerRecord {
    parent: Option<ContainerId>,
    shapes: Vec<ShapeId>,
    children: Vec<ContainerId>,
}

/// In-memory document: a container tree with rounding readouts.
#[derive(Clone, Debug)]
pub struct Document {
    shapes: Vec<Option<ShapeRecord>>,
    containers: Vec<Option<ContainerRecord>>,
    rounding: Rounding,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with a root container and half-away-from-zero readouts.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            containers: vec![Some(ContainerRecord {
                parent: None,
                shapes: Vec::new(),
                children: Vec::new(),
            })],
            rounding: Rounding::default(),
        }
    }

    /// Empty document with the given readout tie direction.
    pub fn with_rounding(rounding: Rounding) -> Self {
        let mut doc = Self::new();
        doc.rounding = rounding;
        doc
    }

    pub fn root(&self) -> ContainerId {
        ContainerId(0)
    }

    /// Adds a nested container. Panics if `parent` is not alive.
    pub fn add_container(&mut self, parent: ContainerId) -> ContainerId {
        let id = ContainerId(self.containers.len());
        self.containers.push(Some(ContainerRecord {
            parent: Some(parent),
            shapes: Vec::new(),
            children: Vec::new(),
        }));
        self.container_mut(parent)
            .expect("parent container is alive")
            .children
            .push(id);
        id
    }

    /// Adds a path shape. Panics if `container` is not alive.
    pub fn add_path(&mut self, container: ContainerId, stroke: Paint, fill: Paint) -> ShapeId {
        let id = self.alloc_shape(ShapeRecord::new(ShapeKind::Path { stroke, fill }));
        self.container_mut(container)
            .expect("container is alive")
            .shapes
            .push(id);
        id
    }

    /// Adds a compound shape whose sub-paths carry the given paints, in
    /// order. Panics if `container` is not alive.
    pub fn add_compound(
        &mut self,
        container: ContainerId,
        sub_paths: Vec<(Paint, Paint)>,
    ) -> ShapeId {
        let children = sub_paths
            .into_iter()
            .map(|(stroke, fill)| self.alloc_shape(ShapeRecord::new(ShapeKind::Path { stroke, fill })))
            .collect();
        let id = self.alloc_shape(ShapeRecord::new(ShapeKind::Compound { children }));
        self.container_mut(container)
            .expect("container is alive")
            .shapes
            .push(id);
        id
    }

    /// Exact current origin of a channel, unrounded and ignoring any pending
    /// refresh. Ground truth for tests and demos.
    pub fn exact_origin(
        &self,
        shape: ShapeId,
        channel: PaintChannel,
    ) -> Result<Vector2<f64>, HostError> {
        let record = self.shape(shape)?;
        let base = record
            .paint(channel)
            .and_then(|paint| paint.origin())
            .ok_or(HostError::MissingGradient { shape, channel })?;
        Ok(base + record.translation)
    }

    pub fn is_hidden(&self, shape: ShapeId) -> Result<bool, HostError> {
        Ok(self.shape(shape)?.hidden)
    }

    /// Number of live shapes, compound sub-paths included.
    pub fn live_shapes(&self) -> usize {
        self.shapes.iter().flatten().count()
    }

    pub fn live_containers(&self) -> usize {
        self.containers.iter().flatten().count()
    }

    fn alloc_shape(&mut self, record: ShapeRecord) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        self.shapes.push(Some(record));
        id
    }

    fn shape(&self, id: ShapeId) -> Result<&ShapeRecord, HostError> {
        self.shapes
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(HostError::UnknownShape(id))
    }

    fn shape_mut(&mut self, id: ShapeId) -> Result<&mut ShapeRecord, HostError> {
        self.shapes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(HostError::UnknownShape(id))
    }

    fn container(&self, id: ContainerId) -> Result<&ContainerRecord, HostError> {
        self.containers
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(HostError::UnknownContainer(id))
    }

    fn container_mut(&mut self, id: ContainerId) -> Result<&mut ContainerRecord, HostError> {
        self.containers
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(HostError::UnknownContainer(id))
    }

    fn clone_shape(&mut self, shape: ShapeId) -> Result<ShapeId, HostError> {
        let record = self.shape(shape)?.clone();
        let kind = match record.kind {
            ShapeKind::Path { .. } => record.kind,
            ShapeKind::Compound { children } => {
                let mut copies = Vec::with_capacity(children.len());
                for child in children {
                    copies.push(self.clone_shape(child)?);
                }
                ShapeKind::Compound { children: copies }
            }
        };
        Ok(self.alloc_shape(ShapeRecord {
            kind,
            hidden: record.hidden,
            translation: record.translation,
            materialized: record.materialized,
        }))
    }

    fn remove_shape(&mut self, shape: ShapeId) {
        let Some(record) = self.shapes.get_mut(shape.0).and_then(Option::take) else {
            return;
        };
        if let ShapeKind::Compound { children } = record.kind {
            for child in children {
                self.remove_shape(child);
            }
        }
    }

    fn remove_container(&mut self, container: ContainerId) -> Result<(), HostError> {
        let record = self
            .containers
            .get_mut(container.0)
            .and_then(Option::take)
            .ok_or(HostError::UnknownContainer(container))?;
        if let Some(parent) = record.parent {
            if let Some(parent_record) = self.containers.get_mut(parent.0).and_then(Option::as_mut)
            {
                parent_record.children.retain(|child| *child != container);
            }
        }
        for shape in record.shapes {
            self.remove_shape(shape);
        }
        for child in record.children {
            self.remove_container(child)?;
        }
        Ok(())
    }

    fn translate_shape(&mut self, shape: ShapeId, delta: Vector2<f64>) -> Result<(), HostError> {
        let children = match &self.shape(shape)?.kind {
            ShapeKind::Compound { children } => children.clone(),
            ShapeKind::Path { .. } => Vec::new(),
        };
        self.shape_mut(shape)?.translation += delta;
        for child in children {
            self.translate_shape(child, delta)?;
        }
        Ok(())
    }
}

impl Host for Document {
    fn create_scratch_container(&mut self) -> Result<ContainerId, HostError> {
        Ok(self.add_container(self.root()))
    }

    fn destroy_scratch_container(&mut self, container: ContainerId) -> Result<(), HostError> {
        self.remove_container(container)
    }

    fn duplicate(
        &mut self,
        shape: ShapeId,
        destination: ContainerId,
    ) -> Result<ShapeId, HostError> {
        self.container(destination)?;
        let copy = self.clone_shape(shape)?;
        self.container_mut(destination)?.shapes.push(copy);
        Ok(copy)
    }

    fn set_hidden(&mut self, shape: ShapeId, hidden: bool) -> Result<(), HostError> {
        self.shape_mut(shape)?.hidden = hidden;
        Ok(())
    }

    fn readout_shape(&self, shape: ShapeId) -> Result<ShapeId, HostError> {
        match &self.shape(shape)?.kind {
            ShapeKind::Path { .. } => Ok(shape),
            ShapeKind::Compound { children } => children
                .first()
                .copied()
                .ok_or(HostError::EmptyCompound(shape)),
        }
    }

    fn translate(&mut self, shape: ShapeId, delta: Vector2<f64>) -> Result<(), HostError> {
        self.translate_shape(shape, delta)
    }

    fn read_origin(
        &self,
        shape: ShapeId,
        channel: PaintChannel,
    ) -> Result<Vector2<i64>, HostError> {
        let record = self.shape(shape)?;
        let base = record
            .paint(channel)
            .and_then(|paint| paint.origin())
            .ok_or(HostError::MissingGradient { shape, channel })?;
        let visible = base + record.materialized;
        Ok(Vector2::new(
            self.rounding.apply(visible.x),
            self.rounding.apply(visible.y),
        ))
    }

    fn refresh(&mut self) {
        for record in self.shapes.iter_mut().flatten() {
            record.materialized = record.translation;
        }
    }
}
