use nalgebra::Vector2;
use origin_refiner::host::{Host, HostError};
use origin_refiner::scene::Document;
use origin_refiner::types::{ContainerId, PaintChannel, ShapeId};
use std::cell::Cell;

/// Forwards to a [`Document`] while counting refresh calls.
pub struct CountingHost<'a> {
    pub inner: &'a mut Document,
    pub refreshes: usize,
}

impl<'a> CountingHost<'a> {
    pub fn new(inner: &'a mut Document) -> Self {
        Self {
            inner,
            refreshes: 0,
        }
    }
}

impl Host for CountingHost<'_> {
    fn create_scratch_container(&mut self) -> Result<ContainerId, HostError> {
        self.inner.create_scratch_container()
    }

    fn destroy_scratch_container(&mut self, container: ContainerId) -> Result<(), HostError> {
        self.inner.destroy_scratch_container(container)
    }

    fn duplicate(
        &mut self,
        shape: ShapeId,
        destination: ContainerId,
    ) -> Result<ShapeId, HostError> {
        self.inner.duplicate(shape, destination)
    }

    fn set_hidden(&mut self, shape: ShapeId, hidden: bool) -> Result<(), HostError> {
        self.inner.set_hidden(shape, hidden)
    }

    fn readout_shape(&self, shape: ShapeId) -> Result<ShapeId, HostError> {
        self.inner.readout_shape(shape)
    }

    fn translate(&mut self, shape: ShapeId, delta: Vector2<f64>) -> Result<(), HostError> {
        self.inner.translate(shape, delta)
    }

    fn read_origin(
        &self,
        shape: ShapeId,
        channel: PaintChannel,
    ) -> Result<Vector2<i64>, HostError> {
        self.inner.read_origin(shape, channel)
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
        self.inner.refresh();
    }
}

/// Forwards to a [`Document`] but corrupts the x readout once a configured
/// number of reads have been served, simulating a host whose rounding stops
/// matching the refiner's prediction mid-batch.
pub struct SkewedHost<'a> {
    inner: &'a mut Document,
    reads: Cell<usize>,
    honest_reads: usize,
}

impl<'a> SkewedHost<'a> {
    pub fn new(inner: &'a mut Document, honest_reads: usize) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
            honest_reads,
        }
    }
}

impl Host for SkewedHost<'_> {
    fn create_scratch_container(&mut self) -> Result<ContainerId, HostError> {
        self.inner.create_scratch_container()
    }

    fn destroy_scratch_container(&mut self, container: ContainerId) -> Result<(), HostError> {
        self.inner.destroy_scratch_container(container)
    }

    fn duplicate(
        &mut self,
        shape: ShapeId,
        destination: ContainerId,
    ) -> Result<ShapeId, HostError> {
        self.inner.duplicate(shape, destination)
    }

    fn set_hidden(&mut self, shape: ShapeId, hidden: bool) -> Result<(), HostError> {
        self.inner.set_hidden(shape, hidden)
    }

    fn readout_shape(&self, shape: ShapeId) -> Result<ShapeId, HostError> {
        self.inner.readout_shape(shape)
    }

    fn translate(&mut self, shape: ShapeId, delta: Vector2<f64>) -> Result<(), HostError> {
        self.inner.translate(shape, delta)
    }

    fn read_origin(
        &self,
        shape: ShapeId,
        channel: PaintChannel,
    ) -> Result<Vector2<i64>, HostError> {
        let reading = self.inner.read_origin(shape, channel)?;
        let reads = self.reads.get() + 1;
        self.reads.set(reads);
        if reads > self.honest_reads {
            return Ok(reading + Vector2::new(7, 0));
        }
        Ok(reading)
    }

    fn refresh(&mut self) {
        self.inner.refresh();
    }
}
