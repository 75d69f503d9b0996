//! Batch driver for rounded-readout origin refinement.
//!
//! All handles advance through the same halving schedule, so one host
//! refresh per cycle serves the entire batch. The loop body is the cheap
//! part; the refresh is the operation worth amortizing.

use super::handle::{AxisState, Handle};
use super::options::RefineOptions;
use super::types::{Axis, RefineError};
use crate::host::Host;
use crate::types::{ContainerId, GradientRef};
use log::{debug, warn};
use nalgebra::{Point2, Vector2};
use std::time::Instant;

/// Recovers exact radial-gradient origins from integer-rounded readouts.
pub struct OriginRefiner {
    options: RefineOptions,
}

impl OriginRefiner {
    pub fn new(options: RefineOptions) -> Self {
        Self { options }
    }

    pub fn set_decimal_digits(&mut self, digits: u32) {
        self.options.decimal_digits = digits.max(1);
    }

    /// Resolves a single gradient origin; delegates to [`Self::resolve_batch`].
    pub fn resolve<H: Host>(
        &self,
        host: &mut H,
        gradient: GradientRef,
    ) -> Result<Point2<f64>, RefineError> {
        let origins = self.resolve_batch(host, &[gradient])?;
        Ok(origins[0])
    }

    /// Resolves a batch of gradient origins, one host refresh per cycle.
    ///
    /// Returns one estimate per input, in input order. On any failure the
    /// whole batch is discarded; the scratch container and every working
    /// duplicate are destroyed on both paths.
    pub fn resolve_batch<H: Host>(
        &self,
        host: &mut H,
        gradients: &[GradientRef],
    ) -> Result<Vec<Point2<f64>>, RefineError> {
        if gradients.is_empty() {
            return Ok(Vec::new());
        }
        let t0 = Instant::now();
        let scratch = host.create_scratch_container()?;
        let result = self.run_batch(host, scratch, gradients);
        // Cleanup happens on every exit path; an aborted batch must not
        // leak host-visible state.
        if let Err(err) = host.destroy_scratch_container(scratch) {
            warn!("OriginRefiner::resolve_batch scratch cleanup failed: {err}");
        }
        host.refresh();
        match &result {
            Ok(origins) => debug!(
                "OriginRefiner::resolve_batch resolved {} origin(s) to {} digit(s) in {:.3} ms",
                origins.len(),
                self.options.decimal_digits.max(1),
                t0.elapsed().as_secs_f64() * 1000.0
            ),
            Err(err) => warn!("OriginRefiner::resolve_batch aborted: {err}"),
        }
        result
    }

    fn run_batch<H: Host>(
        &self,
        host: &mut H,
        scratch: ContainerId,
        gradients: &[GradientRef],
    ) -> Result<Vec<Point2<f64>>, RefineError> {
        let mut handles = init_handles(host, scratch, gradients)?;

        let threshold = self.options.threshold();
        let mut range = 1.0f64;
        let mut cycle = 0usize;
        while range > threshold {
            for handle in &mut handles {
                let dx = handle.x.recenter();
                let dy = handle.y.recenter();
                host.translate(
                    handle.working,
                    Vector2::new(handle.x.denormalize(dx), handle.y.denormalize(dy)),
                )?;
            }
            // Readouts are only trustworthy once the host has materialized
            // the pending translations.
            host.refresh();
            for handle in &mut handles {
                let reading = host.read_origin(handle.probe, handle.channel)?;
                narrow_axis(&mut handle.x, Axis::X, reading.x, cycle)?;
                narrow_axis(&mut handle.y, Axis::Y, reading.y, cycle)?;
            }
            range *= 0.5;
            cycle += 1;
            debug!("OriginRefiner::resolve_batch cycle={cycle} range={range:e}");
        }

        let mut origins = Vec::with_capacity(handles.len());
        for handle in &handles {
            let origin = Point2::new(handle.x.resolve(), handle.y.resolve());
            debug!(
                "OriginRefiner::resolve_batch source={:?} {} origin=({}, {})",
                handle.source, handle.channel, origin.x, origin.y
            );
            origins.push(origin);
        }
        Ok(origins)
    }
}

fn init_handles<H: Host>(
    host: &mut H,
    scratch: ContainerId,
    gradients: &[GradientRef],
) -> Result<Vec<Handle>, RefineError> {
    let mut staged = Vec::with_capacity(gradients.len());
    for gradient in gradients {
        let working = host.duplicate(gradient.shape, scratch)?;
        host.set_hidden(working, true)?;
        let probe = host.readout_shape(working)?;
        staged.push((gradient, working, probe));
    }
    // One refresh so the initial readouts observe the fresh duplicates.
    host.refresh();

    let mut handles = Vec::with_capacity(staged.len());
    for (gradient, working, probe) in staged {
        let reading = host.read_origin(probe, gradient.channel)?;
        handles.push(Handle {
            source: gradient.shape,
            working,
            probe,
            channel: gradient.channel,
            x: AxisState::from_reading(reading.x),
            y: AxisState::from_reading(reading.y),
        });
    }
    Ok(handles)
}

fn narrow_axis(
    state: &mut AxisState,
    axis: Axis,
    reading: i64,
    cycle: usize,
) -> Result<(), RefineError> {
    state.narrow(reading).map_err(|observed| {
        RefineError::InconsistentReadout {
            axis,
            observed,
            cycle,
        }
    })
}
