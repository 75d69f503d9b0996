//! Per-gradient search state.
//!
//! A readout of `r` under nearest-integer rounding (ties away from zero)
//! pins the sign-normalized coordinate `t` to `t + 1/2 ∈ [r, r+1)`. The
//! interval tracked here therefore brackets the half-offset value `t + 1/2`,
//! whose floor is exactly the normalized readout. That is what makes the
//! width-1 interval `[r, r+1]` the correct starting point and lets every
//! iteration reuse the same two-branch comparison against a fixed integer
//! anchor. The half-unit offset is removed once, when the converged interval
//! is mapped back into the source frame.
//!
//! Recentring moves the *interval* onto the anchor and applies the opposite
//! displacement to the *shape*, so the bracketed value slides toward the
//! anchor while the anchor itself never moves. A tie at an interval endpoint
//! only decides which half keeps the shared endpoint, so the bracketing
//! invariant survives either tie direction.

use crate::types::{PaintChannel, ShapeId};

/// Integer anchor the interval is recentred on before every perturbation.
pub(crate) const CENTER: i64 = 1;

/// Offset between the bracketed value and the coordinate it stands for.
const HALF_UNIT: f64 = 0.5;

/// Binary-search state for one coordinate axis.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AxisState {
    /// Sign-normalization factor, fixed at initialization (`+1` at zero).
    sign: i64,
    /// Lower bound on the half-offset normalized coordinate.
    lower: f64,
    /// Upper bound; `upper - lower` is the shared batch-wide range.
    upper: f64,
    /// Net normalized shift applied to the working shape so far.
    shift: f64,
}

impl AxisState {
    /// Builds the width-1 interval implied by the initial readout.
    pub(crate) fn from_reading(reading: i64) -> Self {
        let sign = if reading < 0 { -1 } else { 1 };
        let magnitude = (sign * reading) as f64;
        Self {
            sign,
            lower: magnitude,
            upper: magnitude + 1.0,
            shift: 0.0,
        }
    }

    /// Recentres the interval on [`CENTER`] and returns the normalized shift
    /// the caller must also apply to the working shape.
    pub(crate) fn recenter(&mut self) -> f64 {
        let diff = CENTER as f64 - 0.5 * (self.upper + self.lower);
        self.lower += diff;
        self.upper += diff;
        self.shift += diff;
        diff
    }

    /// Physical displacement corresponding to a normalized one.
    pub(crate) fn denormalize(&self, value: f64) -> f64 {
        self.sign as f64 * value
    }

    /// Narrows the interval to the half a fresh readout selects.
    ///
    /// `Err` carries the normalized readout when it is neither of the two
    /// values the current interval predicts.
    pub(crate) fn narrow(&mut self, reading: i64) -> Result<(), i64> {
        let normalized = self.sign * reading;
        if normalized == CENTER {
            self.lower = CENTER as f64;
            Ok(())
        } else if normalized == CENTER - 1 {
            self.upper = CENTER as f64;
            Ok(())
        } else {
            Err(normalized)
        }
    }

    /// Maps the converged lower bound back into the source frame, undoing
    /// the accumulated shifts, the half-unit offset, and the sign factor.
    pub(crate) fn resolve(&self) -> f64 {
        self.sign as f64 * (self.lower - self.shift - HALF_UNIT)
    }
}

/// Working state for one gradient in a refinement batch.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Handle {
    /// Original shape; never mutated, kept for reporting.
    pub source: ShapeId,
    /// Hidden duplicate receiving all perturbations.
    pub working: ShapeId,
    /// Shape the rounded origin is read from: the duplicate itself, or its
    /// first sub-path when the duplicate is a compound.
    pub probe: ShapeId,
    pub channel: PaintChannel,
    pub x: AxisState,
    pub y: AxisState,
}

#[cfg(test)]
mod tests {
    use super::{AxisState, CENTER};

    #[test]
    fn sign_factor_follows_initial_reading() {
        let positive = AxisState::from_reading(3);
        assert_eq!(positive.sign, 1);
        assert_eq!((positive.lower, positive.upper), (3.0, 4.0));

        let negative = AxisState::from_reading(-3);
        assert_eq!(negative.sign, -1);
        assert_eq!((negative.lower, negative.upper), (3.0, 4.0));

        let zero = AxisState::from_reading(0);
        assert_eq!(zero.sign, 1, "zero reads default to the positive factor");
        assert_eq!((zero.lower, zero.upper), (0.0, 1.0));
    }

    #[test]
    fn recenter_moves_interval_onto_anchor() {
        let mut axis = AxisState::from_reading(3);
        let diff = axis.recenter();
        assert_eq!(diff, -2.5);
        assert_eq!((axis.lower, axis.upper), (0.5, 1.5));
        assert_eq!(axis.shift, -2.5);
    }

    #[test]
    fn narrow_keeps_the_selected_half() {
        let mut axis = AxisState::from_reading(3);
        axis.recenter();

        let mut upper_half = axis;
        upper_half.narrow(CENTER).expect("predicted readout");
        assert_eq!((upper_half.lower, upper_half.upper), (1.0, 1.5));

        let mut lower_half = axis;
        lower_half.narrow(CENTER - 1).expect("predicted readout");
        assert_eq!((lower_half.lower, lower_half.upper), (0.5, 1.0));

        let mut broken = axis;
        assert_eq!(broken.narrow(5), Err(5));
    }

    #[test]
    fn axis_search_recovers_scalar_against_rounding_oracle() {
        // Drive a single axis against a plain f64 oracle, no host involved.
        let round = |v: f64| -> i64 {
            if v >= 0.0 {
                (v + 0.5).floor() as i64
            } else {
                -((-v + 0.5).floor() as i64)
            }
        };
        for &truth in &[3.14159f64, -2.71828, 0.4, -0.4, 2.5, -0.50001, 123.456789] {
            let mut value = truth;
            let mut axis = AxisState::from_reading(round(value));
            let mut range = 1.0f64;
            while range > 1e-9 {
                let diff = axis.recenter();
                value += axis.denormalize(diff);
                axis.narrow(round(value)).expect("consistent oracle");
                range *= 0.5;
            }
            let estimate = axis.resolve();
            assert!(
                (estimate - truth).abs() < 1e-9,
                "truth={truth} estimate={estimate}"
            );
        }
    }
}
