//! Rounded-readout origin refinement.
//!
//! The `refine` module recovers exact radial-gradient origins from a host
//! that only reports them rounded to the nearest integer:
//!
//! - the handle state keeps the per-gradient search bookkeeping: a sign
//!   factor fixed at the first readout and one shrinking interval per axis.
//! - [`OriginRefiner`] runs the batch driver: it duplicates every target
//!   into a scratch container, then repeatedly perturbs all duplicates,
//!   triggers a single host refresh, and narrows each interval to the half
//!   the fresh readout selects.
//!
//! Each refresh yields one bit of information per axis per handle, so the
//! interval width halves every cycle and `⌈digits · log2 10⌉` cycles reach
//! `digits` correct decimal places. Batching all handles into the shared
//! refresh is what makes the search affordable on hosts where the refresh
//! dominates every other operation.

mod batch;
mod handle;
mod options;
mod types;

pub use batch::OriginRefiner;
pub use options::RefineOptions;
pub use types::{Axis, RefineError};
