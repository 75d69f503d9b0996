#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod host;
pub mod refine;
pub mod scene;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry point: refiner + options + batch error.
pub use crate::refine::{OriginRefiner, RefineError, RefineOptions};

// Host-side contract the refiner drives.
pub use crate::host::{Host, HostError};

// Shared identifiers and batch-construction types.
pub use crate::types::{GradientRef, PaintChannel};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use origin_refiner::prelude::*;
///
/// let mut doc = Document::new();
/// let root = doc.root();
/// doc.add_path(root, Paint::Solid, Paint::radial(-0.75, 12.0625));
///
/// let targets = collect_radial_gradients(&doc);
/// let refiner = OriginRefiner::new(RefineOptions { decimal_digits: 6 });
/// let origins = refiner.resolve_batch(&mut doc, &targets).expect("consistent host");
/// assert!((origins[0].x - (-0.75)).abs() < 1e-6);
/// ```
pub mod prelude {
    pub use crate::host::Host;
    pub use crate::scene::{collect_radial_gradients, Document, Paint};
    pub use crate::types::{GradientRef, PaintChannel};
    pub use crate::{OriginRefiner, RefineOptions};
}
