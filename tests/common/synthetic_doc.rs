use origin_refiner::scene::{Document, Paint, Rounding};
use origin_refiner::types::{GradientRef, PaintChannel};

/// Builds a document with one fill-painted path per origin, returning the
/// refinement targets in insertion order.
pub fn radial_fill_document(origins: &[(f64, f64)]) -> (Document, Vec<GradientRef>) {
    radial_fill_document_with(Rounding::HalfAwayFromZero, origins)
}

pub fn radial_fill_document_with(
    rounding: Rounding,
    origins: &[(f64, f64)],
) -> (Document, Vec<GradientRef>) {
    let mut doc = Document::with_rounding(rounding);
    let root = doc.root();
    let mut targets = Vec::with_capacity(origins.len());
    for &(x, y) in origins {
        let shape = doc.add_path(root, Paint::Solid, Paint::radial(x, y));
        targets.push(GradientRef {
            shape,
            channel: PaintChannel::Fill,
        });
    }
    (doc, targets)
}
