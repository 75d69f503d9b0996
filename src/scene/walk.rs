//! Discovery of refinement targets.
//!
//! Walks the container tree depth-first (shapes before nested containers,
//! compound sub-paths in order, stroke before fill on each path) and
//! returns every channel painted with a radial gradient as an ordered batch.
//! Returning the batch, rather than accumulating into shared state, keeps
//! the traversal reusable for partial documents.

use super::{Document, ShapeKind};
use crate::types::{ContainerId, GradientRef, PaintChannel, ShapeId};

/// Collects every radial-gradient channel in the document, in traversal
/// order, ready to be handed to the refiner as one batch.
pub fn collect_radial_gradients(document: &Document) -> Vec<GradientRef> {
    let mut found = Vec::new();
    collect_container(document, document.root(), &mut found);
    found
}

fn collect_container(document: &Document, container: ContainerId, out: &mut Vec<GradientRef>) {
    let Ok(record) = document.container(container) else {
        return;
    };
    for &shape in &record.shapes {
        collect_shape(document, shape, out);
    }
    for &child in &record.children {
        collect_container(document, child, out);
    }
}

fn collect_shape(document: &Document, shape: ShapeId, out: &mut Vec<GradientRef>) {
    let Ok(record) = document.shape(shape) else {
        return;
    };
    match &record.kind {
        ShapeKind::Compound { children } => {
            for &child in children {
                collect_shape(document, child, out);
            }
        }
        ShapeKind::Path { stroke, fill } => {
            if stroke.is_radial() {
                out.push(GradientRef {
                    shape,
                    channel: PaintChannel::Stroke,
                });
            }
            if fill.is_radial() {
                out.push(GradientRef {
                    shape,
                    channel: PaintChannel::Fill,
                });
            }
        }
    }
}
