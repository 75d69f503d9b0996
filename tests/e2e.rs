use origin_refiner::scene::{collect_radial_gradients, Document, Paint};
use origin_refiner::types::PaintChannel;
use origin_refiner::{OriginRefiner, RefineOptions};

#[test]
fn nested_document_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = Document::new();
    let root = doc.root();

    // Root level: a radial fill plus shapes the walk must skip.
    doc.add_path(root, Paint::Solid, Paint::radial(12.3456, -0.4321));
    doc.add_path(root, Paint::Linear, Paint::Solid);
    doc.add_path(root, Paint::None, Paint::None);

    // A group with a radial stroke, and a deeper group holding a compound
    // whose sub-paths carry their own radial fills.
    let group = doc.add_container(root);
    doc.add_path(group, Paint::radial(-7.125, 33.333333), Paint::Solid);
    let inner = doc.add_container(group);
    doc.add_compound(
        inner,
        vec![
            (Paint::Solid, Paint::radial(0.5, -0.5)),
            (Paint::Solid, Paint::radial(-2.71828, 3.14159)),
        ],
    );

    let targets = collect_radial_gradients(&doc);
    assert_eq!(targets.len(), 4, "walk should find every radial channel");
    assert_eq!(
        targets.iter().map(|t| t.channel).collect::<Vec<_>>(),
        vec![
            PaintChannel::Fill,
            PaintChannel::Stroke,
            PaintChannel::Fill,
            PaintChannel::Fill,
        ],
    );

    let truths: Vec<_> = targets
        .iter()
        .map(|t| doc.exact_origin(t.shape, t.channel).unwrap())
        .collect();
    let shapes_before = doc.live_shapes();
    let containers_before = doc.live_containers();

    let refiner = OriginRefiner::new(RefineOptions::new(6));
    let origins = refiner
        .resolve_batch(&mut doc, &targets)
        .expect("consistent host");

    assert_eq!(origins.len(), targets.len());
    for (truth, origin) in truths.iter().zip(&origins) {
        assert!(
            (origin.x - truth.x).abs() < 1e-6 && (origin.y - truth.y).abs() < 1e-6,
            "truth=({}, {}) estimate=({}, {})",
            truth.x,
            truth.y,
            origin.x,
            origin.y
        );
    }

    // The document is back to its pre-refinement shape census.
    assert_eq!(doc.live_shapes(), shapes_before);
    assert_eq!(doc.live_containers(), containers_before);
    for (target, truth) in targets.iter().zip(&truths) {
        assert_eq!(doc.exact_origin(target.shape, target.channel).unwrap(), *truth);
    }
}
