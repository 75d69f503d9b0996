use origin_refiner::config::{load_config, RuntimeConfig};
use origin_refiner::scene::{collect_radial_gradients, Document, Paint};
use origin_refiner::{OriginRefiner, PaintChannel};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    // Demo: builds a document from the config fixtures (or a default pair),
    // walks it for radial gradients, and refines the whole batch.
    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => RuntimeConfig::default(),
    };

    let mut doc = Document::new();
    let root = doc.root();
    for fixture in &config.gradients {
        let paint = Paint::radial(fixture.origin[0], fixture.origin[1]);
        match fixture.channel {
            PaintChannel::Stroke => doc.add_path(root, paint, Paint::Solid),
            PaintChannel::Fill => doc.add_path(root, Paint::Solid, paint),
        };
    }
    let targets = collect_radial_gradients(&doc);

    let refiner = OriginRefiner::new(config.refine);
    let origins = match refiner.resolve_batch(&mut doc, &targets) {
        Ok(origins) => origins,
        Err(err) => {
            eprintln!("refinement failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let digits = config.refine.decimal_digits.max(1) as usize;
    for (target, origin) in targets.iter().zip(&origins) {
        println!(
            "shape={:?} {} origin=({:.digits$}, {:.digits$})",
            target.shape, target.channel, origin.x, origin.y
        );
    }

    if let Some(path) = &config.output.json_out {
        let json = match serde_json::to_string_pretty(&origins) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("Failed to serialize origins: {err}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = std::fs::write(path, json) {
            eprintln!("Failed to write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
