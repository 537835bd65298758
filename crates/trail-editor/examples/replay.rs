//! Replay a scripted drag over a network file and log the retraction.
//!
//! ```text
//! RUST_LOG=debug cargo run -p trail-editor --example replay -- network.json [config.json]
//! ```
//!
//! The drag runs end to end along the first trail of the file, then
//! frames tick at 60 Hz until the released path has fully retracted.

use std::env;
use std::fs;
use std::process::ExitCode;

use trail_core::{Extent, parse_network};
use trail_editor::{InputEvent, Lifecycle, ViewerConfig, ViewportController};

const VIEWPORT: Extent = Extent {
    width: 960.0,
    height: 500.0,
};
const FRAME_MS: f64 = 1000.0 / 60.0;
const MAX_FRAMES: usize = 600;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(network_path) = args.get(1) else {
        eprintln!("usage: replay <network.json> [config.json]");
        return ExitCode::FAILURE;
    };

    match run(network_path, args.get(2).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("replay failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(network_path: &str, config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => ViewerConfig::from_json(&fs::read_to_string(path)?)?,
        None => ViewerConfig::default(),
    };
    let network = parse_network(&fs::read_to_string(network_path)?)?;
    let network = config.prepare_network(network)?;

    let Some((first, last)) = network
        .trails()
        .next()
        .and_then(|t| Some((*t.locations.first()?, *t.locations.last()?)))
    else {
        return Err("network has no trails".into());
    };

    let mut controller = ViewportController::new(network, VIEWPORT, &config)?;
    let from = controller.mapping().to_viewport(first);
    let to = controller.mapping().to_viewport(last);

    for event in [
        InputEvent::PointerMove { x: from.x, y: from.y },
        InputEvent::PointerDown { x: from.x, y: from.y },
        InputEvent::PointerMove { x: to.x, y: to.y },
        InputEvent::PointerUp,
    ] {
        controller.handle(&event)?;
    }

    let Some(entry) = controller.exiting().entries().first() else {
        log::warn!("release committed nothing");
        return Ok(());
    };
    log::info!("released path #{} of length {:.2}", entry.id, entry.path.length);

    for frame in 0..MAX_FRAMES {
        let timestamp_ms = frame as f64 * FRAME_MS;
        controller.handle(&InputEvent::AnimationFrame { timestamp_ms })?;
        let entry = &controller.exiting().entries()[0];
        log::info!(
            "frame {frame:>3} t={timestamp_ms:>7.1}ms length={:.2}",
            entry.path.length
        );
        if entry.lifecycle == Lifecycle::PendingRemoval {
            println!("retracted after {frame} frames ({timestamp_ms:.1} ms)");
            controller.handle(&InputEvent::PointerUp)?;
            log::info!("flushed, {} entries left", controller.exiting().len());
            return Ok(());
        }
    }
    Err(format!("path still active after {MAX_FRAMES} frames").into())
}
