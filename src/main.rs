//! Headless replay of a scripted drag through the pan engine.
//!
//! Usage: `dragcam [options.toml]`. Pose and gating detail are logged; set
//! `RUST_LOG=debug` to see every drag start decision.

use std::path::Path;
use std::process::ExitCode;

use dragcam::camera::core::CameraUniform;
use dragcam::engine::PanEngine;
use dragcam::input::{EventSource, PointerEvent, PointerProcessor};
use dragcam::options::Options;
use dragcam::picking::{HitTesters, NoHits, ScreenRect, UiLayer};
use dragcam::util::frame_timing::FrameClock;
use glam::Vec2;
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_micros(16_667);
const COAST_FRAMES: usize = 60;

fn load_options() -> Result<Options, dragcam::error::DragCamError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let options = Options::load(Path::new(&path))?;
            log::info!("Loaded options from '{path}'");
            Ok(options)
        }
        None => Ok(Options::default()),
    }
}

/// Press in the middle of the viewport and sweep right and up.
fn scripted_gesture(width: f32, height: f32) -> Vec<PointerEvent> {
    let start = Vec2::new(width, height) * 0.5;
    let mut events = vec![
        PointerEvent::Moved {
            x: start.x,
            y: start.y,
        },
        PointerEvent::Button { pressed: true },
    ];
    for step in 1..=30 {
        let p = start + Vec2::new(12.0, 4.0) * step as f32;
        events.push(PointerEvent::Moved { x: p.x, y: p.y });
    }
    events.push(PointerEvent::Button { pressed: false });
    events
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("Failed to load options: {e}");
            return ExitCode::FAILURE;
        }
    };

    let source = EventSource::new();
    let mut engine = PanEngine::new(&options);
    engine.activate(&source);

    // A toolbar along the bottom edge; presses there never pan.
    let width = options.camera.viewport_width as f32;
    let height = options.camera.viewport_height as f32;
    let mut ui = UiLayer::new();
    let _ = ui.push(ScreenRect::from_origin_size(
        Vec2::ZERO,
        Vec2::new(width, 48.0),
    ));
    let hits = HitTesters::new(&ui, &NoHits);

    let mut processor = PointerProcessor::new();
    let mut now = Instant::now();
    let mut clock = FrameClock::starting_at(now);

    // One raw pointer event per frame, then let the camera settle.
    let gesture = scripted_gesture(width, height);
    let frames = gesture.len() + COAST_FRAMES;
    let mut pending = gesture.into_iter();
    for frame in 0..frames {
        if let Some(raw) = pending.next() {
            for event in processor.handle_event(raw) {
                source.emit(event);
            }
        }

        now += FRAME;
        let dt = clock.tick_at(now);
        let report = engine.frame(dt, hits);
        log::info!(
            "frame {frame:3}: pos {} offset {} gated {}",
            engine.camera().position,
            engine.controller().drag_offset(),
            report.gated
        );
    }

    engine.deactivate();
    let camera = engine.camera();
    let mut uniform = CameraUniform::new();
    uniform.update_view_proj(camera);
    log::info!("final camera position {}", camera.position);
    log::info!(
        "world origin on screen {}",
        camera.world_to_screen(Vec2::ZERO)
    );
    log::debug!(
        "camera uniform ({} bytes): view_proj {:?}",
        bytemuck::bytes_of(&uniform).len(),
        uniform.view_proj
    );
    ExitCode::SUCCESS
}
