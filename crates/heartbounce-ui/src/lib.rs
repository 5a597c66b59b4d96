//! egui host for the bouncing heart.

use std::time::Duration;

use heartbounce_core::{EngineConfig, MotionController, Viewport};
use heartbounce_platform::{Result, Scene};
use tracing::info;

mod app;
pub mod controls;
pub mod paint;

pub use app::HeartApp;
pub use controls::Intent;

const INITIAL_WIDTH: f32 = 960.0;
const INITIAL_HEIGHT: f32 = 720.0;

/// Opens the window and blocks until it is closed.
pub fn run_app(config: EngineConfig) -> Result<()> {
    let viewport = Viewport::new(INITIAL_WIDTH, INITIAL_HEIGHT);
    let controller = MotionController::new(config, viewport, Scene::new())?;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Heartbounce")
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        "Heartbounce",
        native_options,
        Box::new(move |creation_context| {
            let now = Duration::from_secs_f64(creation_context.egui_ctx.input(|i| i.time).max(0.0));
            Ok(Box::new(HeartApp::new(controller, now)))
        }),
    )
    .map_err(|err| -> Box<dyn std::error::Error + Send + Sync> {
        format!("eframe failed: {err}").into()
    })?;
    info!("Window closed");
    Ok(())
}
