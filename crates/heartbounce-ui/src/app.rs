use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use egui::{Color32, Pos2, Response};
use heartbounce_core::{FrameLoop, MotionController};
use heartbounce_platform::Scene;
use tracing::{debug, info, warn};

use crate::controls::{intent_channel, ControlPanel, Intent};
use crate::paint::paint_scene;

const BACKGROUND: Color32 = Color32::from_rgb(26, 16, 34);

pub struct HeartApp {
    controller: MotionController<Scene>,
    frame_loop: FrameLoop,
    controls: ControlPanel,
    intent_sender: Sender<Intent>,
    intent_receiver: Receiver<Intent>,
}

impl HeartApp {
    pub fn new(controller: MotionController<Scene>, now: Duration) -> Self {
        let (intent_sender, intent_receiver) = intent_channel();
        let controls = ControlPanel::new(
            controller.speed(),
            controller.trail().is_enabled(),
            intent_sender.clone(),
        );
        let mut frame_loop = FrameLoop::new();
        frame_loop.start(now);
        Self {
            controller,
            frame_loop,
            controls,
            intent_sender,
            intent_receiver,
        }
    }

    /// Applies queued intents in arrival order.
    pub fn drain_intents(&mut self, now: Duration) {
        while let Ok(intent) = self.intent_receiver.try_recv() {
            self.apply(intent, now);
        }
    }

    fn apply(&mut self, intent: Intent, now: Duration) {
        debug!("Applying {:?}", intent);
        match intent {
            Intent::SetSpeed(level) => self.controller.set_speed(level),
            Intent::Pulse => self.controller.pulse(now),
            Intent::ToggleTrail => {
                let enabled = self.controller.toggle_trail();
                self.controls.set_trail_enabled(enabled);
            }
            Intent::Reset => self.controller.reset(),
        }
    }

    /// Space pulses, `T` toggles the trail, `R` resets.
    fn handle_shortcuts(&self, context: &egui::Context) {
        let pressed: Vec<Intent> = context.input(|i| {
            [
                (egui::Key::Space, Intent::Pulse),
                (egui::Key::T, Intent::ToggleTrail),
                (egui::Key::R, Intent::Reset),
            ]
            .into_iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, intent)| intent)
            .collect()
        });
        for intent in pressed {
            if self.intent_sender.send(intent).is_err() {
                warn!("Intent channel closed; dropping {:?}", intent);
            }
        }
    }

    fn track_viewport(&mut self, size: egui::Vec2) {
        let current = self.controller.viewport();
        if (current.width - size.x).abs() > 0.5 || (current.height - size.y).abs() > 0.5 {
            self.controller.on_resize(size.x, size.y);
        }
    }

    fn handle_pointer(
        &mut self,
        context: &egui::Context,
        response: &Response,
        origin: Pos2,
        now: Duration,
    ) {
        let to_canvas = |pos: Pos2| glam::Vec2::new(pos.x - origin.x, pos.y - origin.y);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if self.controller.hit_test(to_canvas(pos)) {
                    self.controller.pulse(now);
                }
            }
        }
        if response.drag_started() {
            // Hit-test where the press began, not where the drag threshold was crossed.
            if let Some(press) = context.input(|i| i.pointer.press_origin()) {
                let pointer = to_canvas(press);
                if self.controller.hit_test(pointer) {
                    self.controller.begin_drag(pointer, now);
                }
            }
        }
        if response.dragged() && self.controller.is_dragging() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.controller.update_drag(to_canvas(pos));
            }
        }
        if response.drag_stopped() {
            self.controller.end_drag();
        }
    }
}

impl eframe::App for HeartApp {
    fn update(&mut self, context: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Duration::from_secs_f64(context.input(|i| i.time).max(0.0));
        if context.input(|i| i.viewport().close_requested()) {
            if let Some(elapsed) = self.frame_loop.elapsed(now) {
                info!("UI: close requested after {:.1}s", elapsed.as_secs_f32());
            }
            self.frame_loop.stop();
        }

        self.handle_shortcuts(context);

        egui::TopBottomPanel::bottom("controls").show(context, |ui| {
            self.controls.show(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND))
            .show(context, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let origin = response.rect.min;
                self.track_viewport(response.rect.size());
                self.handle_pointer(context, &response, origin, now);
                self.drain_intents(now);
                if self.frame_loop.advance(&mut self.controller, now) {
                    context.request_repaint();
                }
                paint_scene(
                    &painter,
                    origin,
                    self.controller.surface(),
                    self.controller.config().heart.label.as_deref(),
                );
            });
    }
}
