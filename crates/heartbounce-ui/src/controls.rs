//! Bottom control bar. Widgets emit [`Intent`]s instead of touching the controller directly.

use crossbeam_channel::{Receiver, Sender};
use heartbounce_core::SpeedLevel;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SetSpeed(SpeedLevel),
    Pulse,
    ToggleTrail,
    Reset,
}

pub fn intent_channel() -> (Sender<Intent>, Receiver<Intent>) {
    crossbeam_channel::unbounded()
}

pub struct ControlPanel {
    speed: SpeedLevel,
    trail_enabled: bool,
    intent_sender: Sender<Intent>,
}

impl ControlPanel {
    pub fn new(speed: SpeedLevel, trail_enabled: bool, intent_sender: Sender<Intent>) -> Self {
        Self {
            speed,
            trail_enabled,
            intent_sender,
        }
    }

    /// Keeps the toggle caption in sync with the controller.
    pub fn set_trail_enabled(&mut self, enabled: bool) {
        self.trail_enabled = enabled;
    }

    pub fn trail_caption(&self) -> &'static str {
        if self.trail_enabled {
            "Trail On"
        } else {
            "Trail Off"
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut level = self.speed.get();
            let slider = egui::Slider::new(&mut level, SpeedLevel::MIN..=SpeedLevel::MAX)
                .text("Speed")
                .show_value(false);
            if ui.add(slider).changed() {
                if let Ok(speed) = SpeedLevel::try_from(level) {
                    self.speed = speed;
                    self.send(Intent::SetSpeed(speed));
                }
            }
            ui.label(self.speed.label());
            ui.separator();

            if ui.button("Pulse").clicked() {
                self.send(Intent::Pulse);
            }

            let trail_color = if self.trail_enabled {
                egui::Color32::from_rgb(255, 46, 99)
            } else {
                egui::Color32::from_rgb(170, 170, 170)
            };
            let trail_button = egui::Button::new(self.trail_caption()).fill(trail_color);
            if ui.add(trail_button).clicked() {
                self.send(Intent::ToggleTrail);
            }

            if ui.button("Reset").clicked() {
                info!("UI: Reset clicked");
                self.send(Intent::Reset);
            }
        });
    }

    fn send(&self, intent: Intent) {
        if self.intent_sender.send(intent).is_err() {
            warn!("Intent channel closed; dropping {:?}", intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_caption_follows_state() {
        let (sender, _receiver) = intent_channel();
        let mut panel = ControlPanel::new(SpeedLevel::default(), true, sender);
        assert_eq!(panel.trail_caption(), "Trail On");
        panel.set_trail_enabled(false);
        assert_eq!(panel.trail_caption(), "Trail Off");
    }

    #[test]
    fn send_delivers_in_order() {
        let (sender, receiver) = intent_channel();
        let panel = ControlPanel::new(SpeedLevel::default(), true, sender);
        panel.send(Intent::Pulse);
        panel.send(Intent::Reset);
        let drained: Vec<Intent> = receiver.try_iter().collect();
        assert_eq!(drained, vec![Intent::Pulse, Intent::Reset]);
    }
}
