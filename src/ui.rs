use crate::control::{
    Control, ControlCommand, ControlSender, ROTATION_SPEED_MAX, ROTATION_SPEED_MIN,
};

/// On-screen control panel. Widgets never touch `Control` directly; they
/// queue commands the frame loop applies on its next tick.
pub struct ControlPanel {
    commands: ControlSender,
}

impl ControlPanel {
    pub fn new(commands: ControlSender) -> Self {
        Self { commands }
    }

    pub fn show(&self, ctx: &egui::Context, control: &Control, fps: f32) {
        egui::Window::new("Controls")
            .title_bar(true)
            .resizable(false)
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} FPS", fps))
                        .size(14.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                ui.separator();

                let mut speed = control.rotation_speed;
                let slider = egui::Slider::new(&mut speed, ROTATION_SPEED_MIN..=ROTATION_SPEED_MAX)
                    .text("rotationSpeed");
                if ui.add(slider).changed() {
                    self.commands.send(ControlCommand::SetRotationSpeed(speed));
                }

                ui.horizontal(|ui| {
                    if ui.button("toggle").clicked() {
                        self.commands.send(ControlCommand::Toggle);
                    }
                    ui.label(
                        egui::RichText::new(format!("goDown: {}", control.go_down))
                            .color(egui::Color32::GRAY),
                    );
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::command_channel;

    #[test]
    fn test_idle_panel_sends_nothing() {
        let (tx, rx) = command_channel();
        let panel = ControlPanel::new(tx);
        let control = Control::default();
        let ctx = egui::Context::default();

        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx, &control, 60.0));
        }

        let mut after = control;
        assert_eq!(rx.drain_into(&mut after), 0);
        assert_eq!(after, control);
    }
}
