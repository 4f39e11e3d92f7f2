use std::sync::mpsc::{self, Receiver, Sender};

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Bounds the control panel slider enforces on `rotation_speed`
pub const ROTATION_SPEED_MIN: f32 = -0.5;
pub const ROTATION_SPEED_MAX: f32 = 0.5;

pub const DEFAULT_ROTATION_SPEED: f32 = 0.05;

/// User-tunable parameters read by the frame loop every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Control {
    /// Radians added to the tower's Y rotation per frame
    pub rotation_speed: f32,
    /// When set, the tower sinks a fixed step per frame
    pub go_down: bool,
}

impl Control {
    pub fn new(rotation_speed: f32, go_down: bool) -> Self {
        Self {
            rotation_speed,
            go_down,
        }
    }

    pub fn toggle(&mut self) {
        self.go_down = !self.go_down;
        info!("go_down = {}", self.go_down);
    }

    /// No range check here; the slider owns the bounds
    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed;
    }

    pub fn apply(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::SetRotationSpeed(speed) => self.set_rotation_speed(speed),
            ControlCommand::Toggle => self.toggle(),
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_SPEED, false)
    }
}

/// State-change intent produced by the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    SetRotationSpeed(f32),
    Toggle,
}

/// UI side of the control queue
#[derive(Debug, Clone)]
pub struct ControlSender {
    tx: Sender<ControlCommand>,
}

impl ControlSender {
    pub fn send(&self, command: ControlCommand) {
        // The loop owns the receiver for the life of the app; a send after
        // teardown has nowhere to go.
        if self.tx.send(command).is_err() {
            warn!("control command {:?} dropped: frame loop is gone", command);
        }
    }
}

/// Loop side of the control queue
#[derive(Debug)]
pub struct ControlReceiver {
    rx: Receiver<ControlCommand>,
}

impl ControlReceiver {
    /// Apply every pending command in arrival order, returning how many ran
    pub fn drain_into(&self, control: &mut Control) -> usize {
        let mut applied = 0;
        for command in self.rx.try_iter() {
            control.apply(command);
            applied += 1;
        }
        applied
    }
}

pub fn command_channel() -> (ControlSender, ControlReceiver) {
    let (tx, rx) = mpsc::channel();
    (ControlSender { tx }, ControlReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_panel_state() {
        let control = Control::default();
        assert_eq!(control.rotation_speed, 0.05);
        assert!(!control.go_down);
    }

    #[test]
    fn test_toggle_flips() {
        let mut control = Control::new(0.0, false);
        control.toggle();
        assert!(control.go_down);
        control.toggle();
        assert!(!control.go_down);
    }

    #[test]
    fn test_set_rotation_speed_is_unchecked() {
        let mut control = Control::default();
        control.set_rotation_speed(3.0);
        assert_eq!(control.rotation_speed, 3.0);
    }

    #[test]
    fn test_drain_applies_in_order() {
        let (tx, rx) = command_channel();
        let mut control = Control::default();

        tx.send(ControlCommand::SetRotationSpeed(0.2));
        tx.send(ControlCommand::Toggle);
        tx.send(ControlCommand::SetRotationSpeed(-0.1));

        assert_eq!(rx.drain_into(&mut control), 3);
        assert_eq!(control.rotation_speed, -0.1);
        assert!(control.go_down);

        assert_eq!(rx.drain_into(&mut control), 0);
    }

    #[test]
    fn test_send_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = command_channel();
        drop(rx);
        tx.send(ControlCommand::Toggle);
    }
}
