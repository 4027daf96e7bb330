//! Discrete input handling for the camera rig.
//!
//! The controller owns the step sizes and translates key codes into rig
//! mutations; the rig clamps everything on write. Taking a bare
//! [`KeyCode`] instead of the winit event keeps the mapping testable.

use winit::keyboard::KeyCode;

use super::rig::{CameraMode, CameraRig};

pub struct CameraController {
    pub pitch_step: f32,
    pub zoom_step: f32,
    pub lift_step: f32,
    pub track_step: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            pitch_step: 10.0,
            zoom_step: 2.0,
            lift_step: 2.0,
            track_step: 2.0,
        }
    }

    /// Applies one key press to the rig. Returns false for keys the camera
    /// does not handle.
    ///
    /// W/S tilt the orbit, N/F pull it in and out, P/O lower and raise it.
    /// T snaps to the top-down view, E resets to orbit defaults, C switches
    /// to the chase camera. The arrow keys step the tracked position (and
    /// with it the player token) one tile at a time.
    pub fn apply(&self, key: KeyCode, rig: &mut CameraRig) -> bool {
        match key {
            KeyCode::KeyW => rig.add_pitch(self.pitch_step),
            KeyCode::KeyS => rig.add_pitch(-self.pitch_step),
            KeyCode::KeyN => rig.add_distance(-self.zoom_step),
            KeyCode::KeyF => rig.add_distance(self.zoom_step),
            KeyCode::KeyP => rig.add_height(-self.lift_step),
            KeyCode::KeyO => rig.add_height(self.lift_step),
            KeyCode::KeyT => rig.top_view(),
            KeyCode::KeyE => rig.reset_orbit(),
            KeyCode::KeyC => rig.set_mode(CameraMode::Chase),
            KeyCode::ArrowUp => rig.move_tracked(0.0, -self.track_step),
            KeyCode::ArrowDown => rig.move_tracked(0.0, self.track_step),
            KeyCode::ArrowLeft => rig.move_tracked(-self.track_step, 0.0),
            KeyCode::ArrowRight => rig.move_tracked(self.track_step, 0.0),
            _ => return false,
        }
        true
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::rig::{DEFAULT_DISTANCE, DEFAULT_PITCH};
    use cgmath::Vector2;

    fn setup() -> (CameraController, CameraRig) {
        (CameraController::new(), CameraRig::new(1.0))
    }

    #[test]
    fn pitch_keys_step_and_clamp() {
        let (controller, mut rig) = setup();
        controller.apply(KeyCode::KeyW, &mut rig);
        assert_eq!(rig.pitch(), 80.0);
        for _ in 0..10 {
            controller.apply(KeyCode::KeyW, &mut rig);
        }
        assert!(rig.pitch() <= 90.0);
        for _ in 0..30 {
            controller.apply(KeyCode::KeyS, &mut rig);
        }
        assert!(rig.pitch() >= -90.0);
    }

    #[test]
    fn reset_key_restores_orbit_defaults() {
        let (controller, mut rig) = setup();
        controller.apply(KeyCode::KeyC, &mut rig);
        controller.apply(KeyCode::KeyF, &mut rig);
        controller.apply(KeyCode::KeyE, &mut rig);
        assert_eq!(rig.mode(), CameraMode::Orbit);
        assert_eq!(rig.pitch(), DEFAULT_PITCH);
        assert_eq!(rig.distance(), DEFAULT_DISTANCE);
    }

    #[test]
    fn arrows_walk_the_board_and_stop_at_its_edge() {
        let (controller, mut rig) = setup();
        controller.apply(KeyCode::ArrowRight, &mut rig);
        assert_eq!(rig.tracked(), Vector2::new(-8.0, 8.0));
        for _ in 0..20 {
            controller.apply(KeyCode::ArrowRight, &mut rig);
            controller.apply(KeyCode::ArrowDown, &mut rig);
        }
        assert_eq!(rig.tracked(), Vector2::new(8.0, 8.0));
        for _ in 0..20 {
            controller.apply(KeyCode::ArrowLeft, &mut rig);
            controller.apply(KeyCode::ArrowUp, &mut rig);
        }
        assert_eq!(rig.tracked(), Vector2::new(-10.0, -10.0));
    }

    #[test]
    fn unhandled_keys_are_reported() {
        let (controller, mut rig) = setup();
        assert!(!controller.apply(KeyCode::KeyZ, &mut rig));
        assert!(controller.apply(KeyCode::KeyC, &mut rig));
        assert_eq!(rig.mode(), CameraMode::Chase);
    }
}
