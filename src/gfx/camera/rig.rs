//! Camera state and view computation.
//!
//! [`CameraRig`] is the single value the frame loop threads through input
//! handling and rendering: the active mode, the orbit parameters, the chase
//! target, and the projection. Every mutation clamps on write, so the view
//! matrix can never degenerate -- the render side just reads.

use cgmath::{perspective, Deg, Matrix4, Point3, Vector2, Vector3};

use super::uniform::{CameraUniform, OPENGL_TO_WGPU_MATRIX};

/// Orbit pitch after a reset, in degrees.
pub const DEFAULT_PITCH: f32 = 70.0;
/// Orbit distance after a reset, in world units.
pub const DEFAULT_DISTANCE: f32 = 20.0;

// Pitch must stay strictly inside +-90 degrees or the orbit eye lands on the
// up axis and the look-at basis collapses.
const PITCH_LIMIT: f32 = 90.0;
const PITCH_MARGIN: f32 = 0.05;

const MIN_DISTANCE: f32 = 2.0;
const MAX_DISTANCE: f32 = 100.0;
const HEIGHT_LIMIT: f32 = 20.0;

// Footprint of the 10x10 board: tile origin corners span [-10, 8] on x and
// z, and the tracked position snaps between them in whole-tile steps.
const TRACK_MIN: f32 = -10.0;
const TRACK_MAX: f32 = 8.0;

// Chase eye sits a fixed lift above and a fixed setback behind the tracked
// cell, looking at the tile-top height.
const CHASE_EYE_HEIGHT: f32 = 22.0;
const CHASE_EYE_SETBACK: f32 = 3.0;
const CHASE_TARGET_HEIGHT: f32 = 8.0;

const FOVY: Deg<f32> = Deg(90.0);
const ZNEAR: f32 = 0.1;
const ZFAR: f32 = 500.0;

/// Which of the two view computations is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Eye orbits the board center on a pitch arc.
    Orbit,
    /// Eye follows the tracked position from behind and above.
    Chase,
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    mode: CameraMode,
    pitch: f32,
    distance: f32,
    height: f32,
    tracked: Vector2<f32>,
    aspect: f32,
    pub uniform: CameraUniform,
}

impl CameraRig {
    /// A rig at the startup defaults: orbit mode looking down at the board,
    /// tracked position on the start cell.
    pub fn new(aspect: f32) -> Self {
        let mut rig = Self {
            mode: CameraMode::Orbit,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
            height: 0.0,
            tracked: Vector2::new(TRACK_MIN, TRACK_MAX),
            aspect,
            uniform: CameraUniform::default(),
        };
        rig.update_view_proj();
        rig
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }

    /// Switches back to orbit mode and restores the default pitch and
    /// distance. Height and tracked position are kept.
    pub fn reset_orbit(&mut self) {
        self.mode = CameraMode::Orbit;
        self.pitch = DEFAULT_PITCH;
        self.distance = DEFAULT_DISTANCE;
    }

    /// Straight-down view of the board at the default distance.
    pub fn top_view(&mut self) {
        self.set_pitch(PITCH_LIMIT);
        self.distance = DEFAULT_DISTANCE;
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Tracked (x, z) the chase camera follows; also where the player token
    /// stands.
    pub fn tracked(&self) -> Vector2<f32> {
        self.tracked
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-PITCH_LIMIT + PITCH_MARGIN, PITCH_LIMIT - PITCH_MARGIN);
    }

    pub fn add_distance(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn add_height(&mut self, delta: f32) {
        self.height = (self.height + delta).clamp(-HEIGHT_LIMIT, HEIGHT_LIMIT);
    }

    /// Moves the tracked position, clamped to the board footprint on both
    /// axes.
    pub fn move_tracked(&mut self, dx: f32, dz: f32) {
        self.tracked.x = (self.tracked.x + dx).clamp(TRACK_MIN, TRACK_MAX);
        self.tracked.y = (self.tracked.y + dz).clamp(TRACK_MIN, TRACK_MAX);
    }

    fn eye_and_target(&self) -> (Point3<f32>, Point3<f32>) {
        match self.mode {
            CameraMode::Orbit => {
                // The vertical offset folds into the orbit radius, so
                // raising the eye also backs it away from the board.
                let radius = (self.height * self.height + self.distance * self.distance).sqrt();
                let pitch = self.pitch.to_radians();
                let eye = Point3::new(0.0, radius * pitch.sin(), radius * pitch.cos());
                (eye, Point3::new(0.0, 0.0, 0.0))
            }
            CameraMode::Chase => {
                let (x, z) = (self.tracked.x, self.tracked.y);
                let eye = Point3::new(x, CHASE_EYE_HEIGHT, z + CHASE_EYE_SETBACK);
                let target = Point3::new(x, CHASE_TARGET_HEIGHT, z);
                (eye, target)
            }
        }
    }

    /// View transform for the active mode. Pure: reads the rig, touches
    /// nothing.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let (eye, target) = self.eye_and_target();
        Matrix4::look_at_rh(eye, target, Vector3::unit_y())
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let proj = OPENGL_TO_WGPU_MATRIX * perspective(FOVY, self.aspect, ZNEAR, ZFAR);
        proj * self.view_matrix()
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Refreshes the GPU-facing uniform from the current state. Called once
    /// per frame by the scene update.
    pub fn update_view_proj(&mut self) {
        let (eye, _) = self.eye_and_target();
        self.uniform.view_position = [eye.x, eye.y, eye.z, 1.0];
        self.uniform.view_proj = self.build_view_projection_matrix().into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::SquareMatrix;

    fn rig() -> CameraRig {
        CameraRig::new(16.0 / 9.0)
    }

    #[test]
    fn starts_at_the_documented_defaults() {
        let rig = rig();
        assert_eq!(rig.mode(), CameraMode::Orbit);
        assert_eq!(rig.pitch(), DEFAULT_PITCH);
        assert_eq!(rig.distance(), DEFAULT_DISTANCE);
        assert_eq!(rig.height(), 0.0);
        assert_eq!(rig.tracked(), Vector2::new(-10.0, 8.0));
    }

    #[test]
    fn pitch_never_leaves_its_bounds() {
        let mut rig = rig();
        for _ in 0..100 {
            rig.add_pitch(10.0);
            assert!(rig.pitch() <= 90.0);
        }
        for _ in 0..100 {
            rig.add_pitch(-10.0);
            assert!(rig.pitch() >= -90.0);
        }
    }

    #[test]
    fn reset_restores_pitch_and_distance_from_any_state() {
        let mut rig = rig();
        rig.add_pitch(-120.0);
        rig.add_distance(30.0);
        rig.add_height(6.0);
        rig.set_mode(CameraMode::Chase);

        rig.reset_orbit();

        assert_eq!(rig.mode(), CameraMode::Orbit);
        assert_eq!(rig.pitch(), DEFAULT_PITCH);
        assert_eq!(rig.distance(), DEFAULT_DISTANCE);
        // The vertical offset survives a reset.
        assert_eq!(rig.height(), 6.0);
    }

    #[test]
    fn distance_and_height_are_clamped() {
        let mut rig = rig();
        for _ in 0..200 {
            rig.add_distance(-2.0);
            rig.add_height(2.0);
        }
        assert_eq!(rig.distance(), 2.0);
        assert_eq!(rig.height(), 20.0);
        for _ in 0..200 {
            rig.add_distance(2.0);
            rig.add_height(-2.0);
        }
        assert_eq!(rig.distance(), 100.0);
        assert_eq!(rig.height(), -20.0);
    }

    #[test]
    fn tracked_position_stays_on_the_board() {
        let mut rig = rig();
        for _ in 0..50 {
            rig.move_tracked(2.0, 2.0);
        }
        assert_eq!(rig.tracked(), Vector2::new(8.0, 8.0));
        for _ in 0..50 {
            rig.move_tracked(-2.0, -2.0);
        }
        assert_eq!(rig.tracked(), Vector2::new(-10.0, -10.0));
    }

    #[test]
    fn track_bounds_match_the_board_footprint() {
        use crate::board::{Board, BOARD_COLS, BOARD_ROWS};
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let board = Board::generate(BOARD_ROWS, BOARD_COLS, &mut StdRng::seed_from_u64(0));
        let (min_x, min_z) = board.world_position(0);
        let (max_x, max_z) = board.world_position(board.len() - 1);
        assert_eq!((TRACK_MIN, TRACK_MIN), (min_x, min_z));
        assert_eq!((TRACK_MAX, TRACK_MAX), (max_x, max_z));
    }

    #[test]
    fn orbit_view_ignores_the_tracked_position() {
        let mut rig = rig();
        let before = rig.view_matrix();
        rig.move_tracked(2.0, -2.0);
        assert_eq!(rig.view_matrix(), before);
    }

    #[test]
    fn mode_switch_changes_only_the_view() {
        let mut rig = rig();
        let orbit_view = rig.view_matrix();

        rig.set_mode(CameraMode::Chase);

        assert_ne!(rig.view_matrix(), orbit_view);
        assert_eq!(rig.pitch(), DEFAULT_PITCH);
        assert_eq!(rig.distance(), DEFAULT_DISTANCE);
        assert_eq!(rig.tracked(), Vector2::new(-10.0, 8.0));

        rig.set_mode(CameraMode::Orbit);
        assert_eq!(rig.view_matrix(), orbit_view);
    }

    #[test]
    fn view_is_well_formed_at_the_pitch_clamps() {
        let mut rig = rig();
        rig.top_view();
        let view = rig.view_matrix();
        let det = view.determinant();
        assert!(det.is_finite());
        assert_relative_eq!(det.abs(), 1.0, epsilon = 1e-3);

        rig.add_pitch(-500.0);
        let det = rig.view_matrix().determinant();
        assert!(det.is_finite());
        assert_relative_eq!(det.abs(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn chase_eye_trails_the_tracked_cell() {
        let mut rig = rig();
        rig.set_mode(CameraMode::Chase);
        rig.update_view_proj();
        let [x, y, z, w] = rig.uniform.view_position;
        assert_eq!(w, 1.0);
        assert_eq!((x, z), (-10.0, 8.0 + CHASE_EYE_SETBACK));
        assert_eq!(y, CHASE_EYE_HEIGHT);
    }
}
