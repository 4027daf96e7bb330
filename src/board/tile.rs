//! Per-tile state for the board.
//!
//! A tile is one cell of the causeway: present or a hole, and either static
//! or bobbing vertically between the water line and its jump limit. Tile
//! state is plain CPU data; the GPU-side drawable paired with each tile
//! lives in the scene.

/// Vertical distance a bobbing tile climbs per frame, in world units.
pub const JUMP_STEP: f32 = 0.01;

/// Upper bound of the jump phase. The frame after the phase passes this
/// value it wraps back to zero, giving the sawtooth bob.
pub const JUMP_LIMIT: f32 = 3.0;

// Frames per whole world unit at JUMP_STEP per frame.
const STEPS_PER_UNIT: u32 = 100;

/// Texture class of a tile, decided at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Plain walkable cube.
    Land,
    /// Vertically oscillating cube.
    Jumper,
    /// The destination cube, rendered with its own texture.
    Goal,
}

/// One cell of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// False marks a hole: the cell is skipped when rendering.
    pub alive: bool,
    /// Whether the animator advances this tile's jump phase each frame.
    pub mobile: bool,
    pub kind: TileKind,
    // Whole-frame counter the phase derives from; summing 0.01 per frame
    // drifts, 300 * JUMP_STEP does not.
    pub(crate) jump_steps: u32,
    pub(crate) jump_phase: f32,
}

impl Tile {
    /// A tile that never moves. Holes keep their texture class even though
    /// they are never drawn.
    pub fn fixed(kind: TileKind, alive: bool) -> Self {
        Self {
            alive,
            mobile: false,
            kind,
            jump_steps: 0,
            jump_phase: 0.0,
        }
    }

    /// A bobbing tile starting `initial_units` whole units into its climb.
    pub fn bobbing(alive: bool, initial_units: u32) -> Self {
        let jump_steps = initial_units * STEPS_PER_UNIT;
        Self {
            alive,
            mobile: true,
            kind: TileKind::Jumper,
            jump_steps,
            jump_phase: jump_steps as f32 * JUMP_STEP,
        }
    }

    /// Current vertical offset of the tile, in `[0.0, JUMP_LIMIT]`.
    pub fn jump_phase(&self) -> f32 {
        self.jump_phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tile_has_zero_phase() {
        let tile = Tile::fixed(TileKind::Land, true);
        assert!(!tile.mobile);
        assert_eq!(tile.jump_phase(), 0.0);
    }

    #[test]
    fn bobbing_tile_starts_on_whole_units() {
        assert_eq!(Tile::bobbing(true, 0).jump_phase(), 0.0);
        assert_eq!(Tile::bobbing(true, 1).jump_phase(), 1.0);
        assert_eq!(Tile::bobbing(true, 2).jump_phase(), 2.0);
    }
}
