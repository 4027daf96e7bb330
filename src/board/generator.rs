//! Procedural board generation.
//!
//! The board is a fixed grid of [`Tile`]s generated in one pass with a
//! caller-supplied RNG, so a seed fully determines the layout. The per-cell
//! draw order is part of the layout contract: one hole draw for every cell,
//! then one mover draw for every cell except the goal, then one phase draw
//! for cells that came up movers. Reordering the draws would silently change
//! what a given seed produces.

use rand::Rng;

use super::tile::{Tile, TileKind};

/// Grid height of the standard board.
pub const BOARD_ROWS: usize = 10;
/// Grid width of the standard board.
pub const BOARD_COLS: usize = 10;
/// World-space distance between adjacent tile origins.
pub const TILE_SPACING: f32 = 2.0;

// One cell in ten is a hole, one in eight bobs. The start and goal cells
// still consume their dice rolls even though the outcome is ignored for
// them.
const HOLE_DIE: u32 = 10;
const HOLE_FACE: u32 = 9;
const MOVER_DIE: u32 = 8;
const MOVER_FACE: u32 = 7;
const PHASE_UNITS: u32 = 3;

/// The generated board: tiles in row-major order plus the grid dimensions.
///
/// Tile index `i` addresses grid cell `(i / cols, i % cols)` for the whole
/// life of the board; the scene relies on this when it pairs each tile with
/// a drawable by index.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Generates a `rows` x `cols` board from the given RNG.
    ///
    /// The start cell (bottom-left corner, where the player token spawns) is
    /// never a hole and never mobile. The goal cell (top-right corner) is
    /// never a hole and skips the mover roll entirely, so it is always a
    /// static [`TileKind::Goal`] tile. Every other cell rolls independently
    /// for hole and mover status; a hole can still come up mobile, which is
    /// harmless because holes are never drawn.
    pub fn generate(rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        let start = Self::start_index_for(rows, cols);
        let goal = Self::goal_index_for(cols);

        let mut tiles = Vec::with_capacity(rows * cols);
        for index in 0..rows * cols {
            let hole = rng.random_range(0..HOLE_DIE) == HOLE_FACE;
            let alive = !(hole && index != start && index != goal);

            if index == goal {
                tiles.push(Tile::fixed(TileKind::Goal, true));
                continue;
            }

            if rng.random_range(0..MOVER_DIE) == MOVER_FACE && index != start {
                let units = rng.random_range(0..PHASE_UNITS);
                tiles.push(Tile::bobbing(alive, units));
            } else {
                tiles.push(Tile::fixed(TileKind::Land, alive));
            }
        }

        Self { tiles, rows, cols }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Index of the cell the player token spawns on.
    pub fn start_index(&self) -> usize {
        Self::start_index_for(self.rows, self.cols)
    }

    /// Index of the destination cell.
    pub fn goal_index(&self) -> usize {
        Self::goal_index_for(self.cols)
    }

    /// World-space (x, z) of a tile's origin corner. The grid is centered on
    /// the world origin, so a 10x10 board spans [-10, 8] on both axes.
    pub fn world_position(&self, index: usize) -> (f32, f32) {
        let col = index % self.cols;
        let row = index / self.cols;
        let x = (col as f32 - self.cols as f32 / 2.0) * TILE_SPACING;
        let z = (row as f32 - self.rows as f32 / 2.0) * TILE_SPACING;
        (x, z)
    }

    fn start_index_for(rows: usize, cols: usize) -> usize {
        (rows - 1) * cols
    }

    fn goal_index_for(cols: usize) -> usize {
        cols - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(seed: u64) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        Board::generate(BOARD_ROWS, BOARD_COLS, &mut rng)
    }

    #[test]
    fn board_has_one_tile_per_cell() {
        let board = board(1);
        assert_eq!(board.len(), 100);
        assert_eq!(board.rows(), 10);
        assert_eq!(board.cols(), 10);
    }

    #[test]
    fn start_cell_is_always_safe() {
        for seed in 0..64 {
            let board = board(seed);
            let start = &board.tiles()[board.start_index()];
            assert!(start.alive, "seed {seed}: start cell was a hole");
            assert!(!start.mobile, "seed {seed}: start cell was mobile");
            assert_eq!(start.kind, TileKind::Land);
        }
    }

    #[test]
    fn goal_cell_is_always_static_goal() {
        for seed in 0..64 {
            let board = board(seed);
            let goal = &board.tiles()[board.goal_index()];
            assert!(goal.alive, "seed {seed}: goal cell was a hole");
            assert!(!goal.mobile, "seed {seed}: goal cell was mobile");
            assert_eq!(goal.kind, TileKind::Goal);
        }
    }

    #[test]
    fn exactly_one_goal_tile() {
        let board = board(3);
        let goals = board
            .tiles()
            .iter()
            .filter(|t| t.kind == TileKind::Goal)
            .count();
        assert_eq!(goals, 1);
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        for seed in [0, 7, 42, 0xDEAD_BEEF] {
            assert_eq!(board(seed), board(seed));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        // 100 cells of independent rolls make a collision implausible for
        // any particular pair.
        assert_ne!(board(1), board(2));
    }

    #[test]
    fn hazards_and_movers_actually_occur() {
        let mut saw_hole = false;
        let mut saw_mover = false;
        for seed in 0..32 {
            let board = board(seed);
            saw_hole |= board.tiles().iter().any(|t| !t.alive);
            saw_mover |= board.tiles().iter().any(|t| t.mobile);
        }
        assert!(saw_hole, "no hole generated across 32 seeds");
        assert!(saw_mover, "no mobile tile generated across 32 seeds");
    }

    #[test]
    fn mover_phases_start_on_whole_units() {
        for seed in 0..16 {
            for tile in board(seed).tiles().iter().filter(|t| t.mobile) {
                assert!([0.0, 1.0, 2.0].contains(&tile.jump_phase()));
            }
        }
    }

    #[test]
    fn world_positions_are_row_major() {
        let board = board(5);
        assert_eq!(board.world_position(0), (-10.0, -10.0));
        assert_eq!(board.world_position(9), (8.0, -10.0));
        assert_eq!(board.world_position(90), (-10.0, 8.0));
        assert_eq!(board.world_position(99), (8.0, 8.0));
        // Index 90 is the start cell: the bottom-left corner the player
        // token spawns on.
        assert_eq!(board.start_index(), 90);
        assert_eq!(board.goal_index(), 9);
    }
}
