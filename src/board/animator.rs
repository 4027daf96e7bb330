//! Per-frame advancement of mobile tiles.
//!
//! Each mobile tile climbs [`JUMP_STEP`](super::tile::JUMP_STEP) world units
//! per frame and snaps back to zero the frame after it passes
//! [`JUMP_LIMIT`](super::tile::JUMP_LIMIT) -- a sawtooth, not a bounce.

use super::generator::Board;
use super::tile::{Tile, JUMP_LIMIT, JUMP_STEP};

/// Advances one tile's jump phase by a single frame step.
///
/// Pure state update, no failure modes. The phase is recomputed from the
/// tile's step counter each call, so from phase 0.0 the wrap lands exactly
/// on the 301st call.
pub fn advance(tile: &mut Tile) {
    tile.jump_steps += 1;
    let phase = tile.jump_steps as f32 * JUMP_STEP;
    if phase > JUMP_LIMIT {
        tile.jump_steps = 0;
        tile.jump_phase = 0.0;
    } else {
        tile.jump_phase = phase;
    }
}

/// Advances every mobile tile on the board by one frame.
pub fn advance_board(board: &mut Board) {
    for tile in board.tiles_mut().iter_mut().filter(|t| t.mobile) {
        advance(tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::generator::{BOARD_COLS, BOARD_ROWS};
    use crate::board::tile::TileKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wraps_to_zero_on_the_301st_step() {
        let mut tile = Tile::bobbing(true, 0);
        for _ in 0..300 {
            advance(&mut tile);
            assert!(tile.jump_phase() > 0.0);
        }
        assert_eq!(tile.jump_phase(), JUMP_LIMIT);
        advance(&mut tile);
        assert_eq!(tile.jump_phase(), 0.0);
    }

    #[test]
    fn phase_stays_in_bounds_over_many_cycles() {
        let mut tile = Tile::bobbing(true, 2);
        let mut wraps = 0;
        let mut last = tile.jump_phase();
        for _ in 0..1000 {
            advance(&mut tile);
            let phase = tile.jump_phase();
            assert!((0.0..=JUMP_LIMIT).contains(&phase));
            if phase < last {
                assert_eq!(phase, 0.0);
                wraps += 1;
            }
            last = phase;
        }
        // From phase 2.0, 1000 steps cross the limit three times (at steps
        // 101, 402 and 703).
        assert_eq!(wraps, 3);
    }

    #[test]
    fn board_advance_leaves_static_tiles_alone() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = Board::generate(BOARD_ROWS, BOARD_COLS, &mut rng);
        let before: Vec<f32> = board.tiles().iter().map(Tile::jump_phase).collect();

        advance_board(&mut board);

        for (tile, phase_before) in board.tiles().iter().zip(before) {
            if tile.mobile {
                assert_ne!(tile.jump_phase(), phase_before);
            } else {
                assert_eq!(tile.jump_phase(), phase_before);
                assert_eq!(tile.jump_phase(), 0.0);
            }
        }
        // The goal never bobs.
        assert_eq!(board.tiles()[board.goal_index()].kind, TileKind::Goal);
        assert_eq!(board.tiles()[board.goal_index()].jump_phase(), 0.0);
    }
}
