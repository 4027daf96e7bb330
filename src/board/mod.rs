//! Board state: tiles, procedural generation and per-frame animation.
//!
//! Everything in this module is plain CPU state with no GPU dependency, so
//! board generation and animation are unit testable without a window or
//! device. The scene pairs each tile with its GPU drawable by index.

pub mod animator;
pub mod generator;
pub mod tile;

// Re-export main types
pub use generator::{Board, BOARD_COLS, BOARD_ROWS, TILE_SPACING};
pub use tile::{Tile, TileKind, JUMP_LIMIT, JUMP_STEP};
