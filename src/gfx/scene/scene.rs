//! Scene construction and per-frame state flow.
//!
//! The scene owns everything a frame touches: the board and its paired GPU
//! resources, the player token, the water panels and the camera rig. The
//! frame loop calls [`Scene::update`] (pure state), then
//! [`Scene::sync_transforms`] (uniform writes), then hands the scene to the
//! renderer read-only.

use cgmath::{Matrix4, Vector3};

use crate::board::{animator, Board, Tile, TileKind};
use crate::gfx::camera::CameraRig;
use crate::gfx::geometry::generate_cuboid;
use crate::gfx::resources::{
    texture_loader, DrawableResource, TextureResource, TransformBinding,
};

// Entity dimensions in world units, matching the board's proportions: tiles
// are full-height columns, the player is a flat cap standing on top.
const TILE_DIMENSIONS: [f32; 3] = [2.0, 8.0, 2.0];
const PLAYER_DIMENSIONS: [f32; 3] = [2.0, 1.0, 2.0];
const PLAYER_BASE_HEIGHT: f32 = 8.0;

// The four water slabs hem the board in on all sides.
const WATER_PANELS: [([f32; 3], [f32; 3]); 4] = [
    ([6.0, 8.0, 20.0], [-16.0, 0.0, -10.0]),
    ([6.0, 8.0, 20.0], [10.0, 0.0, -10.0]),
    ([32.0, 8.0, 6.0], [-16.0, 0.0, -16.0]),
    ([32.0, 8.0, 6.0], [-16.0, 0.0, 8.0]),
];
const WATER_COLOR: [f32; 4] = [0.15, 0.45, 0.70, 0.55];

// Texture files are looked up relative to the working directory; each class
// has a flat fallback color so a missing file degrades instead of aborting
// setup.
const LAND_TEXTURE: (&str, [u8; 4]) = ("assets/land.jpeg", [106, 142, 86, 255]);
const JUMPER_TEXTURE: (&str, [u8; 4]) = ("assets/jumper.jpeg", [196, 120, 48, 255]);
const GOAL_TEXTURE: (&str, [u8; 4]) = ("assets/goal.jpeg", [212, 175, 55, 255]);
const PLAYER_TEXTURE: (&str, [u8; 4]) = ("assets/player.jpeg", [178, 34, 34, 255]);

/// The player's cube, riding on the camera rig's tracked position.
struct PlayerToken {
    drawable: DrawableResource,
    transform: TransformBinding,
}

/// One translucent water slab at a fixed world position.
struct WaterPanel {
    drawable: DrawableResource,
    transform: TransformBinding,
}

pub struct Scene {
    pub board: Board,
    pub camera: CameraRig,
    // Index-aligned with board.tiles(): tile i owns drawable i and
    // transform i for the whole session.
    tile_drawables: Vec<DrawableResource>,
    tile_transforms: Vec<TransformBinding>,
    player: PlayerToken,
    water: Vec<WaterPanel>,
}

impl Scene {
    /// Builds every GPU resource for the generated board in one pass, in
    /// board order.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        transform_layout: &wgpu::BindGroupLayout,
        texture_layout: &wgpu::BindGroupLayout,
        board: Board,
        camera: CameraRig,
    ) -> Self {
        let load = |(path, fallback): (&str, [u8; 4])| {
            texture_loader::load_or_fallback(device, queue, path, fallback)
        };
        let land_texture = load(LAND_TEXTURE);
        let jumper_texture = load(JUMPER_TEXTURE);
        let goal_texture = load(GOAL_TEXTURE);
        let player_texture = load(PLAYER_TEXTURE);

        let tile_geometry =
            generate_cuboid(TILE_DIMENSIONS[0], TILE_DIMENSIONS[1], TILE_DIMENSIONS[2]);

        let mut tile_drawables = Vec::with_capacity(board.len());
        let mut tile_transforms = Vec::with_capacity(board.len());
        for (index, tile) in board.tiles().iter().enumerate() {
            let texture: &TextureResource = match tile.kind {
                TileKind::Land => &land_texture,
                TileKind::Jumper => &jumper_texture,
                TileKind::Goal => &goal_texture,
            };
            tile_drawables.push(DrawableResource::textured(
                device,
                &tile_geometry,
                texture,
                texture_layout,
                &format!("tile {index}"),
            ));
            tile_transforms.push(TransformBinding::new(
                device,
                transform_layout,
                tile_translation(&board, index, tile),
            ));
        }

        let player_geometry = generate_cuboid(
            PLAYER_DIMENSIONS[0],
            PLAYER_DIMENSIONS[1],
            PLAYER_DIMENSIONS[2],
        );
        let tracked = camera.tracked();
        let player = PlayerToken {
            drawable: DrawableResource::textured(
                device,
                &player_geometry,
                &player_texture,
                texture_layout,
                "player",
            ),
            transform: TransformBinding::new(
                device,
                transform_layout,
                Matrix4::from_translation(Vector3::new(
                    tracked.x,
                    PLAYER_BASE_HEIGHT,
                    tracked.y,
                )),
            ),
        };

        let water = WATER_PANELS
            .iter()
            .enumerate()
            .map(|(index, ([w, h, d], position))| WaterPanel {
                drawable: DrawableResource::solid(
                    device,
                    &generate_cuboid(*w, *h, *d),
                    WATER_COLOR,
                    &format!("water {index}"),
                ),
                transform: TransformBinding::new(
                    device,
                    transform_layout,
                    Matrix4::from_translation(Vector3::from(*position)),
                ),
            })
            .collect();

        debug_assert_eq!(tile_drawables.len(), board.len());

        let holes = board.tiles().iter().filter(|t| !t.alive).count();
        let movers = board.tiles().iter().filter(|t| t.mobile).count();
        log::info!(
            "scene ready: {} tiles ({holes} holes, {movers} movers), 1 player, {} water panels",
            board.len(),
            WATER_PANELS.len(),
        );

        Self {
            board,
            camera,
            tile_drawables,
            tile_transforms,
            player,
            water,
        }
    }

    /// The pure state step: tile animation and the camera uniform. No GPU
    /// work happens here.
    pub fn update(&mut self) {
        animator::advance_board(&mut self.board);
        self.camera.update_view_proj();
    }

    /// Writes this frame's model matrices for everything that moves: the
    /// bobbing tiles and the player token.
    pub fn sync_transforms(&mut self, queue: &wgpu::Queue) {
        for (index, tile) in self.board.tiles().iter().enumerate() {
            if tile.mobile && tile.alive {
                self.tile_transforms[index].set(
                    queue,
                    tile_translation(&self.board, index, tile),
                );
            }
        }

        let tracked = self.camera.tracked();
        self.player.transform.set(
            queue,
            Matrix4::from_translation(Vector3::new(
                tracked.x,
                PLAYER_BASE_HEIGHT,
                tracked.y,
            )),
        );
    }

    /// Alive tiles in board order, paired with their GPU resources.
    pub fn alive_tiles(
        &self,
    ) -> impl Iterator<Item = (&DrawableResource, &TransformBinding)> {
        self.board
            .tiles()
            .iter()
            .zip(&self.tile_drawables)
            .zip(&self.tile_transforms)
            .filter(|((tile, _), _)| tile.alive)
            .map(|((_, drawable), transform)| (drawable, transform))
    }

    pub fn player(&self) -> (&DrawableResource, &TransformBinding) {
        (&self.player.drawable, &self.player.transform)
    }

    pub fn water_panels(
        &self,
    ) -> impl Iterator<Item = (&DrawableResource, &TransformBinding)> {
        self.water
            .iter()
            .map(|panel| (&panel.drawable, &panel.transform))
    }
}

fn tile_translation(board: &Board, index: usize, tile: &Tile) -> Matrix4<f32> {
    let (x, z) = board.world_position(index);
    Matrix4::from_translation(Vector3::new(x, tile.jump_phase(), z))
}
