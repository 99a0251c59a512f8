use crate::error::Result;
use crate::grid::{Tile, TileGrid};
use crate::render::{quad_indices, FrameOutput, TileMesh, VertexSink};
use crate::snap::PixelSnapper;
use crate::transform::{Matrix, TransformStack};

use super::camera::Camera;
use super::config::{SceneConfig, VertexPolicy};

/// Turns a camera position into upload-ready tile vertices.
///
/// Everything that can fail on bad configuration is checked in
/// [`FramePipeline::new`]. Per frame, [`build`](Self::build) depends only on
/// the config and the camera it is given, and leaves the transform stack
/// balanced.
#[derive(Debug)]
pub struct FramePipeline {
    config: SceneConfig,
    grid: TileGrid,
    projection: Matrix,
    stack: TransformStack,
    mesh: TileMesh,
    indices: Vec<u32>,
}

impl FramePipeline {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;

        let grid = config.grid_generator()?.generate(config.edge_mode);
        let projection = config.projection()?;
        let indices = quad_indices(grid.len());

        let seams = grid.seams();
        if !seams.is_clean() {
            log::warn!(
                "tile grid has {} mismatched shared edges (max gap {:e})",
                seams.len(),
                seams.max_gap()
            );
        }

        log::info!(
            "frame pipeline ready: {} tiles, {:?} edges, snap={}, policy={:?}, ratio={}",
            grid.len(),
            config.edge_mode,
            config.pixel_snap,
            config.vertex_policy,
            config.effective_pixel_ratio()
        );

        Ok(Self {
            mesh: TileMesh::with_capacity(grid.len()),
            config,
            grid,
            projection,
            stack: TransformStack::new(),
            indices,
        })
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Builds the vertex stream for `camera`.
    ///
    /// Two sibling scopes on the stack: the camera scope yields the
    /// screen → world transform, the grid scope maps grid-local tile corners
    /// to world space. Snapping, when enabled, rounds through the camera
    /// transform so edges land on device pixels of the final image.
    pub fn build(&mut self, camera: &Camera) -> Result<FrameOutput<'_>> {
        self.stack.ensure_balanced()?;
        self.mesh.clear();

        let Self { config, grid, stack, mesh, .. } = self;
        let viewport = config.viewport;
        let screen_origin = camera.screen_origin(viewport);

        let camera_matrix = stack.scoped(|stack| {
            stack.translate(screen_origin.x, screen_origin.y);
            Ok(*stack.current())
        })?;

        let snapper = if config.pixel_snap {
            Some(PixelSnapper::new(camera_matrix, viewport, config.effective_pixel_ratio())?)
        } else {
            None
        };

        stack.scoped(|stack| {
            stack.translate(config.grid_origin.x, config.grid_origin.y);
            let to_world = *stack.current();

            for tile in grid.tiles() {
                let mut world = Tile::from_corners(
                    to_world.multiply_vector(tile.top_left()),
                    to_world.multiply_vector(tile.bottom_right()),
                );
                if let Some(snapper) = &snapper {
                    world = snapper.snap_tile(&world);
                }
                let corners = world.corners();
                mesh.push_quad(match config.vertex_policy {
                    VertexPolicy::Exact => corners,
                    VertexPolicy::Truncate => corners.map(|c| c.trunc()),
                });
            }
            Ok(())
        })?;

        self.stack.ensure_balanced()?;

        let view_projection = self.projection * camera_matrix.affine_inverse()?;

        Ok(FrameOutput {
            vertices: self.mesh.vertices(),
            indices: &self.indices,
            view_projection,
            physical: self.config.physical_viewport(),
        })
    }

    /// Builds the frame for `camera` and submits it to `sink`.
    pub fn render(&mut self, camera: &Camera, sink: &mut dyn VertexSink) -> Result<()> {
        let frame = self.build(camera)?;
        sink.submit(&frame);
        Ok(())
    }
}
