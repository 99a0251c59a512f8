use std::time::{Duration, Instant};

use anyhow::Context;
use tilesnap_engine::frame::{Camera, FramePipeline, SceneConfig, VertexPolicy};
use tilesnap_engine::grid::EdgeMode;
use tilesnap_engine::logging::{init_logging, LoggingConfig};
use tilesnap_engine::render::{FrameOutput, VertexSink, VERTICES_PER_QUAD};
use tilesnap_engine::time::FrameClock;

/// Headless sink: tracks the narrowest quad (in device pixels) and how many
/// horizontal neighbours fail to share an edge.
#[derive(Debug, Default)]
struct StatsSink {
    rows: usize,
    ratio: f32,
    frames: u64,
    vertices: usize,
    min_width_px: f32,
    open_edges: usize,
}

impl StatsSink {
    fn new(rows: usize, ratio: f32) -> Self {
        Self { rows, ratio, min_width_px: f32::INFINITY, ..Self::default() }
    }
}

impl VertexSink for StatsSink {
    fn submit(&mut self, frame: &FrameOutput<'_>) {
        self.frames += 1;
        self.vertices = frame.vertices.len();

        for quad in frame.vertices.chunks_exact(VERTICES_PER_QUAD) {
            let width = (quad[2].pos[0] - quad[0].pos[0]) * self.ratio;
            self.min_width_px = self.min_width_px.min(width);
        }

        let quads = frame.quad_count();
        let stride = self.rows * VERTICES_PER_QUAD;
        for a in (0..quads.saturating_sub(self.rows)).map(|q| q * VERTICES_PER_QUAD) {
            let b = a + stride;
            // top-right of a vs. top-left of its right neighbour
            if frame.vertices[a + 2].pos[0] < frame.vertices[b].pos[0] {
                self.open_edges += 1;
            }
        }
    }
}

fn run(name: &str, config: SceneConfig, frames: u32) -> anyhow::Result<()> {
    let velocity = config.camera_velocity;
    let rows = config.rows;
    let ratio = config.effective_pixel_ratio();

    let mut pipeline =
        FramePipeline::new(config).with_context(|| format!("invalid scene config for `{name}`"))?;
    let mut sink = StatsSink::new(rows, ratio);

    // Simulated 60 Hz loop with one long stall in the middle.
    let t0 = Instant::now();
    let mut clock = FrameClock::starting_at(t0, FrameClock::DEFAULT_MIN, FrameClock::DEFAULT_MAX);
    let mut camera = Camera::default();
    let mut now = t0;

    for frame in 0..frames {
        now += if frame == frames / 2 { Duration::from_secs(5) } else { Duration::from_millis(16) };
        let ft = clock.tick_at(now);
        camera.update(velocity, ft.elapsed);
        pipeline
            .render(&camera, &mut sink)
            .with_context(|| format!("frame {} of `{name}`", ft.frame_index))?;
    }

    let seams = pipeline.grid().seams();
    println!(
        "  {name:<24} tiles={:<4} seams={:<3} open-edges={:<5} min-width={:.2}px camera.x={:.2}",
        sink.vertices / VERTICES_PER_QUAD,
        seams.len(),
        sink.open_edges,
        sink.min_width_px,
        camera.position.x,
    );
    log::debug!("`{name}`: {} frames submitted", sink.frames);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u32>().with_context(|| format!("frame count `{arg}`"))?,
        None => 600,
    };

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          TILESNAP SEAM STUDIO          ║");
    println!("  ║  shared edges  ·  device-pixel snap    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let base = SceneConfig::default().with_tile_size(33.3, 17.3).with_device_pixel_ratio(1.5);

    run("reference 64x48", SceneConfig::default(), frames)?;
    run("independent edges", base.clone().with_edge_mode(EdgeMode::Independent), frames)?;
    run("shared edges", base.clone(), frames)?;
    run("shared + snapped", base.clone().with_pixel_snap(true), frames)?;
    run(
        "shared + truncated",
        base.with_vertex_policy(VertexPolicy::Truncate),
        frames,
    )?;

    println!();
    Ok(())
}
