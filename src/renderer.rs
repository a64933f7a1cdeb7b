use anyhow::Result;

use crate::core::{EveryNTicks, FrameTask, Window};
use crate::frame::FrameInfo;
use crate::types::InstanceRaw;
use crate::world::World;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frames-per-second over a rolling one second window
#[derive(Debug, Clone)]
pub struct FrameStats {
    window: Window,
    frame_count: u32,
    fps: f32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            window: Window::new(FPS_UPDATE_INTERVAL),
            frame_count: 0,
            fps: 0.0,
        }
    }

    /// Count one frame. Returns the new rate when a window closes.
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        let length = self.window.tick(delta)?;
        self.fps = self.frame_count as f32 / length;
        self.frame_count = 0;
        Some(self.fps)
    }

    /// Rate measured over the last closed window, zero before the first one
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws one frame of the world
pub trait SceneRenderer {
    fn render(&mut self, world: &World, frame: &FrameInfo, stats: &FrameStats) -> Result<()>;
}

/// Renderer without a GPU: packs the instance buffer a GPU pass would upload
/// and reports on it
pub struct HeadlessRenderer {
    instances: Vec<InstanceRaw>,
    upload_bytes: usize,
    frames_rendered: u64,
    report: EveryNTicks,
}

impl HeadlessRenderer {
    /// `report_every` frames between stats lines, zero for none
    pub fn new(report_every: u64) -> Self {
        Self {
            instances: Vec::new(),
            upload_bytes: 0,
            frames_rendered: 0,
            report: EveryNTicks::new(report_every),
        }
    }

    /// Instance records packed by the last render
    pub fn instances(&self) -> &[InstanceRaw] {
        &self.instances
    }

    pub fn upload_bytes(&self) -> usize {
        self.upload_bytes
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn render(&mut self, world: &World, frame: &FrameInfo, stats: &FrameStats) -> Result<()> {
        self.instances.clear();
        for group in world.scene.groups() {
            let group = group.borrow();
            self.instances.extend(
                group
                    .entities()
                    .iter()
                    .map(|e| InstanceRaw::new(&e.transform, e.species)),
            );
        }

        let bytes: &[u8] = bytemuck::cast_slice(&self.instances);
        self.upload_bytes = bytes.len();
        self.frames_rendered += 1;

        if self.report.tick() {
            log::info!(
                "Frame {} t={:.2}s: {} instances ({} bytes), {:.1} FPS, cockpit {}",
                frame.number,
                frame.time,
                self.instances.len(),
                self.upload_bytes,
                stats.fps(),
                if world.overlay.is_visible() { "on" } else { "off" }
            );
        }

        Ok(())
    }
}

/// Last task of the frame: updates the stats and issues exactly one render
pub struct RenderTask<R: SceneRenderer> {
    renderer: R,
    stats: FrameStats,
}

impl<R: SceneRenderer> RenderTask<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            stats: FrameStats::new(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

impl<R: SceneRenderer> FrameTask for RenderTask<R> {
    fn name(&self) -> &str {
        "render"
    }

    fn run(&mut self, frame: &FrameInfo, world: &mut World) -> Result<()> {
        if let Some(fps) = self.stats.record(frame.delta) {
            log::debug!("{:.1} FPS", fps);
        }
        self.renderer.render(world, frame, &self.stats)
    }
}
