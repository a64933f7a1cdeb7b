use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use super::clock::FrameClock;
use super::controller::Controller;
use super::load_queue::LoadQueue;
use crate::frame::FrameInfo;
use crate::world::World;

/// One step of the per-frame update, run once per refresh
pub trait FrameTask {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    fn run(&mut self, frame: &FrameInfo, world: &mut World) -> Result<()>;
}

/// Owns the frame loop. Each frame it lets finished asset loads land, reads
/// the clock exactly once, then runs its tasks in order with that one timing.
pub struct FrameScheduler<C: FrameClock> {
    clock: C,
    loads: LoadQueue,
    tasks: Vec<Box<dyn FrameTask>>,
    frame_number: u64,
}

impl<C: FrameClock> FrameScheduler<C> {
    pub fn new(clock: C, loads: LoadQueue) -> Self {
        Self {
            clock,
            loads,
            tasks: Vec::new(),
            frame_number: 0,
        }
    }

    /// Append a task; tasks run in the order they were added
    pub fn with_task(mut self, task: impl FrameTask + 'static) -> Self {
        self.tasks.push(Box::new(task));
        self
    }

    pub fn push_task(&mut self, task: Box<dyn FrameTask>) {
        self.tasks.push(task);
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Frames run so far
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn loads(&self) -> &LoadQueue {
        &self.loads
    }

    /// Run a single frame. Task failures are logged and do not stop the frame.
    pub fn step(&mut self, world: &mut World) -> FrameInfo {
        let in_flight = self.loads.poll();

        let delta = self.clock.delta();
        let frame = FrameInfo::new(self.frame_number, self.clock.elapsed(), delta);

        if in_flight > 0 {
            log::trace!("Frame {}: {} asset loads in flight", frame.number, in_flight);
        }

        for task in &mut self.tasks {
            if let Err(e) = task.run(&frame, world) {
                log::error!("Task '{}' failed on frame {}: {:#}", task.name(), frame.number, e);
            }
        }

        self.frame_number += 1;
        frame
    }

    /// Run frames until `frames` have been run, or forever when `None`.
    /// With `pacing`, each frame is stretched to at least that long.
    /// Returns the last frame run, if any.
    pub fn run(
        &mut self,
        world: &mut World,
        frames: Option<u64>,
        pacing: Option<Duration>,
    ) -> Option<FrameInfo> {
        let target = frames.map(|n| self.frame_number + n);
        let mut last = None;

        while target.map_or(true, |t| self.frame_number < t) {
            let started = Instant::now();
            last = Some(self.step(world));

            if let Some(interval) = pacing {
                let spent = started.elapsed();
                if spent < interval {
                    thread::sleep(interval - spent);
                }
            }
        }

        last
    }
}

/// Feeds button presses into the world ahead of the animation tasks
pub struct InputTask<T: Controller> {
    controller: T,
}

impl<T: Controller> InputTask<T> {
    pub fn new(controller: T) -> Self {
        Self { controller }
    }
}

impl<T: Controller> FrameTask for InputTask<T> {
    fn name(&self) -> &str {
        "input"
    }

    fn run(&mut self, frame: &FrameInfo, world: &mut World) -> Result<()> {
        for button in self.controller.pressed(frame.number) {
            world.overlay.handle_button(button);
        }
        Ok(())
    }
}
