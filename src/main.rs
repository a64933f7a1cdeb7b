use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use reef_scene::animation::{OrbitAnimator, SwayAnimator};
use reef_scene::cli::Cli;
use reef_scene::config::SceneConfig;
use reef_scene::core::{
    Button, Clock, FixedStepClock, FrameClock, FrameScheduler, InputTask, LoadQueue,
    ScriptedController,
};
use reef_scene::frame::FrameInfo;
use reef_scene::loaders::{load_terrain_or_flat, GltfModelSource, ModelSource, ProceduralModelSource};
use reef_scene::renderer::{HeadlessRenderer, RenderTask};
use reef_scene::scenes::{build_reef, Reef};
use reef_scene::snapshot::SceneSnapshot;
use reef_scene::terrain::{Terrain, TerrainDescriptor};
use reef_scene::types::Species;
use reef_scene::world::World;

/// Sample count per side of the procedural seabed
const DUNE_SAMPLES: usize = 64;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.scene_config()?;

    println!("Reef scene - press 'c' frames: {:?}", cli.toggle_overlay_at);

    let terrain = Rc::new(build_terrain(&cli, &config)?);
    let models: Rc<dyn ModelSource> = match &cli.assets {
        Some(dir) => Rc::new(GltfModelSource::new(dir)),
        None => Rc::new(ProceduralModelSource),
    };

    let loads = LoadQueue::new();
    let mut world = World::new();
    let reef = build_reef(
        &config,
        terrain,
        models,
        &loads.spawner(),
        &mut world.scene,
        config.rng(),
    );

    let (last, frames_run) = match cli.fixed_step {
        Some(step) => run_frames(FixedStepClock::new(step), loads, &mut world, &cli, &config, None),
        None => {
            let pacing = Duration::try_from_secs_f32(1.0 / config.refresh_hz)
                .with_context(|| format!("Invalid refresh rate {} Hz", config.refresh_hz))?;
            run_frames(Clock::new(), loads, &mut world, &cli, &config, Some(pacing))
        }
    };

    let last = last.unwrap_or(FrameInfo::new(0, 0.0, 0.0));
    print_summary(&reef, &config, &world, &last, frames_run);

    if let Some(path) = &cli.snapshot {
        SceneSnapshot::capture(&world, &last).write_json(path)?;
        println!("Snapshot written to {:?}", path);
    }

    Ok(())
}

fn build_terrain(cli: &Cli, config: &SceneConfig) -> Result<Terrain> {
    match &cli.terrain {
        Some(path) => load_terrain_or_flat(path, &config.terrain),
        None => Terrain::new(
            &TerrainDescriptor::dunes(DUNE_SAMPLES, DUNE_SAMPLES),
            config.terrain.size,
        ),
    }
}

/// Input, then orbit, then sway, then render, every frame.
/// Returns the last frame and how many frames ran.
fn run_frames<C: FrameClock>(
    clock: C,
    loads: LoadQueue,
    world: &mut World,
    cli: &Cli,
    config: &SceneConfig,
    pacing: Option<Duration>,
) -> (Option<FrameInfo>, u64) {
    let controller = ScriptedController::on_frames(Button::KeyC, &cli.toggle_overlay_at);

    let mut scheduler = FrameScheduler::new(clock, loads)
        .with_task(InputTask::new(controller))
        .with_task(OrbitAnimator::new(Species::Shark.group_name()))
        .with_task(SwayAnimator::new(Species::Kelp.group_name(), config.sway.amplitude))
        .with_task(RenderTask::new(HeadlessRenderer::new(cli.report_every)));

    log::info!("Frame tasks: {:?}", scheduler.task_names());
    let last = scheduler.run(world, cli.frames, pacing);
    (last, scheduler.frame_number())
}

fn print_summary(reef: &Reef, config: &SceneConfig, world: &World, last: &FrameInfo, frames_run: u64) {
    println!("Ran {} frames ({:.2}s simulated)", frames_run, last.time);
    println!(
        "Entities: {}/{} loaded (kelp {}, sharks {}, treasure {})",
        reef.loaded(),
        Reef::expected(config),
        reef.kelp.borrow().len(),
        reef.sharks.borrow().len(),
        reef.treasure.borrow().len()
    );
    println!("Orbit phase: {:.4} rad", world.angle.angle());
}
