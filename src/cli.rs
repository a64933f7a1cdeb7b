// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::config::SceneConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "reef-scene")]
#[command(about = "Headless underwater reef scene", long_about = None)]
pub struct Cli {
    /// Terrain descriptor JSON (dimx, dimz, altitudes); procedural dunes when absent
    #[arg(long)]
    pub terrain: Option<PathBuf>,

    /// glTF asset directory laid out as <species>/<species>.gltf; placeholder meshes when absent
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Scene configuration JSON
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of kelp placements (each yields two blades)
    #[arg(long)]
    pub kelp: Option<usize>,

    /// Number of orbiting sharks
    #[arg(long)]
    pub sharks: Option<usize>,

    /// RNG seed for a reproducible scene
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many frames; runs until interrupted otherwise
    #[arg(long)]
    pub frames: Option<u64>,

    /// Advance time by a fixed number of seconds per frame instead of the wall clock
    #[arg(long = "fixed-step", value_name = "SECONDS")]
    pub fixed_step: Option<f32>,

    /// Frame pacing for the wall-clock loop
    #[arg(long = "refresh-hz", value_name = "HZ")]
    pub refresh_hz: Option<f32>,

    /// Frames on which the cockpit toggle key is pressed
    #[arg(long = "toggle-overlay-at", value_name = "FRAME", num_args = 1..)]
    pub toggle_overlay_at: Vec<u64>,

    /// Write a JSON snapshot of the scene here on exit
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Frames between stats lines, 0 to disable
    #[arg(long = "report-every", default_value = "60")]
    pub report_every: u64,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied on top.
    /// Also rejects a fixed step that would stall or reverse time.
    pub fn scene_config(&self) -> Result<SceneConfig> {
        if let Some(step) = self.fixed_step {
            if !step.is_finite() || step <= 0.0 {
                bail!("fixed step must be a positive number of seconds, got {}", step);
            }
        }

        let mut config = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        if let Some(kelp) = self.kelp {
            config.kelp.count = kelp;
        }
        if let Some(sharks) = self.sharks {
            config.sharks.count = sharks;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(hz) = self.refresh_hz {
            config.refresh_hz = hz;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["reef-scene"]);
        assert!(cli.terrain.is_none());
        assert!(cli.frames.is_none());
        assert!(cli.toggle_overlay_at.is_empty());
        assert_eq!(cli.scene_config().unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "reef-scene",
            "--kelp",
            "12",
            "--sharks",
            "3",
            "--seed",
            "99",
            "--fixed-step",
            "0.02",
            "--toggle-overlay-at",
            "5",
            "40",
        ]);
        let config = cli.scene_config().unwrap();
        assert_eq!(config.kelp.count, 12);
        assert_eq!(config.sharks.count, 3);
        assert_eq!(config.seed, Some(99));
        assert_eq!(cli.fixed_step, Some(0.02));
        assert_eq!(cli.toggle_overlay_at, vec![5, 40]);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, r#"{ "seed": 1, "kelp": { "count": 50 } }"#).unwrap();

        let cli = Cli::parse_from([
            "reef-scene",
            "--config",
            path.to_str().unwrap(),
            "--kelp",
            "7",
        ]);
        let config = cli.scene_config().unwrap();
        assert_eq!(config.kelp.count, 7);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_bad_refresh_rate_rejected() {
        let cli = Cli::parse_from(["reef-scene", "--refresh-hz", "0"]);
        assert!(cli.scene_config().is_err());

        let cli = Cli::parse_from(["reef-scene", "--refresh-hz", "1e-30"]);
        assert!(cli.scene_config().is_err());
    }

    #[test]
    fn test_bad_fixed_step_rejected() {
        for step in ["-0.5", "0", "NaN", "inf"] {
            let cli = Cli::parse_from(["reef-scene", &format!("--fixed-step={}", step)]);
            assert!(cli.scene_config().is_err(), "step {} should be rejected", step);
        }

        let cli = Cli::parse_from(["reef-scene", "--fixed-step", "0.016"]);
        assert!(cli.scene_config().is_ok());
    }
}
