// config.rs - Scene population settings, loadable from JSON
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_SWAY_AMPLITUDE;

/// Slowest pacing accepted for the wall-clock loop
pub const MIN_REFRESH_HZ: f32 = 1e-3;

/// Half-open `[min, max)` range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate ranges (`min == max`) always yield `min`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }

    fn check(&self, what: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            bail!("{} range [{}, {}) is invalid", what, self.min, self.max);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Side length of the square seabed in world units
    pub size: f32,
    /// Height placement rays are cast down from
    pub ray_height: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            ray_height: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KelpConfig {
    /// Number of placements; each one yields two crossed blades
    pub count: usize,
    pub scale: ValueRange,
}

impl Default for KelpConfig {
    fn default() -> Self {
        Self {
            count: 300,
            scale: ValueRange::new(1.0, 7.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharkConfig {
    pub count: usize,
    pub radius: ValueRange,
    pub height: ValueRange,
    pub scale: ValueRange,
    /// Radians per second contributed to the shared phase
    pub angular_speed: ValueRange,
}

impl Default for SharkConfig {
    fn default() -> Self {
        Self {
            count: 30,
            radius: ValueRange::new(20.0, 60.0),
            height: ValueRange::new(12.0, 30.0),
            scale: ValueRange::new(0.2, 1.0),
            angular_speed: ValueRange::new(0.0002, 0.0102),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasureConfig {
    pub position: [f32; 3],
}

impl Default for TreasureConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 9.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwayConfig {
    pub amplitude: f32,
}

impl Default for SwayConfig {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_SWAY_AMPLITUDE,
        }
    }
}

/// Everything needed to populate and animate the reef
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub terrain: TerrainConfig,
    pub kelp: KelpConfig,
    pub sharks: SharkConfig,
    pub treasure: TreasureConfig,
    pub sway: SwayConfig,
    /// Optional RNG seed for reproducible scenes
    pub seed: Option<u64>,
    /// Frame pacing for the wall-clock loop
    pub refresh_hz: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainConfig::default(),
            kelp: KelpConfig::default(),
            sharks: SharkConfig::default(),
            treasure: TreasureConfig::default(),
            sway: SwayConfig::default(),
            seed: None,
            refresh_hz: 60.0,
        }
    }
}

impl SceneConfig {
    /// Read a JSON config file; missing fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene config {:?}", path))?;
        let config: SceneConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse scene config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.terrain.size > 0.0) {
            bail!("terrain size must be positive, got {}", self.terrain.size);
        }
        if !self.refresh_hz.is_finite() || self.refresh_hz < MIN_REFRESH_HZ {
            bail!(
                "refresh rate must be a finite value of at least {} Hz, got {}",
                MIN_REFRESH_HZ,
                self.refresh_hz
            );
        }
        self.kelp.scale.check("kelp scale")?;
        self.sharks.radius.check("shark radius")?;
        self.sharks.height.check("shark height")?;
        self.sharks.scale.check("shark scale")?;
        self.sharks.angular_speed.check("shark angular speed")?;
        if self.kelp.scale.min <= 0.0 || self.sharks.scale.min <= 0.0 {
            bail!("entity scales must be positive");
        }
        Ok(())
    }

    /// Seeded RNG, from the configured seed or a random one
    pub fn rng(&self) -> SmallRng {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("Scene RNG seed: {}", seed);
        SmallRng::seed_from_u64(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reef_layout() {
        let config = SceneConfig::default();
        assert_eq!(config.kelp.count, 300);
        assert_eq!(config.sharks.count, 30);
        assert_eq!(config.sharks.radius, ValueRange::new(20.0, 60.0));
        assert_eq!(config.treasure.position, [0.0, 9.0, 0.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SceneConfig =
            serde_json::from_str(r#"{ "seed": 7, "sharks": { "count": 3 } }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sharks.count, 3);
        assert_eq!(config.sharks.height, ValueRange::new(12.0, 30.0));
        assert_eq!(config.kelp.count, 300);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = SceneConfig::default();
        config.sharks.radius = ValueRange::new(60.0, 20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_refresh_rate_bounds() {
        let mut config = SceneConfig::default();
        for hz in [0.0, -60.0, 1e-30, f32::NAN, f32::INFINITY] {
            config.refresh_hz = hz;
            assert!(config.validate().is_err(), "{} Hz should be rejected", hz);
        }
        config.refresh_hz = MIN_REFRESH_HZ;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_value_range_sample_bounds() {
        let mut rng = SmallRng::seed_from_u64(1);
        let range = ValueRange::new(0.2, 1.0);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!((0.2..1.0).contains(&v));
        }
        assert_eq!(ValueRange::new(3.0, 3.0).sample(&mut rng), 3.0);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let config = SceneConfig {
            seed: Some(42),
            ..SceneConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
