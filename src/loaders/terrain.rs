use std::path::Path;

use anyhow::{Context, Result};

use crate::config::TerrainConfig;
use crate::terrain::{Terrain, TerrainDescriptor};

/// Grid used in place of a descriptor that failed to load
const FALLBACK_SAMPLES: usize = 2;

/// Reads and validates a `{ dimx, dimz, altitudes }` JSON descriptor
pub fn load_terrain_descriptor(path: impl AsRef<Path>) -> Result<TerrainDescriptor> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read terrain descriptor {:?}", path))?;
    let descriptor: TerrainDescriptor = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse terrain descriptor {:?}", path))?;
    descriptor
        .validate()
        .with_context(|| format!("Invalid terrain descriptor {:?}", path))?;
    Ok(descriptor)
}

/// Builds the terrain from a descriptor file. Load failures are logged and
/// replaced with a flat seabed at height zero.
pub fn load_terrain_or_flat(path: impl AsRef<Path>, config: &TerrainConfig) -> Result<Terrain> {
    let path = path.as_ref();
    let descriptor = match load_terrain_descriptor(path) {
        Ok(descriptor) => {
            log::info!(
                "Loaded terrain {:?}: {}x{} samples",
                path,
                descriptor.width,
                descriptor.depth
            );
            descriptor
        }
        Err(e) => {
            log::error!("Error loading terrain: {:#}", e);
            TerrainDescriptor::flat(FALLBACK_SAMPLES, FALLBACK_SAMPLES, 0.0)
        }
    };
    Terrain::new(&descriptor, config.size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_descriptor_from_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("terrain.json");
        std::fs::write(&path, r#"{"dimx":3,"dimz":2,"altitudes":[0,1,2,3,4,5]}"#)?;

        let descriptor = load_terrain_descriptor(&path)?;
        assert_eq!(descriptor.width, 3);
        assert_eq!(descriptor.depth, 2);
        Ok(())
    }

    #[test]
    fn test_bad_sample_count_is_reported() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("terrain.json");
        std::fs::write(&path, r#"{"dimx":3,"dimz":3,"altitudes":[0,1,2]}"#)?;

        let err = load_terrain_descriptor(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("needs 9"));
        Ok(())
    }

    #[test]
    fn test_missing_file_falls_back_to_flat() -> Result<()> {
        let terrain = load_terrain_or_flat("no/such/terrain.json", &TerrainConfig::default())?;
        assert_eq!(terrain.width(), 2);
        let h = terrain.height_at(12.0, -40.0).unwrap();
        assert!(h.abs() < 1e-5);
        Ok(())
    }
}
