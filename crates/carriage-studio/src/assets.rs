use std::path::{Path, PathBuf};

use carriage_scene::assets::resolve;
use carriage_scene::{AssetSource, ResolvedAssets};

/// Reads the given files and resolves them into sprites.
///
/// Unreadable files are logged and dropped like undecodable ones; the scene
/// falls back to vector drawing for whatever is missing.
pub fn load_assets(horse: &[PathBuf], carriage: Option<&Path>) -> ResolvedAssets {
    let horse_sources: Vec<AssetSource> = horse.iter().filter_map(|p| read(p)).collect();
    let carriage_source = carriage.and_then(read);
    resolve(&horse_sources, carriage_source.as_ref())
}

fn read(path: &Path) -> Option<AssetSource> {
    AssetSource::from_path(path)
        .map_err(|e| log::warn!("{e}; skipping"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_fall_back_to_vector_drawing() {
        let missing = PathBuf::from("/nonexistent/carriage-studio/horse.png");
        let assets = load_assets(&[missing.clone()], Some(&missing));
        assert!(assets.use_fallback_horse());
        assert!(assets.use_fallback_carriage());
    }

    #[test]
    fn no_paths_means_no_sprites() {
        let assets = load_assets(&[], None);
        assert!(assets.horse_frames().is_empty());
        assert!(assets.carriage().is_none());
    }
}
