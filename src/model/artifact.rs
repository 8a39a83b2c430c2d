//! Versioned model artifact files.
//!
//! Artifacts live in one directory as `movie_rating_model_{version}.bin`,
//! with a `movie_rating_model_latest.bin` alias overwritten on every save.
//! The version is derived from the artifacts already on disk, so retraining
//! never requires touching a constant.

use super::pipeline::RatingPipeline;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const ARTIFACT_PREFIX: &str = "movie_rating_model_";
const ARTIFACT_SUFFIX: &str = ".bin";
pub const LATEST_ARTIFACT_NAME: &str = "movie_rating_model_latest.bin";

/// Paths and version of a freshly written artifact.
#[derive(Debug)]
pub struct SavedArtifact {
    pub version: u32,
    pub versioned_path: PathBuf,
    pub latest_path: PathBuf,
}

/// Next artifact version: one past the highest versioned file present.
/// A missing or empty directory yields 1.
pub fn next_version(models_dir: &Path) -> Result<u32> {
    let mut max_version = 0;

    if models_dir.is_dir() {
        for entry in fs::read_dir(models_dir)
            .with_context(|| format!("Failed to list models directory {:?}", models_dir))?
        {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else { continue };
            let version = name
                .strip_prefix(ARTIFACT_PREFIX)
                .and_then(|rest| rest.strip_suffix(ARTIFACT_SUFFIX))
                .and_then(|v| v.parse::<u32>().ok());
            if let Some(version) = version {
                max_version = max_version.max(version);
            }
        }
    }

    Ok(max_version + 1)
}

/// Serialize the pipeline to a new versioned artifact and overwrite the
/// latest alias.
pub fn save_pipeline(models_dir: &Path, pipeline: &RatingPipeline) -> Result<SavedArtifact> {
    fs::create_dir_all(models_dir)
        .with_context(|| format!("Failed to create models directory {:?}", models_dir))?;

    let version = next_version(models_dir)?;
    let versioned_path = models_dir.join(format!(
        "{}{}{}",
        ARTIFACT_PREFIX, version, ARTIFACT_SUFFIX
    ));

    let bytes = bincode::serialize(pipeline).context("Failed to serialize model pipeline")?;
    fs::write(&versioned_path, &bytes)
        .with_context(|| format!("Failed to write model artifact {:?}", versioned_path))?;
    info!("Model saved to {:?}", versioned_path);

    let latest_path = models_dir.join(LATEST_ARTIFACT_NAME);
    fs::copy(&versioned_path, &latest_path)
        .with_context(|| format!("Failed to update latest model at {:?}", latest_path))?;
    info!("Updated latest model at {:?}", latest_path);

    Ok(SavedArtifact {
        version,
        versioned_path,
        latest_path,
    })
}

/// Load the latest artifact. Missing or corrupt files are hard errors; the
/// prediction service treats them as fatal at startup.
pub fn load_latest_pipeline(models_dir: &Path) -> Result<RatingPipeline> {
    let path = models_dir.join(LATEST_ARTIFACT_NAME);
    let bytes =
        fs::read(&path).with_context(|| format!("Failed to read model artifact {:?}", path))?;
    bincode::deserialize(&bytes)
        .with_context(|| format!("Failed to deserialize model artifact {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::train;
    use crate::store::TrainingRow;
    use tempfile::TempDir;

    fn trained_pipeline() -> RatingPipeline {
        let rows: Vec<TrainingRow> = (0..30)
            .map(|i| TrainingRow {
                year: 2000 + (i % 20),
                runtime: 90 + (i % 60),
                genre: if i % 2 == 0 { "Comedy" } else { "Drama" }.to_string(),
                rating: 5.0 + (i % 4) as f64,
            })
            .collect();
        train(&rows).unwrap().pipeline
    }

    #[test]
    fn test_version_starts_at_one() {
        let dir = TempDir::new().unwrap();
        assert_eq!(next_version(dir.path()).unwrap(), 1);
        assert_eq!(next_version(&dir.path().join("missing")).unwrap(), 1);
    }

    #[test]
    fn test_save_increments_version_and_updates_latest() {
        let dir = TempDir::new().unwrap();
        let pipeline = trained_pipeline();

        let first = save_pipeline(dir.path(), &pipeline).unwrap();
        let second = save_pipeline(dir.path(), &pipeline).unwrap();

        assert_eq!(first.version, 1);
        assert_eq!(second.version, 2);
        assert!(first.versioned_path.exists());
        assert!(second.versioned_path.exists());
        assert_eq!(
            fs::read(&second.latest_path).unwrap(),
            fs::read(&second.versioned_path).unwrap()
        );
    }

    #[test]
    fn test_latest_alias_does_not_affect_versioning() {
        let dir = TempDir::new().unwrap();
        let pipeline = trained_pipeline();

        save_pipeline(dir.path(), &pipeline).unwrap();
        // The "latest" file does not parse as a version and must be ignored.
        assert_eq!(next_version(dir.path()).unwrap(), 2);
    }

    #[test]
    fn test_load_latest_roundtrip() {
        let dir = TempDir::new().unwrap();
        let pipeline = trained_pipeline();
        save_pipeline(dir.path(), &pipeline).unwrap();

        let loaded = load_latest_pipeline(dir.path()).unwrap();

        let original = pipeline.predict(2021, 100.0, "Comedy").unwrap();
        let reloaded = loaded.predict(2021, 100.0, "Comedy").unwrap();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_load_latest_missing_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_latest_pipeline(dir.path()).is_err());
    }

    #[test]
    fn test_load_latest_corrupt_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(LATEST_ARTIFACT_NAME), b"not a model").unwrap();
        assert!(load_latest_pipeline(dir.path()).is_err());
    }
}
