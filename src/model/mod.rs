//! Rating regression model: feature pipeline, trainer, and artifact I/O.

mod artifact;
mod pipeline;
mod trainer;

pub use artifact::{load_latest_pipeline, next_version, save_pipeline, SavedArtifact};
pub use pipeline::RatingPipeline;
pub use trainer::{train, TrainingSummary};
