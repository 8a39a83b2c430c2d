use axum::extract::FromRef;

use crate::model::RatingPipeline;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedPipeline = Arc<RatingPipeline>;

/// Shared server state: the model is loaded once at startup and treated as
/// immutable for the service's lifetime. No hot-reload.
#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub pipeline: GuardedPipeline,
}

impl ServerState {
    pub fn new(config: ServerConfig, pipeline: RatingPipeline) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            pipeline: Arc::new(pipeline),
        }
    }
}

impl FromRef<ServerState> for GuardedPipeline {
    fn from_ref(input: &ServerState) -> Self {
        input.pipeline.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
