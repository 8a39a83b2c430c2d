//! Yearly discovery-and-ingestion pipeline.
//!
//! Runtime enrichment is fetched up front, then the normalization step is a
//! pure in-memory transform. This keeps the only network-dependent stage out
//! of the deterministic logic.

mod normalizer;
mod orchestrator;

pub use normalizer::{fetch_runtimes, normalize};
pub use orchestrator::{run_yearly_top, IngestReport};
