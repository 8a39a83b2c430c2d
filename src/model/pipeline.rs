//! Feature encoding plus the fitted regressor, serialized as one unit so the
//! prediction service can never pair a model with the wrong encoding.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Trained rating pipeline: numeric passthrough for {year, runtime} plus
/// one-hot encoded genre feeding a random forest regressor.
#[derive(Debug, Serialize, Deserialize)]
pub struct RatingPipeline {
    genre_categories: Vec<String>,
    forest: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl RatingPipeline {
    pub(crate) fn new(
        genre_categories: Vec<String>,
        forest: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
    ) -> Self {
        Self {
            genre_categories,
            forest,
        }
    }

    /// The genre categories seen at training time, in encoding order.
    pub fn genre_categories(&self) -> &[String] {
        &self.genre_categories
    }

    /// Predict a rating for a single (year, runtime, genre) input.
    ///
    /// Genres unseen at training time encode as all-zero, matching a one-hot
    /// encoder with an ignore-unknown policy.
    pub fn predict(&self, year: i32, runtime: f64, genre: &str) -> Result<f64> {
        let features = encode_features(&self.genre_categories, year as f64, runtime, genre);
        let x = DenseMatrix::from_2d_vec(&vec![features])
            .map_err(|e| anyhow!("Failed to build feature matrix: {}", e))?;
        let predictions = self
            .forest
            .predict(&x)
            .map_err(|e| anyhow!("Inference failed: {}", e))?;
        Ok(predictions[0])
    }
}

/// One feature row: [year, runtime, one-hot genre...].
pub(crate) fn encode_features(
    categories: &[String],
    year: f64,
    runtime: f64,
    genre: &str,
) -> Vec<f64> {
    let mut features = Vec::with_capacity(2 + categories.len());
    features.push(year);
    features.push(runtime);
    for category in categories {
        features.push(if category == genre { 1.0 } else { 0.0 });
    }
    features
}
