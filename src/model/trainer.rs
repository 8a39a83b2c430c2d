//! Offline training: one bulk read, one model fit, one artifact write.

use super::pipeline::{encode_features, RatingPipeline};
use crate::store::TrainingRow;
use anyhow::{anyhow, bail, Result};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::model_selection::train_test_split;
use std::collections::BTreeSet;
use tracing::info;

const N_TREES: usize = 100;
const SEED: u64 = 42;
const TEST_FRACTION: f32 = 0.2;

/// A split this small cannot produce a meaningful held-out score.
const MIN_TRAINING_ROWS: usize = 10;

/// Outcome of a training run.
pub struct TrainingSummary {
    pub pipeline: RatingPipeline,
    pub train_r2: f64,
    pub test_r2: f64,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Fit the rating pipeline on rows read back from the movies table.
///
/// 80/20 train/test split with a fixed seed; the forest is fit on the train
/// split only. Genre categories are learned from the full row set.
pub fn train(rows: &[TrainingRow]) -> Result<TrainingSummary> {
    if rows.len() < MIN_TRAINING_ROWS {
        bail!(
            "Not enough training rows: got {}, need at least {}",
            rows.len(),
            MIN_TRAINING_ROWS
        );
    }

    let genre_categories: Vec<String> = rows
        .iter()
        .map(|row| row.genre.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let features: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| {
            encode_features(
                &genre_categories,
                row.year as f64,
                row.runtime as f64,
                &row.genre,
            )
        })
        .collect();
    let targets: Vec<f64> = rows.iter().map(|row| row.rating).collect();

    let x = DenseMatrix::from_2d_vec(&features)
        .map_err(|e| anyhow!("Failed to build feature matrix: {}", e))?;
    let (x_train, x_test, y_train, y_test) =
        train_test_split(&x, &targets, TEST_FRACTION, true, Some(SEED));

    info!(
        "Fitting random forest on {} rows ({} held out), {} genre categories",
        y_train.len(),
        y_test.len(),
        genre_categories.len()
    );

    let params = RandomForestRegressorParameters::default()
        .with_n_trees(N_TREES)
        .with_seed(SEED);
    let forest = RandomForestRegressor::fit(&x_train, &y_train, params)
        .map_err(|e| anyhow!("Model fit failed: {}", e))?;

    let train_pred = forest
        .predict(&x_train)
        .map_err(|e| anyhow!("Train-set inference failed: {}", e))?;
    let test_pred = forest
        .predict(&x_test)
        .map_err(|e| anyhow!("Test-set inference failed: {}", e))?;

    let summary = TrainingSummary {
        train_r2: r2_score(&y_train, &train_pred),
        test_r2: r2_score(&y_test, &test_pred),
        train_rows: y_train.len(),
        test_rows: y_test.len(),
        pipeline: RatingPipeline::new(genre_categories, forest),
    };

    info!(
        "Train R^2: {:.3}, test R^2: {:.3}",
        summary.train_r2, summary.test_r2
    );

    Ok(summary)
}

/// Coefficient of determination.
fn r2_score(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let n = y_true.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean = y_true.iter().sum::<f64>() / n;
    let ss_tot: f64 = y_true.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(y, p)| (y - p).powi(2))
        .sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    1.0 - ss_res / ss_tot
}
