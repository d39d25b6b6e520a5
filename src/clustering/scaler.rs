use super::*;
use crate::ClusterError;
use crate::Feature;
use crate::Sample;
use serde::Deserialize;
use serde::Serialize;

const FEATURES: [&str; 2] = ["gain", "volatility"];

/// Per-feature z-score transform.
///
/// Fitted once from the mean and sample standard deviation (divisor n - 1)
/// of each raw feature. The same transform is applied to samples and to any
/// raw-space coordinates, and [`Scaler::inverse`] maps centroids back to
/// raw units for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    mean: [Feature; 2],
    sdev: [Feature; 2],
}

impl Scaler {
    /// Fails on fewer than two samples or on a zero-variance feature.
    pub fn fit(samples: &[Sample]) -> Result<Self, ClusterError> {
        let n = samples.len();
        if n < 2 {
            return Err(ClusterError::degenerate(format!(
                "need at least 2 samples, found {}",
                n
            )));
        }
        let columns = [
            samples.iter().map(Sample::gain).collect::<Vec<Feature>>(),
            samples.iter().map(Sample::volatility).collect::<Vec<Feature>>(),
        ];
        let mut mean = [0.; 2];
        let mut sdev = [0.; 2];
        for (f, column) in columns.iter().enumerate() {
            let mu = column.iter().sum::<Feature>() / n as Feature;
            let var = column
                .iter()
                .map(|x| x - mu)
                .map(|d| d * d)
                .sum::<Feature>()
                / (n - 1) as Feature;
            let sd = var.sqrt();
            if !(sd.is_finite() && sd > 0.) {
                return Err(ClusterError::degenerate(format!(
                    "zero variance in {}",
                    FEATURES[f]
                )));
            }
            mean[f] = mu;
            sdev[f] = sd;
        }
        Ok(Self { mean, sdev })
    }
    pub fn mean(&self) -> [Feature; 2] {
        self.mean
    }
    pub fn sdev(&self) -> [Feature; 2] {
        self.sdev
    }
    pub fn transform(&self, sample: &Sample) -> Point {
        self.standardize(sample.gain(), sample.volatility())
    }
    pub fn standardize(&self, gain: Feature, volatility: Feature) -> Point {
        Point::new(
            (gain - self.mean[0]) / self.sdev[0],
            (volatility - self.mean[1]) / self.sdev[1],
        )
    }
    /// Recovers `(gain, volatility)` in raw units.
    pub fn inverse(&self, point: &Point) -> (Feature, Feature) {
        (
            point.gain() * self.sdev[0] + self.mean[0],
            point.volatility() * self.sdev[1] + self.mean[1],
        )
    }
}

impl std::fmt::Display for Scaler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "gain {:.4} ± {:.4}, volatility {:.4} ± {:.4}",
            self.mean[0], self.sdev[0], self.mean[1], self.sdev[1]
        )
    }
}
