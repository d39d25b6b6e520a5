use crate::Energy;
use crate::Feature;
use serde::Deserialize;
use serde::Serialize;

/// A coordinate pair in standardized feature space.
///
/// Both normalized samples and centroids are `Point`s, so every distance
/// comparison happens in the same coordinate system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point([Feature; 2]);

impl Point {
    pub const fn new(gain: Feature, volatility: Feature) -> Self {
        Self([gain, volatility])
    }
    pub fn gain(&self) -> Feature {
        self.0[0]
    }
    pub fn volatility(&self) -> Feature {
        self.0[1]
    }
    pub fn features(&self) -> &[Feature; 2] {
        &self.0
    }
    /// Squared Euclidean distance.
    pub fn distance(&self, other: &Self) -> Energy {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a - b)
            .map(|d| d * d)
            .sum::<Energy>()
    }
    /// Largest per-feature absolute difference.
    pub fn displacement(&self, other: &Self) -> Energy {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0., Energy::max)
    }
}

impl From<[Feature; 2]> for Point {
    fn from(features: [Feature; 2]) -> Self {
        Self(features)
    }
}

impl From<Point> for [Feature; 2] {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.gain(), self.volatility())
    }
}
