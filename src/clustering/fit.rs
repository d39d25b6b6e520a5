use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Immutable result of one engine run.
///
/// Labels are the nearest final centroid for every point. A fit produced by
/// hitting the iteration cap is still complete and usable, but reports
/// `converged() == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fit {
    centroids: Vec<Point>,
    labels: Vec<usize>,
    iterations: usize,
    converged: bool,
}

impl Fit {
    pub fn new(centroids: Vec<Point>, labels: Vec<usize>, iterations: usize, converged: bool) -> Self {
        debug_assert!(labels.iter().all(|&j| j < centroids.len()));
        Self {
            centroids,
            labels,
            iterations,
            converged,
        }
    }
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
    pub fn n(&self) -> usize {
        self.labels.len()
    }
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }
    pub fn centroid(&self, j: usize) -> &Point {
        &self.centroids[j]
    }
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
    pub fn label(&self, i: usize) -> usize {
        self.labels[i]
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn converged(&self) -> bool {
        self.converged
    }
    pub fn partition(&self) -> Partition {
        Partition::from(self)
    }
}
