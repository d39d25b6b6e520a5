use super::*;
use crate::Feature;

/// Running mean of the points assigned to one cluster during an update pass.
///
/// Points are absorbed in index order so that re-running an unchanged
/// assignment reproduces the same centroid bit for bit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Centroid {
    sum: [Feature; 2],
    n: usize,
}

impl Centroid {
    pub fn absorb(mut self, point: &Point) -> Self {
        self.sum
            .iter_mut()
            .zip(point.features().iter())
            .for_each(|(s, x)| *s += x);
        self.n += 1;
        self
    }
    pub fn n(&self) -> usize {
        self.n
    }
    pub fn is_vacant(&self) -> bool {
        self.n == 0
    }
    /// Arithmetic mean, or `None` when nothing was absorbed.
    pub fn mean(&self) -> Option<Point> {
        match self.n {
            0 => None,
            n => Some(Point::from(self.sum.map(|s| s / n as Feature))),
        }
    }
}
