use crate::ClusterError;
use crate::Energy;
use crate::Fit;
use crate::Partition;
use crate::Point;
use rayon::prelude::*;

/// Silhouette analysis of a single fit.
///
/// For a sample i in cluster I, cohesion a(i) is the mean squared distance
/// to the other members of I, and separation b(i) is the smallest mean
/// squared distance to the members of any other occupied cluster. The score
/// is `(b - a) / max(a, b)`, and is 0 for members of singleton clusters.
///
/// Separation needs a second occupied cluster, so construction rejects any
/// fit (including every k = 1 fit) with fewer than two.
pub struct Silhouette<'a> {
    points: &'a [Point],
    fit: &'a Fit,
    partition: Partition,
}

impl<'a> Silhouette<'a> {
    pub fn new(points: &'a [Point], fit: &'a Fit) -> Result<Self, ClusterError> {
        debug_assert_eq!(points.len(), fit.n());
        let partition = fit.partition();
        match partition.occupied() {
            occupied @ 0..=1 => Err(ClusterError::Inseparable {
                k: fit.k(),
                occupied,
            }),
            _ => Ok(Self {
                points,
                fit,
                partition,
            }),
        }
    }

    /// a(i): mean squared distance to the rest of i's own cluster.
    /// Zero for a singleton, where there is nothing to compare against.
    pub fn cohesion(&self, i: usize) -> Energy {
        let members = self.partition.members(self.fit.label(i));
        match members.len() {
            0 | 1 => 0.,
            n => self.total(i, members) / (n - 1) as Energy,
        }
    }

    /// b(i): smallest mean squared distance to another occupied cluster.
    pub fn separation(&self, i: usize) -> Energy {
        let own = self.fit.label(i);
        self.partition
            .iter()
            .filter(|(j, _)| *j != own)
            .filter(|(_, members)| !members.is_empty())
            .map(|(_, members)| self.total(i, members) / members.len() as Energy)
            .fold(Energy::INFINITY, Energy::min)
    }

    /// S(i) in [-1, 1].
    pub fn score(&self, i: usize) -> Energy {
        if self.partition.size(self.fit.label(i)) == 1 {
            return 0.;
        }
        let a = self.cohesion(i);
        let b = self.separation(i);
        match a.max(b) {
            m if m > 0. => (b - a) / m,
            _ => 0.,
        }
    }

    pub fn scores(&self) -> Vec<Energy> {
        (0..self.points.len())
            .into_par_iter()
            .map(|i| self.score(i))
            .collect::<Vec<Energy>>()
    }

    /// Mean score over every sample.
    pub fn mean(&self) -> Energy {
        self.scores().iter().sum::<Energy>() / self.points.len() as Energy
    }

    /// Sum of squared distances from i to the given members. i itself adds 0.
    fn total(&self, i: usize, members: &[usize]) -> Energy {
        let ref x = self.points[i];
        members
            .iter()
            .map(|&m| x.distance(&self.points[m]))
            .sum::<Energy>()
    }
}
