use super::*;
use crate::Energy;
use rayon::prelude::*;

/// Lloyd's k-means over standardized points.
///
/// Implementors expose the data and the current centroids. Everything else
/// (nearest-centroid search, assignment pass, centroid accumulation, drift
/// and error) is provided in terms of [`KMeans::distance`].
pub trait KMeans: Sync {
    /// Returns the data points to cluster.
    fn points(&self) -> &[Point];
    /// Returns current centroid positions.
    fn kmeans(&self) -> &[Point];

    /// Squared Euclidean distance between two points.
    fn distance(&self, a: &Point, b: &Point) -> Energy {
        a.distance(b)
    }
    fn k(&self) -> usize {
        self.kmeans().len()
    }
    fn n(&self) -> usize {
        self.points().len()
    }
    fn point(&self, i: usize) -> &Point {
        &self.points()[i]
    }
    fn kmean(&self, j: usize) -> &Point {
        &self.kmeans()[j]
    }

    /// Finds nearest centroid for a point. Ties resolve to the lowest index.
    fn neighbor(&self, i: usize) -> (usize, Energy) {
        let ref x = self.point(i);
        self.kmeans()
            .iter()
            .enumerate()
            .map(|(j, c)| (j, self.distance(c, x)))
            .inspect(|(_, d)| debug_assert!(d.is_finite()))
            .fold((0, Energy::INFINITY), |best, next| {
                if next.1 < best.1 { next } else { best }
            })
    }

    /// Nearest-centroid index for every point.
    fn assignments(&self) -> Vec<usize> {
        (0..self.n())
            .into_par_iter()
            .map(|i| self.neighbor(i).0)
            .collect::<Vec<usize>>()
    }

    /// Accumulates members of each cluster in point order.
    fn centroids(&self, assignments: &[usize]) -> Vec<Centroid> {
        let mut centroids = vec![Centroid::default(); self.k()];
        for (i, &j) in assignments.iter().enumerate() {
            centroids[j] = centroids[j].absorb(self.point(i));
        }
        centroids
    }

    /// Largest per-feature movement between current and proposed centroids.
    fn drift(&self, news: &[Point]) -> Energy {
        self.kmeans()
            .iter()
            .zip(news.iter())
            .map(|(old, new)| old.displacement(new))
            .fold(0., Energy::max)
    }

    /// Sum of squared distances from each point to its assigned centroid.
    fn sse(&self, assignments: &[usize]) -> Energy {
        assignments
            .iter()
            .enumerate()
            .map(|(i, &j)| self.distance(self.point(i), self.kmean(j)))
            .sum::<Energy>()
    }

    /// Root-mean-square error.
    fn rms(&self, assignments: &[usize]) -> Energy {
        (self.sse(assignments) / self.n() as Energy).sqrt()
    }
}
