use crate::Energy;
use crate::Fit;
use crate::Point;

/// Sum-of-squared-errors scoring for the elbow curve.
///
/// SSE only produces a curve for inspection. It never selects k on its
/// own, since it keeps shrinking as k grows.
pub struct Elbow;

impl Elbow {
    /// Squared distance from every point to its assigned centroid, summed.
    pub fn sse(points: &[Point], fit: &Fit) -> Energy {
        debug_assert_eq!(points.len(), fit.n());
        points
            .iter()
            .zip(fit.labels().iter())
            .map(|(x, &j)| x.distance(fit.centroid(j)))
            .sum::<Energy>()
    }

    /// Squared distance from every point to the grand mean, summed.
    /// This is the SSE of any converged single-cluster fit.
    pub fn variance(points: &[Point]) -> Energy {
        let n = points.len() as Energy;
        let mean = Point::new(
            points.iter().map(Point::gain).sum::<Energy>() / n,
            points.iter().map(Point::volatility).sum::<Energy>() / n,
        );
        points.iter().map(|x| x.distance(&mean)).sum::<Energy>()
    }
}
