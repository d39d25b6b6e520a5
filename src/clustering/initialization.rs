use super::*;
use crate::ClusterError;
use crate::Feature;
use rand::Rng;

/// How the first k centroids are placed in standardized space.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Initialization {
    /// Uniform draws within the observed [min, max] of each feature.
    #[default]
    Range,
    /// Copies of k uniformly drawn points, with replacement.
    Seeded,
    /// Caller-supplied centroids. Length must equal k.
    Fixed(Vec<Point>),
}

impl Initialization {
    pub fn centroids<R>(&self, points: &[Point], k: usize, rng: &mut R) -> Result<Vec<Point>, ClusterError>
    where
        R: Rng,
    {
        match self {
            Self::Range => {
                let (lo, hi) = Self::bounds(points);
                Ok((0..k)
                    .map(|_| {
                        Point::new(
                            rng.random_range(lo[0]..=hi[0]),
                            rng.random_range(lo[1]..=hi[1]),
                        )
                    })
                    .collect())
            }
            Self::Seeded => Ok((0..k)
                .map(|_| rng.random_range(0..points.len()))
                .map(|i| points[i])
                .collect()),
            Self::Fixed(centroids) if centroids.len() == k => Ok(centroids.clone()),
            Self::Fixed(centroids) => Err(ClusterError::Initialization {
                expected: k,
                found: centroids.len(),
            }),
        }
    }

    /// Per-feature minimum and maximum over all points.
    fn bounds(points: &[Point]) -> ([Feature; 2], [Feature; 2]) {
        points.iter().fold(
            ([Feature::INFINITY; 2], [Feature::NEG_INFINITY; 2]),
            |(mut lo, mut hi), p| {
                for (f, x) in p.features().iter().enumerate() {
                    lo[f] = lo[f].min(*x);
                    hi[f] = hi[f].max(*x);
                }
                (lo, hi)
            },
        )
    }
}

impl std::fmt::Display for Initialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range => write!(f, "range"),
            Self::Seeded => write!(f, "seeded"),
            Self::Fixed(centroids) => write!(f, "fixed({})", centroids.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn square() -> Vec<Point> {
        vec![
            Point::new(-1., -2.),
            Point::new(1., -2.),
            Point::new(-1., 2.),
            Point::new(1., 2.),
        ]
    }

    #[test]
    fn range_centroids_lie_within_bounds() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let centroids = Initialization::Range.centroids(&square(), 16, rng).unwrap();
        assert_eq!(centroids.len(), 16);
        for c in centroids {
            assert!((-1. ..=1.).contains(&c.gain()));
            assert!((-2. ..=2.).contains(&c.volatility()));
        }
    }

    #[test]
    fn seeded_centroids_copy_points() {
        let points = square();
        let ref mut rng = SmallRng::seed_from_u64(2);
        let centroids = Initialization::Seeded.centroids(&points, 8, rng).unwrap();
        assert_eq!(centroids.len(), 8);
        assert!(centroids.iter().all(|c| points.contains(c)));
    }

    #[test]
    fn fixed_centroids_must_match_k() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let fixed = Initialization::Fixed(vec![Point::new(0., 0.)]);
        assert_eq!(fixed.centroids(&square(), 1, rng).unwrap(), vec![Point::new(0., 0.)]);
        assert_eq!(
            fixed.centroids(&square(), 2, rng),
            Err(ClusterError::Initialization {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn same_seed_same_centroids() {
        let a = Initialization::Range.centroids(&square(), 4, &mut SmallRng::seed_from_u64(9));
        let b = Initialization::Range.centroids(&square(), 4, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
