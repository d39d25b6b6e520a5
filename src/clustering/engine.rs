//! Lloyd iteration over a frozen set of standardized points.
//!
//! The engine borrows its points read-only and exclusively owns its
//! centroids and random source, so independent engines can run side by side
//! without sharing any mutable state.

use super::*;
use crate::ClusterError;
use crate::Dataset;
use crate::Energy;
use rand::Rng;

/// A single k-means run.
///
/// Each call to [`Engine::step`] is one assignment pass followed by one
/// update pass. [`Engine::cluster`] repeats steps until every centroid is
/// stationary within tolerance, or until the iteration cap is reached, and
/// returns a [`Fit`] either way.
pub struct Engine<'a, R> {
    points: &'a [Point],
    config: Config,
    rng: R,
    phase: Phase,
    kmeans: Vec<Point>,
    labels: Vec<usize>,
    iterations: usize,
}

impl<'a, R> Engine<'a, R>
where
    R: Rng + Sync,
{
    /// Fails unless 1 ≤ k ≤ n.
    pub fn new(points: &'a [Point], config: Config, rng: R) -> Result<Self, ClusterError> {
        let (k, n) = (config.k(), points.len());
        if k == 0 || k > n {
            return Err(ClusterError::ClusterCount { k, n });
        }
        Ok(Self {
            points,
            config,
            rng,
            phase: Phase::Uninitialized,
            kmeans: Vec::with_capacity(k),
            labels: vec![0; n],
            iterations: 0,
        })
    }

    pub fn from_dataset(dataset: &'a Dataset, config: Config, rng: R) -> Result<Self, ClusterError> {
        Self::new(dataset.points(), config, rng)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Total iterations performed across every call to `cluster`.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// Current cluster index of every point.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Places the initial centroids according to the configured policy.
    pub fn initialize(&mut self) -> Result<(), ClusterError> {
        let ref mut rng = self.rng;
        self.kmeans = self
            .config
            .init()
            .centroids(self.points, self.config.k(), rng)?;
        self.phase = Phase::Assigning;
        log::debug!("{:<32}{}", "kmeans initialized", self.config);
        Ok(())
    }

    /// Runs one iteration and returns the largest per-feature centroid movement.
    /// An uninitialized engine places its centroids first.
    pub fn step(&mut self) -> Result<Energy, ClusterError> {
        if self.phase == Phase::Uninitialized {
            self.initialize()?;
        }
        self.phase = Phase::Assigning;
        self.labels = self.assignments();
        self.phase = Phase::Updating;
        let news = self.update();
        let drift = self.drift(&news);
        self.kmeans = news;
        self.iterations += 1;
        Ok(drift)
    }

    /// Iterates to convergence or to the configured cap.
    ///
    /// A converged engine may be clustered again. It resumes from its current
    /// centroids instead of reinitializing. Hitting the cap is not an error:
    /// the fit is returned with [`Fit::converged`] set to false.
    pub fn cluster(&mut self) -> Result<Fit, ClusterError> {
        if self.phase == Phase::Uninitialized {
            self.initialize()?;
        }
        let mut converged = false;
        let mut iterations = 0;
        while iterations < self.config.limit() {
            let drift = self.step()?;
            iterations += 1;
            log::trace!("{:<32}{:<8}{:.3e}", "kmeans iterating", iterations, drift);
            if drift <= self.config.tolerance() {
                converged = true;
                break;
            }
        }
        self.labels = self.assignments();
        self.phase = if converged {
            Phase::Converged
        } else {
            Phase::Exhausted
        };
        let fit = self.fit(iterations, converged);
        if converged {
            log::info!(
                "{:<32}k={:<4}iterations={:<6}sse={:.6} rms={:.6}",
                "kmeans converged",
                fit.k(),
                iterations,
                self.sse(&self.labels),
                self.rms(&self.labels)
            );
        } else {
            log::warn!(
                "{:<32}k={:<4}stopped after {} iterations without converging",
                "kmeans exhausted",
                fit.k(),
                iterations
            );
        }
        Ok(fit)
    }

    /// New centroid positions from the current labels.
    fn update(&mut self) -> Vec<Point> {
        let mut news = self
            .centroids(&self.labels)
            .iter()
            .map(Centroid::mean)
            .collect::<Vec<Option<Point>>>();
        for j in 0..news.len() {
            if news[j].is_none() {
                news[j] = Some(self.vacate(j, &news));
            }
        }
        news.into_iter().flatten().collect()
    }

    /// Position for centroid j after it lost every member.
    ///
    /// A reseeded centroid avoids points already under another centroid,
    /// since the lower index would win that tie and leave j empty again.
    fn vacate(&mut self, j: usize, taken: &[Option<Point>]) -> Point {
        match self.config.vacancy() {
            Vacancy::Freeze => self.kmeans[j],
            Vacancy::Reseed => {
                let free = (0..self.points.len())
                    .filter(|&i| !taken.iter().flatten().any(|c| *c == self.points[i]))
                    .collect::<Vec<usize>>();
                let i = match free.len() {
                    0 => self.rng.random_range(0..self.points.len()),
                    n => free[self.rng.random_range(0..n)],
                };
                log::debug!("{:<32}centroid {} onto point {}", "kmeans reseeding", j, i);
                self.points[i]
            }
        }
    }

    fn fit(&self, iterations: usize, converged: bool) -> Fit {
        Fit::new(self.kmeans.clone(), self.labels.clone(), iterations, converged)
    }
}

impl<R> KMeans for Engine<'_, R>
where
    R: Rng + Sync,
{
    fn points(&self) -> &[Point] {
        self.points
    }
    fn kmeans(&self) -> &[Point] {
        &self.kmeans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn rejects_invalid_cluster_counts() {
        let dataset = fixtures::quartet();
        let zero = Engine::from_dataset(&dataset, Config::new(0), fixtures::rng(0));
        let many = Engine::from_dataset(&dataset, Config::new(5), fixtures::rng(0));
        assert!(matches!(zero, Err(ClusterError::ClusterCount { k: 0, n: 4 })));
        assert!(matches!(many, Err(ClusterError::ClusterCount { k: 5, n: 4 })));
    }

    #[test]
    fn quartet_separates_into_two_pairs() {
        let dataset = fixtures::quartet();
        let fit = fixtures::quartet_fit(&dataset);
        assert!(fit.converged());
        assert_eq!(fit.labels(), &[0, 0, 1, 1]);
        let ref partition = fit.partition();
        assert_eq!(partition.members(0), &[0, 1]);
        assert_eq!(partition.members(1), &[2, 3]);
    }

    #[test]
    fn walks_through_phases() {
        let dataset = fixtures::quartet();
        let mut engine = Engine::from_dataset(&dataset, Config::new(2), fixtures::rng(4)).unwrap();
        assert_eq!(engine.phase(), Phase::Uninitialized);
        engine.initialize().unwrap();
        assert_eq!(engine.phase(), Phase::Assigning);
        engine.step().unwrap();
        assert_eq!(engine.phase(), Phase::Updating);
        assert!(!engine.phase().is_terminal());
        engine.cluster().unwrap();
        assert_eq!(engine.phase(), Phase::Converged);
        assert!(engine.phase().is_terminal());
    }

    #[test]
    fn every_sample_has_one_label_in_range() {
        let dataset = fixtures::blobs(30, 11);
        for k in 1..=8 {
            for seed in 0..4 {
                for init in [Initialization::Range, Initialization::Seeded] {
                    let config = Config::new(k).with_init(init);
                    let fit = Engine::from_dataset(&dataset, config, fixtures::rng(seed))
                        .unwrap()
                        .cluster()
                        .unwrap();
                    assert_eq!(fit.labels().len(), dataset.len());
                    assert!(fit.labels().iter().all(|&j| j < k));
                    let ref partition = fit.partition();
                    let mut union = partition
                        .iter()
                        .flat_map(|(_, members)| members.iter().copied())
                        .collect::<Vec<usize>>();
                    union.sort();
                    assert_eq!(union, (0..dataset.len()).collect::<Vec<_>>());
                }
            }
        }
    }

    #[test]
    fn labels_are_nearest_centroids() {
        let dataset = fixtures::blobs(25, 3);
        let fit = Engine::from_dataset(&dataset, Config::new(4), fixtures::rng(8))
            .unwrap()
            .cluster()
            .unwrap();
        for (i, &j) in fit.labels().iter().enumerate() {
            let ref x = dataset.points()[i];
            let best = fit.centroid(j).distance(x);
            for (jj, c) in fit.centroids().iter().enumerate() {
                let d = c.distance(x);
                assert!(best <= d);
                if d == best {
                    assert!(j <= jj);
                }
            }
        }
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let points = vec![Point::new(0., 0.), Point::new(2., 0.)];
        let twins = Point::new(1., 0.);
        let config = Config::new(2).with_init(Initialization::Fixed(vec![twins, twins]));
        let mut engine = Engine::new(&points, config, fixtures::rng(0)).unwrap();
        engine.initialize().unwrap();
        assert_eq!(engine.assignments(), vec![0, 0]);
    }

    #[test]
    fn clustering_again_does_not_move_centroids() {
        let dataset = fixtures::blobs(40, 5);
        let mut engine = Engine::from_dataset(&dataset, Config::new(3), fixtures::rng(2)).unwrap();
        let first = engine.cluster().unwrap();
        let again = engine.cluster().unwrap();
        assert!(first.converged() && again.converged());
        assert_eq!(again.iterations(), 1);
        assert_eq!(first.centroids(), again.centroids());
        assert_eq!(first.labels(), again.labels());
    }

    #[test]
    fn same_seed_same_partition() {
        let dataset = fixtures::blobs(30, 9);
        for init in [Initialization::Range, Initialization::Seeded] {
            let config = Config::new(4).with_init(init);
            let a = Engine::from_dataset(&dataset, config.clone(), SmallRng::seed_from_u64(77))
                .unwrap()
                .cluster()
                .unwrap();
            let b = Engine::from_dataset(&dataset, config.clone(), SmallRng::seed_from_u64(77))
                .unwrap()
                .cluster()
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn iteration_cap_flags_non_convergence() {
        let dataset = fixtures::blobs(30, 1);
        let config = Config::new(3).with_limit(1);
        let mut engine = Engine::from_dataset(&dataset, config, fixtures::rng(6)).unwrap();
        let fit = engine.cluster().unwrap();
        assert!(!fit.converged());
        assert_eq!(fit.iterations(), 1);
        assert_eq!(engine.phase(), Phase::Exhausted);
        assert_eq!(fit.labels().len(), dataset.len());
    }

    #[test]
    fn frozen_vacancy_keeps_empty_centroid_in_place() {
        let points = vec![Point::new(0., 0.), Point::new(0., 1.)];
        let far = Point::new(100., 100.);
        let config = Config::new(2)
            .with_init(Initialization::Fixed(vec![Point::new(0., 0.5), far]))
            .with_vacancy(Vacancy::Freeze);
        let fit = Engine::new(&points, config, fixtures::rng(0))
            .unwrap()
            .cluster()
            .unwrap();
        assert!(fit.converged());
        assert_eq!(fit.centroid(1), &far);
        assert_eq!(fit.partition().size(1), 0);
    }

    #[test]
    fn reseeded_vacancy_moves_empty_centroid_onto_a_point() {
        let points = vec![Point::new(0., 0.), Point::new(0., 1.)];
        let far = Point::new(100., 100.);
        let config = Config::new(2)
            .with_init(Initialization::Fixed(vec![Point::new(0., 0.5), far]))
            .with_vacancy(Vacancy::Reseed);
        let mut engine = Engine::new(&points, config, fixtures::rng(0)).unwrap();
        engine.initialize().unwrap();
        engine.step().unwrap();
        assert!(points.contains(engine.kmean(1)));
    }

    #[test]
    fn reseeded_centroid_avoids_occupied_points() {
        let points = vec![Point::new(0., 0.), Point::new(0., 1.), Point::new(5., 5.)];
        let far = Point::new(100., 100.);
        for seed in 0..16 {
            let config = Config::new(3)
                .with_init(Initialization::Fixed(vec![Point::new(0., 0.5), far, points[2]]))
                .with_vacancy(Vacancy::Reseed);
            let mut engine = Engine::new(&points, config, fixtures::rng(seed)).unwrap();
            engine.initialize().unwrap();
            engine.step().unwrap();
            assert!(points[..2].contains(engine.kmean(1)));
            let fit = engine.cluster().unwrap();
            assert!(fit.converged());
            assert_eq!(fit.partition().occupied(), 3);
        }
    }

    #[test]
    fn stepping_uninitialized_engine_places_centroids_first() {
        let dataset = fixtures::quartet();
        let mut engine = Engine::from_dataset(&dataset, Config::new(2), fixtures::rng(1)).unwrap();
        assert_eq!(engine.phase(), Phase::Uninitialized);
        assert!(engine.step().unwrap().is_finite());
        assert_eq!(engine.phase(), Phase::Updating);
        assert_eq!(engine.kmeans().len(), 2);
        assert_eq!(engine.iterations(), 1);
    }

    #[test]
    fn stepping_with_mismatched_fixed_centroids_is_an_error() {
        let dataset = fixtures::quartet();
        let config = Config::new(2).with_init(Initialization::Fixed(vec![Point::new(0., 0.)]));
        let mut engine = Engine::from_dataset(&dataset, config, fixtures::rng(0)).unwrap();
        assert_eq!(
            engine.step(),
            Err(ClusterError::Initialization {
                expected: 2,
                found: 1
            })
        );
    }
}
