use super::*;
use crate::ClusterError;
use crate::Config;
use crate::Dataset;
use crate::Engine;
use crate::Fit;
use crate::SWEEP_SEED;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// One independent engine run per candidate k.
///
/// Runs share the dataset read-only and nothing else. Each k draws from its
/// own `SmallRng`, seeded from a hash of the root seed and k, so a sweep is
/// reproducible regardless of how rayon schedules it.
pub struct Sweep<'a> {
    dataset: &'a Dataset,
    config: Config,
    ks: RangeInclusive<usize>,
    seed: u64,
}

impl<'a> Sweep<'a> {
    pub fn new(dataset: &'a Dataset, ks: RangeInclusive<usize>) -> Self {
        Self {
            dataset,
            config: Config::new(*ks.start()),
            ks,
            seed: SWEEP_SEED,
        }
    }
    /// Template for every run. Its k is replaced per run.
    pub fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Deterministic pseudo-random stream for one k.
    fn rng(&self, k: usize) -> SmallRng {
        use std::hash::DefaultHasher;
        use std::hash::Hash;
        use std::hash::Hasher;
        let ref mut hasher = DefaultHasher::default();
        self.seed.hash(hasher);
        k.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    /// Clusters a single k.
    pub fn fit(&self, k: usize) -> Result<Fit, ClusterError> {
        let config = self.config.clone().with_k(k);
        Engine::from_dataset(self.dataset, config, self.rng(k))?.cluster()
    }

    /// Clusters every k in the range, in ascending order of k.
    pub fn fits(&self) -> Result<Vec<(usize, Fit)>, ClusterError> {
        if self.ks.is_empty() {
            return Err(ClusterError::ClusterCount {
                k: *self.ks.start(),
                n: self.dataset.len(),
            });
        }
        log::info!(
            "{:<32}k={}..={} over {} samples",
            "sweeping",
            self.ks.start(),
            self.ks.end(),
            self.dataset.len()
        );
        self.ks
            .clone()
            .into_par_iter()
            .map(|k| self.fit(k).map(|fit| (k, fit)))
            .collect::<Result<Vec<_>, _>>()
    }

    /// SSE for every k, for elbow inspection.
    pub fn elbow(&self) -> Result<Series, ClusterError> {
        let mut series = Series::new(Score::Elbow);
        for (k, fit) in self.fits()? {
            let sse = Elbow::sse(self.dataset.points(), &fit);
            log::info!("{:<32}k={:<4}sse={:.6}", "elbow", k, sse);
            series.push(k, sse);
        }
        Ok(series)
    }

    /// Mean silhouette for every k, and the k that maximizes it.
    ///
    /// A k whose fit collapsed into a single occupied cluster has no
    /// silhouette. It is logged and left out of the series.
    pub fn silhouette(&self) -> Result<Selection, ClusterError> {
        let mut series = Series::new(Score::Silhouette);
        let mut skipped = None;
        for (k, fit) in self.fits()? {
            match Silhouette::new(self.dataset.points(), &fit) {
                Ok(silhouette) => {
                    let mean = silhouette.mean();
                    log::info!("{:<32}k={:<4}mean={:.6}", "silhouette", k, mean);
                    series.push(k, mean);
                }
                Err(e) => {
                    log::warn!("{:<32}{}", "silhouette skipped", e);
                    skipped = Some(e);
                }
            }
        }
        match Selection::try_from(series) {
            Ok(selection) => {
                log::info!(
                    "{:<32}k={} coefficient={:.6}",
                    "silhouette optimum",
                    selection.k(),
                    selection.coefficient()
                );
                Ok(selection)
            }
            Err(_) => Err(skipped.unwrap_or(ClusterError::Inseparable {
                k: *self.ks.end(),
                occupied: 1,
            })),
        }
    }
}
