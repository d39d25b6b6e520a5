use super::*;
use crate::Energy;
use crate::KMEANS_ITERATION_LIMIT;
use crate::KMEANS_TOLERANCE;

/// Parameters for a single engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    k: usize,
    init: Initialization,
    vacancy: Vacancy,
    limit: usize,
    tolerance: Energy,
}

impl Config {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            init: Initialization::default(),
            vacancy: Vacancy::default(),
            limit: KMEANS_ITERATION_LIMIT,
            tolerance: KMEANS_TOLERANCE,
        }
    }
    pub fn with_k(self, k: usize) -> Self {
        Self { k, ..self }
    }
    pub fn with_init(self, init: Initialization) -> Self {
        Self { init, ..self }
    }
    pub fn with_vacancy(self, vacancy: Vacancy) -> Self {
        Self { vacancy, ..self }
    }
    pub fn with_limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }
    pub fn with_tolerance(self, tolerance: Energy) -> Self {
        Self { tolerance, ..self }
    }
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn init(&self) -> &Initialization {
        &self.init
    }
    pub fn vacancy(&self) -> Vacancy {
        self.vacancy
    }
    pub fn limit(&self) -> usize {
        self.limit
    }
    pub fn tolerance(&self) -> Energy {
        self.tolerance
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "k={} init={} vacancy={} limit={} tolerance={:e}",
            self.k, self.init, self.vacancy, self.limit, self.tolerance
        )
    }
}
