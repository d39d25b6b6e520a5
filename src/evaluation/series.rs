use crate::Energy;
use serde::Deserialize;
use serde::Serialize;

/// Which model-selection metric a [`Series`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    Elbow,
    Silhouette,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Elbow => write!(f, "sse"),
            Self::Silhouette => write!(f, "silhouette"),
        }
    }
}

/// `(k, value)` pairs in ascending k, handed to plotting as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    score: Score,
    values: Vec<(usize, Energy)>,
}

impl Series {
    pub fn new(score: Score) -> Self {
        Self {
            score,
            values: Vec::new(),
        }
    }
    pub fn push(&mut self, k: usize, value: Energy) {
        debug_assert!(self.values.last().map_or(true, |(last, _)| *last < k));
        self.values.push((k, value));
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn values(&self) -> &[(usize, Energy)] {
        &self.values
    }
    pub fn get(&self, k: usize) -> Option<Energy> {
        self.values
            .iter()
            .find(|(kk, _)| *kk == k)
            .map(|(_, v)| *v)
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Largest value and its k. Ties keep the smallest k.
    pub fn best(&self) -> Option<(usize, Energy)> {
        self.values.iter().copied().fold(None, |best, (k, v)| match best {
            Some((_, top)) if v <= top => best,
            _ => Some((k, v)),
        })
    }
}

/// Plain `k value` lines under a header naming the metric.
impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "k {}", self.score)?;
        for (k, v) in self.values.iter() {
            writeln!(f, "{} {:.6}", k, v)?;
        }
        Ok(())
    }
}
