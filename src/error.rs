/// Errors that can occur while loading, scaling, clustering, or scoring.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Too few samples, or a feature with zero variance.
    Degenerate { reason: String },
    /// A single input record could not be parsed.
    Malformed { line: usize, reason: String },
    /// Requested k lies outside 1..=n.
    ClusterCount { k: usize, n: usize },
    /// Fixed initial centroids do not match k.
    Initialization { expected: usize, found: usize },
    /// Fewer than two occupied clusters, so separation is undefined.
    Inseparable { k: usize, occupied: usize },
}

impl ClusterError {
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degenerate { reason } => write!(f, "degenerate input: {}", reason),
            Self::Malformed { line, reason } => write!(f, "malformed record on line {}: {}", line, reason),
            Self::ClusterCount { k, n } => write!(f, "invalid cluster count: k = {} for {} samples", k, n),
            Self::Initialization { expected, found } => {
                write!(f, "invalid initialization: expected {} centroids, found {}", expected, found)
            }
            Self::Inseparable { k, occupied } => {
                write!(f, "silhouette undefined: k = {} with {} occupied clusters", k, occupied)
            }
        }
    }
}

impl std::error::Error for ClusterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_line() {
        let e = ClusterError::malformed(7, "expected 3 fields, found 2");
        assert_eq!(
            e.to_string(),
            "malformed record on line 7: expected 3 fields, found 2"
        );
    }

    #[test]
    fn display_reports_cluster_count() {
        let e = ClusterError::ClusterCount { k: 9, n: 4 };
        assert_eq!(e.to_string(), "invalid cluster count: k = 9 for 4 samples");
    }
}
