/// Lifecycle of an [`crate::Engine`] run.
///
/// One iteration moves `Assigning → Updating`. The loop ends in `Converged`
/// when no centroid moved beyond tolerance, or in `Exhausted` when the
/// iteration cap was hit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Assigning,
    Updating,
    Converged,
    Exhausted,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Converged | Self::Exhausted)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Assigning => write!(f, "assigning"),
            Self::Updating => write!(f, "updating"),
            Self::Converged => write!(f, "converged"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}
