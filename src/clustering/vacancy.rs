/// What happens to a centroid that ends an assignment pass with no members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Vacancy {
    /// Leave the centroid where it was. It may regain members later, or never.
    #[default]
    Freeze,
    /// Move the centroid onto a uniformly drawn sample that no other
    /// centroid already sits on.
    Reseed,
}

impl std::fmt::Display for Vacancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Freeze => write!(f, "freeze"),
            Self::Reseed => write!(f, "reseed"),
        }
    }
}
