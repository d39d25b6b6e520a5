use super::*;

/// Cluster index → member indices, in ascending sample order.
///
/// Always derived from a label array, never stored alongside it. Every
/// sample lands in exactly one bucket; buckets may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition(Vec<Vec<usize>>);

impl Partition {
    pub fn new(k: usize, labels: &[usize]) -> Self {
        let mut buckets = vec![Vec::new(); k];
        for (i, &j) in labels.iter().enumerate() {
            buckets[j].push(i);
        }
        Self(buckets)
    }
    pub fn k(&self) -> usize {
        self.0.len()
    }
    /// Total number of samples across all buckets.
    pub fn n(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
    pub fn members(&self, j: usize) -> &[usize] {
        &self.0[j]
    }
    pub fn size(&self, j: usize) -> usize {
        self.0[j].len()
    }
    /// Number of non-empty buckets.
    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|b| !b.is_empty()).count()
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.0.iter().map(Vec::as_slice).enumerate()
    }
}

impl From<&Fit> for Partition {
    fn from(fit: &Fit) -> Self {
        Self::new(fit.k(), fit.labels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_cover_every_sample_once() {
        let partition = Partition::new(3, &[2, 0, 2, 1, 0, 2]);
        assert_eq!(partition.members(0), &[1, 4]);
        assert_eq!(partition.members(1), &[3]);
        assert_eq!(partition.members(2), &[0, 2, 5]);
        assert_eq!(partition.n(), 6);
        assert_eq!(partition.occupied(), 3);
    }

    #[test]
    fn empty_buckets_are_kept() {
        let partition = Partition::new(4, &[0, 0, 3]);
        assert_eq!(partition.k(), 4);
        assert_eq!(partition.size(1), 0);
        assert_eq!(partition.size(2), 0);
        assert_eq!(partition.occupied(), 2);
        assert_eq!(partition.iter().count(), 4);
    }
}
