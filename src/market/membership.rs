use super::*;
use crate::Fit;
use crate::Partition;

/// Ticker listing grouped under `CLUSTER: n` headers, one ticker per line.
///
/// Labels are 1-based. Empty clusters still get a header so that label
/// numbering always matches the fitted k.
pub struct Membership<'a> {
    dataset: &'a Dataset,
    partition: Partition,
}

impl<'a> Membership<'a> {
    pub fn new(dataset: &'a Dataset, fit: &Fit) -> Self {
        Self {
            dataset,
            partition: fit.partition(),
        }
    }
    pub fn label(j: usize) -> String {
        format!("CLUSTER: {}", j + 1)
    }
}

impl std::fmt::Display for Membership<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (j, members) in self.partition.iter() {
            writeln!(f, "{}", Self::label(j))?;
            for &i in members {
                writeln!(f, "{}", self.dataset.sample(i).ticker())?;
            }
        }
        Ok(())
    }
}

/// Per-cluster size and centroid, reported back in raw feature units.
pub struct Summary<'a> {
    dataset: &'a Dataset,
    fit: &'a Fit,
}

impl<'a> Summary<'a> {
    pub fn new(dataset: &'a Dataset, fit: &'a Fit) -> Self {
        Self { dataset, fit }
    }
}

impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let partition = self.fit.partition();
        writeln!(f, "{:<16}{:>8}{:>16}{:>16}", "cluster", "size", "gain", "volatility")?;
        for (j, centroid) in self.fit.centroids().iter().enumerate() {
            let (gain, volatility) = self.dataset.scaler().inverse(centroid);
            writeln!(
                f,
                "{:<16}{:>8}{:>16.4}{:>16.4}",
                Membership::label(j),
                partition.size(j),
                gain,
                volatility
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn groups_tickers_under_one_based_labels() {
        let dataset = fixtures::quartet();
        let fit = fixtures::quartet_fit(&dataset);
        let text = Membership::new(&dataset, &fit).to_string();
        assert_eq!(text, "CLUSTER: 1\nA\nB\nCLUSTER: 2\nC\nD\n");
    }

    #[test]
    fn summary_reports_raw_centroids() {
        let dataset = fixtures::quartet();
        let fit = fixtures::quartet_fit(&dataset);
        let text = Summary::new(&dataset, &fit).to_string();
        let rows = text.lines().skip(1).collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("0.0000") && rows[0].contains("0.5000"));
        assert!(rows[1].contains("10.0000") && rows[1].contains("10.5000"));
    }
}
