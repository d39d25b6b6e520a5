use super::*;
use crate::Energy;
use serde::Deserialize;
use serde::Serialize;

/// Best k by mean silhouette, with the full curve it was chosen from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    k: usize,
    coefficient: Energy,
    series: Series,
}

impl Selection {
    pub fn k(&self) -> usize {
        self.k
    }
    /// The maximum mean silhouette over the swept range.
    pub fn coefficient(&self) -> Energy {
        self.coefficient
    }
    pub fn series(&self) -> &Series {
        &self.series
    }
}

impl TryFrom<Series> for Selection {
    type Error = Series;
    fn try_from(series: Series) -> Result<Self, Self::Error> {
        match series.best() {
            Some((k, coefficient)) => Ok(Self {
                k,
                coefficient,
                series,
            }),
            None => Err(series),
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.series)?;
        writeln!(f, "silhouette coefficient {:.6}", self.coefficient)?;
        writeln!(f, "optimal k {}", self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_selection() {
        let series = Series::new(Score::Silhouette);
        assert_eq!(Selection::try_from(series.clone()), Err(series));
    }

    #[test]
    fn reports_curve_then_optimum() {
        let mut series = Series::new(Score::Silhouette);
        series.push(2, 0.25);
        series.push(3, 0.75);
        let selection = Selection::try_from(series).unwrap();
        assert_eq!(selection.k(), 3);
        assert_eq!(
            selection.to_string(),
            "k silhouette\n2 0.250000\n3 0.750000\nsilhouette coefficient 0.750000\noptimal k 3\n"
        );
    }
}
