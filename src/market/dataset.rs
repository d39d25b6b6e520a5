use super::*;
use crate::ClusterError;
use crate::Point;
use crate::Scaler;

/// The full sample set together with its frozen standardization.
///
/// Points are indexed in the same order as samples. The scaler is fitted
/// exactly once, here, and every engine built from this dataset clusters
/// the same standardized coordinates.
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<Sample>,
    points: Vec<Point>,
    scaler: Scaler,
}

impl Dataset {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }
    pub fn sample(&self, i: usize) -> &Sample {
        &self.samples[i]
    }
    pub fn point(&self, i: usize) -> &Point {
        &self.points[i]
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl TryFrom<Vec<Sample>> for Dataset {
    type Error = ClusterError;
    fn try_from(samples: Vec<Sample>) -> Result<Self, Self::Error> {
        let scaler = Scaler::fit(&samples)?;
        let points = samples
            .iter()
            .map(|s| scaler.transform(s))
            .collect::<Vec<Point>>();
        log::debug!("{:<32}{}", "standardized samples", scaler);
        Ok(Self {
            samples,
            points,
            scaler,
        })
    }
}
