use crate::Arbitrary;
use crate::Feature;
use serde::Deserialize;
use serde::Serialize;

/// One instrument, identified by ticker, described by two raw features.
///
/// The percent gain is the fractional change from the first open to the
/// last close of the year. Volatility is the spread of daily
/// `(high - low) / high` ranges, so it is never negative.
///
/// Samples are immutable once constructed. Standardized coordinates live
/// alongside them in a [`crate::Dataset`], and cluster assignments are
/// carried by a [`crate::Fit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    ticker: String,
    gain: Feature,
    volatility: Feature,
}

impl Sample {
    /// Validates raw features before accepting them.
    pub fn new(ticker: impl Into<String>, gain: Feature, volatility: Feature) -> anyhow::Result<Self> {
        let ticker = ticker.into();
        if ticker.is_empty() {
            return Err(anyhow::anyhow!("empty ticker"));
        }
        if !gain.is_finite() {
            return Err(anyhow::anyhow!("non-finite gain {}", gain));
        }
        if volatility.is_nan() {
            return Err(anyhow::anyhow!("NaN volatility"));
        }
        if !volatility.is_finite() || volatility < 0. {
            return Err(anyhow::anyhow!("volatility out of range {}", volatility));
        }
        Ok(Self {
            ticker,
            gain,
            volatility,
        })
    }
    pub fn ticker(&self) -> &str {
        &self.ticker
    }
    pub fn gain(&self) -> Feature {
        self.gain
    }
    pub fn volatility(&self) -> Feature {
        self.volatility
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.ticker, self.gain, self.volatility)
    }
}

/// Parses one `<ticker> <gain> <volatility>` record.
impl TryFrom<&str> for Sample {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let fields = s.split_whitespace().collect::<Vec<&str>>();
        match fields.as_slice() {
            [ticker, gain, volatility] => {
                let gain = gain
                    .parse::<Feature>()
                    .map_err(|e| anyhow::anyhow!("invalid gain {:?}: {}", gain, e))?;
                let volatility = volatility
                    .parse::<Feature>()
                    .map_err(|e| anyhow::anyhow!("invalid volatility {:?}: {}", volatility, e))?;
                Self::new(*ticker, gain, volatility)
            }
            _ => Err(anyhow::anyhow!("expected 3 fields, found {}", fields.len())),
        }
    }
}

impl Arbitrary for Sample {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let ticker = (0..4)
            .map(|_| rng.random_range(b'A'..=b'Z') as char)
            .collect::<String>();
        Self {
            ticker,
            gain: rng.random_range(-0.5..1.5),
            volatility: rng.random_range(0.0..0.1),
        }
    }
}
