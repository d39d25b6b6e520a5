use super::*;
use crate::ClusterError;
use std::io::BufRead;
use std::path::Path;

/// Outcome of reading a record file: accepted samples plus every rejected line.
#[derive(Debug, Default)]
pub struct Loaded {
    samples: Vec<Sample>,
    rejects: Vec<ClusterError>,
}

impl Loaded {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    pub fn rejects(&self) -> &[ClusterError] {
        &self.rejects
    }
    /// Number of malformed lines skipped during the load.
    pub fn rejected(&self) -> usize {
        self.rejects.len()
    }
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

/// Reads `<ticker> <gain> <volatility>` records, one per line.
///
/// A malformed line is logged and counted but never aborts the load.
/// Blank lines are ignored. Only I/O failures are fatal.
pub struct Loader;

impl Loader {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Loaded> {
        let path = path.as_ref();
        log::info!("{:<32}{}", "loading records", path.display());
        let file = std::fs::File::open(path)?;
        Self::read(std::io::BufReader::new(file))
    }

    pub fn read(reader: impl BufRead) -> std::io::Result<Loaded> {
        let mut loaded = Loaded::default();
        for (i, bytes) in reader.split(b'\n').enumerate() {
            let parsed = String::from_utf8(bytes?)
                .map_err(|e| anyhow::anyhow!("invalid UTF-8: {}", e.utf8_error()))
                .and_then(|line| match line.trim().is_empty() {
                    true => Ok(None),
                    false => Sample::try_from(line.as_str()).map(Some),
                });
            match parsed {
                Ok(Some(sample)) => loaded.samples.push(sample),
                Ok(None) => continue,
                Err(e) => {
                    let e = ClusterError::malformed(i + 1, e.to_string());
                    log::warn!("{}", e);
                    loaded.rejects.push(e);
                }
            }
        }
        log::info!(
            "{:<32}{} accepted, {} rejected",
            "loaded records",
            loaded.samples.len(),
            loaded.rejected()
        );
        Ok(loaded)
    }
}
