//! K-means clustering of equities by annual gain and intraday volatility.
//!
//! Each instrument reduces to two raw features: the percent gain over the
//! year, and the volatility of its daily high-low range. Features are
//! standardized, clustered with Lloyd's algorithm, and scored across a range
//! of cluster counts so that a good `k` can be picked.
//!
//! ## Pipeline
//!
//! 1. **Load**: Parse `<ticker> <gain> <volatility>` records, skipping malformed lines
//! 2. **Scale**: Fit a z-score [`Scaler`] over the full sample set
//! 3. **Cluster**: Run the [`Engine`] to a [`Fit`]
//! 4. **Evaluate**: Score fits by [`Elbow`] SSE and [`Silhouette`] across a [`Sweep`]
//!
//! ## Core Types
//!
//! - [`Sample`]: One instrument's identifier and raw features
//! - [`Dataset`]: Samples with their frozen standardized [`Point`]s
//! - [`Partition`]: Cluster index → member indices, derived from a [`Fit`]
//! - [`Series`]: Per-k metric values for plotting or selection
#[cfg(feature = "cli")]
pub mod cli;
pub mod clustering;
pub mod error;
pub mod evaluation;
pub mod market;

#[cfg(test)]
mod fixtures;

pub use clustering::*;
pub use error::*;
pub use evaluation::*;
pub use market::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw or standardized feature values.
pub type Feature = f64;
/// Squared distances, SSE, and convergence displacement.
pub type Energy = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// K-MEANS CLUSTERING
// ============================================================================
/// Hard cap on Lloyd iterations before a run is reported as non-converged.
pub const KMEANS_ITERATION_LIMIT: usize = 1000;
/// Largest per-feature centroid displacement still counted as stationary.
pub const KMEANS_TOLERANCE: Energy = 1e-9;

// ============================================================================
// MODEL SELECTION
// Each candidate k is clustered independently from its own RNG stream.
// ============================================================================
/// Smallest k plotted on the elbow curve.
pub const ELBOW_K_FROM: usize = 2;
/// Largest k plotted on the elbow curve.
pub const ELBOW_K_TO: usize = 12;
/// Smallest k scored by silhouette analysis.
pub const SILHOUETTE_K_FROM: usize = 2;
/// Largest k scored by silhouette analysis.
pub const SILHOUETTE_K_TO: usize = 8;
/// Default root seed from which per-k streams are derived.
pub const SWEEP_SEED: u64 = 0x5EED;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
