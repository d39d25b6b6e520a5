pub mod centroid;
pub use centroid::*;

pub mod config;
pub use config::*;

pub mod engine;
pub use engine::*;

pub mod fit;
pub use fit::*;

pub mod initialization;
pub use initialization::*;

pub mod kmeans;
pub use kmeans::*;

pub mod partition;
pub use partition::*;

pub mod phase;
pub use phase::*;

pub mod point;
pub use point::*;

pub mod scaler;
pub use scaler::*;

pub mod vacancy;
pub use vacancy::*;
