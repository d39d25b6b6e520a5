pub mod elbow;
pub use elbow::*;

pub mod selection;
pub use selection::*;

pub mod series;
pub use series::*;

pub mod silhouette;
pub use silhouette::*;

pub mod sweep;
pub use sweep::*;
