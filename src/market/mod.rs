pub mod dataset;
pub use dataset::*;

pub mod loader;
pub use loader::*;

pub mod membership;
pub use membership::*;

pub mod sample;
pub use sample::*;
