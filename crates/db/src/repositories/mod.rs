//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept the pool as the first argument.

pub mod prediction_repo;

pub use prediction_repo::PredictionRepo;
