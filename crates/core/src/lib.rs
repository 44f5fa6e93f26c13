//! Domain logic for the glucospect prediction service.
//!
//! Pure, synchronous building blocks shared by the db and api crates:
//! request validation, feature vector construction, the loaded model
//! artifacts, and the inference service that ties them together.
//! Nothing in this crate touches HTTP or the database.

pub mod artifacts;
pub mod error;
pub mod features;
pub mod inference;
pub mod request;
pub mod request_id;
pub mod types;
pub mod validation;
