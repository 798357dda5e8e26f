//! Shared helpers for the backend's test suites.
//!
//! Logging bootstrap, collision-free test data and assertions over the
//! problem+json error contract.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
