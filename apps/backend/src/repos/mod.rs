//! Repositories: adapter calls mapped into domain types and `DomainError`.

pub mod games;
pub mod users;
