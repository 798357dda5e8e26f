//! Use cases. Each takes a connection (usually a transaction) and returns
//! `AppError` so routes can `?` straight through.

pub mod games;
pub mod users;

pub use games::{GameOutcome, GameService};
pub use users::{LoginInput, RegisterInput, Stats, UserService};
