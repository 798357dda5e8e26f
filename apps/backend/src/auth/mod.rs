//! Credentials and sessions.

pub mod password;
pub mod session;

pub use session::{MemorySessionStore, Session, SessionId, SessionStore};
