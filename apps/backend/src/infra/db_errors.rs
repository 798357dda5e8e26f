//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here so services only
//! ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::trace_ctx;

/// Prefix for the custom error adapters raise on a stale `lock_version`.
pub const OPTIMISTIC_LOCK_PREFIX: &str = "OPTIMISTIC_LOCK:";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Known unique constraints, by SQLite `table.column` or Postgres constraint name.
fn unique_conflict(msg: &str) -> Option<(ConflictKind, &'static str)> {
    if msg.contains("users.username") || msg.contains("users_username_key") {
        return Some((ConflictKind::UsernameTaken, "Username is already taken"));
    }
    None
}

#[derive(serde::Deserialize)]
struct LockInfo {
    expected: i32,
    actual: i32,
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::Custom(custom) if custom.starts_with(OPTIMISTIC_LOCK_PREFIX) => {
            let payload = &custom[OPTIMISTIC_LOCK_PREFIX.len()..];
            return match serde_json::from_str::<LockInfo>(payload) {
                Ok(info) => {
                    warn!(trace_id = %trace_id, expected = info.expected, actual = info.actual, "optimistic lock conflict");
                    DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Game was modified concurrently (expected version {}, found {}). Please retry.",
                            info.expected, info.actual
                        ),
                    )
                }
                Err(_) => {
                    warn!(trace_id = %trace_id, "optimistic lock conflict");
                    DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        "Game was modified concurrently. Please retry.",
                    )
                }
            };
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, error = %msg, "database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, "unique constraint violation");
        if let Some((kind, detail)) = unique_conflict(&msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(ConflictKind::Other("Unique".into()), "Unique constraint violation");
    }

    if mentions_sqlstate(&msg, "23503") || msg.contains("FOREIGN KEY constraint failed") {
        warn!(trace_id = %trace_id, "foreign key violation");
        return DomainError::validation(
            ValidationKind::Other("FK".into()),
            "Foreign key constraint violation",
        );
    }

    if msg.contains("timeout") || msg.contains("timed out") {
        warn!(trace_id = %trace_id, "database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, error = %msg, "unhandled database error");
    DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
