//! Infrastructure: database connection, state assembly and DbErr mapping.

pub mod db;
pub mod db_errors;
pub mod state;
