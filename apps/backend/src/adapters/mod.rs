//! SeaORM adapters. Every function returns `DbErr`; repos map it to
//! `DomainError`.

pub mod games_sea;
pub mod users_sea;
