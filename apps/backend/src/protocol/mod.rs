//! JSON shapes returned by the HTTP API.

pub mod views;

pub use views::{GameStatusResponse, GameView, StatsView, UserView};
