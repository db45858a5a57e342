//! HTTP surface: routing, handlers and wire types

pub mod analysis;
pub mod health;
pub mod router;
pub mod state;
pub mod tutor;
pub mod types;

pub use router::create_router;
pub use state::AppState;
