//! Café Menu Domain Module
//!
//! This module contains all menu business logic, including:
//! - Domain models (MenuItem, request/filter types)
//! - Application state management (the item store)
//! - Domain errors and their HTTP error payload
//! - REST API handlers

pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
