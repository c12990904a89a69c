//! Café Menu Library
//!
//! This library provides the core functionality for a café menu service:
//! an in-memory item store plus the REST handlers exposing it.

// Domain modules
pub mod menu;

// Infrastructure
pub mod router;
