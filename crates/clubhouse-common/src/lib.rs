//! # clubhouse-common
//!
//! Shared types, configuration, error handling, and the authorization tables
//! used across all Clubhouse crates. This is the foundation layer — no I/O,
//! no workflow logic, just primitives and decision tables.

pub mod config;
pub mod error;
pub mod models;
pub mod permissions;
pub mod validation;
