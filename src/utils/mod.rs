//! Utility functions used across the application.
//!
//! - [`alias`] - Deterministic short alias derivation

pub mod alias;
