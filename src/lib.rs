//! Deterministic ranking and recommendation engine for developer profiles.
//!
//! Repository facts are filtered and ranked, turned into advisory
//! suggestions, and combined with the person's declared intent into
//! heuristic recommendations. Nothing is applied automatically: callers
//! apply approved items through [`services::apply_suggestion`] and
//! [`services::apply_recommendation`].

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
