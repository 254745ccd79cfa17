//! Core library components.
//!
//! This module contains the migration logic and the abstraction over the
//! external provider CLI that owns storage, encryption and stack lifecycle.

pub mod config;
pub mod constants;
pub mod domain;
pub mod migration;
pub mod provider;
pub mod types;
