//! Core domain types
//!
//! This module defines the data structures shared between the storage layer
//! and the HTTP handlers.

pub mod models;
