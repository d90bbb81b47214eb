//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - A wiremock-backed stand-in for the groups backend
//! - JSON fixtures in the backend's wire format
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod mock_server;

// Re-export commonly used utilities
pub use fixtures::*;
pub use mock_server::*;
