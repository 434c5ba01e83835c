//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Transport error conversion
pub mod error_helpers;

/// Subscriber setup for tracing
pub mod logging;

/// Character-aware string helpers
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
