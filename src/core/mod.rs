//! Business logic: response cache, normalization and services.

pub mod cache;
pub mod normalize;
pub mod services;
