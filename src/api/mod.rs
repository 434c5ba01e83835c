//! Legislative Yuan API layer: field translation, query building,
//! request types and the HTTP transport.

pub mod client;
pub mod fields;
pub mod models;
pub mod query;
pub mod requests;

pub use client::{ApiTransport, LyClient};
pub use fields::Field;
pub use query::QueryParams;
pub use requests::ApiRequest;
