//! Figma REST API access.
//!
//! Tools never talk to the network directly. They describe the call they want
//! as an [`ApiRequest`] and hand it to a [`FigmaClient`], which owns the base
//! URL, authentication and transport concerns.
//!
//! - `client.rs` - the `FigmaClient` trait and its reqwest-backed implementation
//! - `request.rs` - operation descriptors, query and body builders
//! - `error.rs` - client error types

mod client;
mod error;
mod request;

#[cfg(test)]
pub mod mock;

pub use client::{FigmaClient, HttpFigmaClient, SharedClient};
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, QueryParams, RequestBody, Verb};
