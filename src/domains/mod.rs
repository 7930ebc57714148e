//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain: tools, each wrapping one Figma REST
//! endpoint.

pub mod tools;
