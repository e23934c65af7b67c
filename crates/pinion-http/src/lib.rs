//! Pinion HTTP - The pin value surface
//!
//! This crate implements the request path:
//! - Route pattern `/{token}/widget/{pin}` with GET and PUT
//! - Token → profile → widget resolution pipeline
//! - JSON value codec for request and response bodies
//! - Error taxonomy → status code mapping

pub mod codec;
pub mod routes;

pub use codec::*;
pub use routes::*;
