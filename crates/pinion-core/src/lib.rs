//! Pinion Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout Pinion:
//! - Device tokens (opaque credentials)
//! - Pin addresses and their compact text encoding
//! - The shared error taxonomy

pub mod error;
pub mod pin;
pub mod token;

pub use error::*;
pub use pin::*;
pub use token::*;
