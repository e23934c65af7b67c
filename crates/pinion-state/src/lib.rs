//! Pinion State - In-memory serving state
//!
//! This crate holds everything the request path reads and mutates:
//! - Per-widget value sequences with atomic replace
//! - Widgets and their pin bindings
//! - Device profiles with an address index
//! - The token directory (atomically publishable snapshot)

pub mod directory;
pub mod profile;
pub mod values;
pub mod widget;

pub use directory::*;
pub use profile::*;
pub use values::*;
pub use widget::*;
