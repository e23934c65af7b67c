//! Pinion Loader - Startup profile loading
//!
//! Reads the on-disk profile folder (one JSON file per device),
//! validates pin bindings, and builds the token directory. Loading
//! completes before the server accepts traffic; the request path never
//! touches the filesystem.

pub mod format;
pub mod load;

pub use format::*;
pub use load::*;
