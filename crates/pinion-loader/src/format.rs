//! On-disk profile file format
//!
//! One JSON file per device:
//!
//! ```json
//! {
//!   "token": "4ae3851817194e2596cf1b7103603ef8",
//!   "widgets": [
//!     { "name": "button", "pin": "d8", "values": ["0"] },
//!     { "name": "lcd", "pin": "a15", "values": ["1", "2"] },
//!     { "name": "terminal" }
//!   ]
//! }
//! ```

use serde::Deserialize;

/// Root of a profile file
#[derive(Debug, Deserialize)]
pub struct ProfileFile {
    pub token: String,
    #[serde(default)]
    pub widgets: Vec<WidgetEntry>,
}

/// One widget declaration. `pin` is optional - unbound widgets are
/// legal. Absent `values` means the pin was never written.
#[derive(Debug, Deserialize)]
pub struct WidgetEntry {
    pub name: String,
    #[serde(default)]
    pub pin: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}
