//! Per-widget value storage
//!
//! A widget's values live behind one slot. Replace swaps in a whole new
//! immutable sequence; readers take a snapshot Arc and never observe a
//! sequence mid-mutation.

use std::sync::Arc;

use parking_lot::RwLock;

/// Ordered sequence of current string values for one widget
#[derive(Debug, Default)]
pub struct ValueSlot {
    current: RwLock<Arc<Vec<String>>>,
}

impl ValueSlot {
    /// Create a slot with initial values
    pub fn new(values: Vec<String>) -> Self {
        ValueSlot {
            current: RwLock::new(Arc::new(values)),
        }
    }

    /// Create a slot with no values yet
    pub fn empty() -> Self {
        ValueSlot::default()
    }

    /// Snapshot of the current sequence. Cheap: clones the Arc, not the
    /// values.
    pub fn read(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.current.read())
    }

    /// Overwrite the entire sequence. Full replace, no merge; concurrent
    /// readers keep whichever snapshot they already hold.
    pub fn replace(&self, values: Vec<String>) {
        *self.current.write() = Arc::new(values);
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }
}
