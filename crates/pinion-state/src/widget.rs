//! Widgets - named bindings between a pin address and stored values

use std::sync::Arc;

use pinion_core::PinAddress;

use crate::ValueSlot;

/// A widget inside one device profile. Bound to at most one pin
/// address; unbound widgets are legal and simply unreachable through
/// pin addressing.
#[derive(Debug)]
pub struct Widget {
    name: String,
    pin: Option<PinAddress>,
    values: ValueSlot,
}

impl Widget {
    pub fn new(name: impl Into<String>, pin: Option<PinAddress>) -> Self {
        Widget {
            name: name.into(),
            pin,
            values: ValueSlot::empty(),
        }
    }

    /// Create a widget carrying initial values
    pub fn with_values(
        name: impl Into<String>,
        pin: Option<PinAddress>,
        values: Vec<String>,
    ) -> Self {
        Widget {
            name: name.into(),
            pin,
            values: ValueSlot::new(values),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn pin(&self) -> Option<PinAddress> {
        self.pin
    }

    /// Snapshot of the current value sequence
    pub fn values(&self) -> Arc<Vec<String>> {
        self.values.read()
    }

    /// Atomically replace the value sequence
    pub fn replace_values(&self, values: Vec<String>) {
        self.values.replace(values);
    }
}
