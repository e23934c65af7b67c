//! Device profiles - widget collections with a pin address index

use std::collections::HashMap;
use std::sync::Arc;

use pinion_core::{PinAddress, PinionError, PinionResult};

use crate::Widget;

/// One device's widgets, indexed by pin address for O(1) resolution.
///
/// Profiles are built once by the loader before serving begins; the
/// request path only reads widget identity and mutates value slots.
#[derive(Debug, Default)]
pub struct DeviceProfile {
    widgets: Vec<Arc<Widget>>,
    by_pin: HashMap<PinAddress, Arc<Widget>>,
}

impl DeviceProfile {
    /// Build a profile from its widgets. Two widgets claiming the same
    /// pin address is a loader defect and is rejected here.
    pub fn new(widgets: Vec<Widget>) -> PinionResult<Self> {
        let widgets: Vec<Arc<Widget>> = widgets.into_iter().map(Arc::new).collect();

        let mut by_pin = HashMap::new();
        for widget in &widgets {
            if let Some(pin) = widget.pin() {
                if by_pin.insert(pin, Arc::clone(widget)).is_some() {
                    return Err(PinionError::DuplicateBinding(pin));
                }
            }
        }

        Ok(DeviceProfile { widgets, by_pin })
    }

    /// Find the widget bound to an address
    pub fn find_widget(&self, addr: PinAddress) -> Option<Arc<Widget>> {
        self.by_pin.get(&addr).cloned()
    }

    pub fn widgets(&self) -> &[Arc<Widget>] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
