//! Token directory - resolves device tokens to profiles
//!
//! The mapping is read-mostly: the loader publishes a complete snapshot
//! before serving starts, and request handlers only ever clone the
//! snapshot Arc. A re-publish swaps the whole map, so readers never see
//! a half-built directory.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use pinion_core::Token;

use crate::DeviceProfile;

type Snapshot = Arc<HashMap<Token, Arc<DeviceProfile>>>;

/// Token → device profile lookup
#[derive(Debug, Default)]
pub struct ProfileDirectory {
    profiles: RwLock<Snapshot>,
}

impl ProfileDirectory {
    /// Empty directory (nothing resolves)
    pub fn new() -> Self {
        ProfileDirectory::default()
    }

    /// Build a directory from loaded profiles
    pub fn from_profiles(profiles: impl IntoIterator<Item = (Token, DeviceProfile)>) -> Self {
        let map: HashMap<Token, Arc<DeviceProfile>> = profiles
            .into_iter()
            .map(|(token, profile)| (token, Arc::new(profile)))
            .collect();
        ProfileDirectory {
            profiles: RwLock::new(Arc::new(map)),
        }
    }

    /// Exact-match token lookup
    pub fn resolve(&self, token: &str) -> Option<Arc<DeviceProfile>> {
        self.snapshot().get(token).cloned()
    }

    /// Current directory snapshot
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.profiles.read())
    }

    /// Atomically swap in a new directory snapshot
    pub fn publish(&self, profiles: HashMap<Token, Arc<DeviceProfile>>) {
        let count = profiles.len();
        *self.profiles.write() = Arc::new(profiles);
        tracing::info!(profiles = count, "directory snapshot published");
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }
}
