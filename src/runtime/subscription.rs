use crate::core::NodeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::trace;

#[derive(Debug, Default)]
struct Registry {
    next_key: u64,
    listeners: HashMap<u64, NodeId>,
}

type SharedRegistry = Mutex<Registry>;

// Every update is a single insert or remove, so a poisoned registry is
// still consistent.
fn lock(registry: &SharedRegistry) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Registry of widgets that want pointer events, including presses that
/// land outside their own bounds. Every `subscribe` call gets its own
/// entry, so registrations sharing an owner id never release each other.
#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    registry: Arc<SharedRegistry>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, owner: NodeId) -> Subscription {
        let key = {
            let mut registry = lock(&self.registry);
            let key = registry.next_key;
            registry.next_key = registry.next_key.wrapping_add(1);
            registry.listeners.insert(key, owner.clone());
            key
        };
        trace!(%owner, key, "pointer subscription registered");
        Subscription {
            key,
            owner,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn is_listening(&self, owner: &str) -> bool {
        lock(&self.registry)
            .listeners
            .values()
            .any(|listener| listener.as_str() == owner)
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

/// Live registration in a `PointerRouter`; unregisters itself on drop.
#[derive(Debug)]
pub struct Subscription {
    key: u64,
    owner: NodeId,
    registry: Weak<SharedRegistry>,
}

impl Subscription {
    pub fn owner(&self) -> &NodeId {
        &self.owner
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        lock(&registry).listeners.remove(&self.key);
        trace!(owner = %self.owner, key = self.key, "pointer subscription released");
    }
}
