//! CloudRegistry: network identifier -> network-scoped cloud state.
//!
//! The registry is an ordinary value owned by the host integration layer and
//! passed by reference to whatever needs it. There is no global instance.

pub mod scope;

use std::fmt;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tagcloud_core::config::TagCloudConfig;
use tagcloud_core::constants::VERSION;
use tagcloud_core::errors::{CloudError, CloudResult};
use tagcloud_core::types::Item;
use tracing::{debug, info};

pub use scope::NetworkScope;

/// Thread-safe map of network scopes.
pub struct CloudRegistry {
    config: TagCloudConfig,
    networks: DashMap<String, Arc<NetworkScope>>,
}

impl CloudRegistry {
    /// A registry whose new scopes and clouds take their defaults from `config`.
    pub fn new(config: TagCloudConfig) -> Self {
        debug!(version = VERSION, "cloud registry created");
        Self {
            config,
            networks: DashMap::new(),
        }
    }

    pub fn config(&self) -> &TagCloudConfig {
        &self.config
    }

    /// Register a network with its items. A network can be registered once.
    pub fn register_network(&self, network: &str, items: Vec<Item>) -> CloudResult<Arc<NetworkScope>> {
        match self.networks.entry(network.to_string()) {
            Entry::Occupied(_) => Err(CloudError::invalid(
                "network",
                format!("{network:?} is already registered"),
            )),
            Entry::Vacant(slot) => {
                let scope = Arc::new(NetworkScope::new(network, items, &self.config)?);
                slot.insert(Arc::clone(&scope));
                info!(network, items = scope.population().len(), "network registered");
                Ok(scope)
            }
        }
    }

    /// Drop a network and every cloud in it.
    pub fn remove_network(&self, network: &str) -> CloudResult<()> {
        match self.networks.remove(network) {
            Some(_) => {
                info!(network, "network removed");
                Ok(())
            }
            None => Err(not_found(network)),
        }
    }

    pub fn network(&self, network: &str) -> CloudResult<Arc<NetworkScope>> {
        self.networks
            .get(network)
            .map(|r| Arc::clone(r.value()))
            .ok_or_else(|| not_found(network))
    }

    pub fn contains_network(&self, network: &str) -> bool {
        self.networks.contains_key(network)
    }

    /// Registered network identifiers, sorted.
    pub fn networks(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.networks.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn network_count(&self) -> usize {
        self.networks.len()
    }
}

impl fmt::Debug for CloudRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudRegistry")
            .field("networks", &self.networks())
            .finish_non_exhaustive()
    }
}

impl Default for CloudRegistry {
    fn default() -> Self {
        Self::new(TagCloudConfig::default())
    }
}

fn not_found(network: &str) -> CloudError {
    CloudError::NetworkNotFound {
        network: network.to_string(),
    }
}
