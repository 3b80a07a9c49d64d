//! NetworkScope: the clouds of one network and the inputs they share.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rayon::prelude::*;
use tagcloud_core::config::TagCloudConfig;
use tagcloud_core::constants::CLOUD_NAME_PREFIX;
use tagcloud_core::errors::{require_non_empty, CloudError, CloudResult};
use tagcloud_core::types::{AttributeSelector, Item, ItemId, Population};
use tracing::{debug, info};

use crate::cloud::{CloudOutput, CloudParams, CloudTableRow, TagCloud};
use crate::text::{WordDelimiters, WordFilter};

/// One network's population, word filter, delimiters, and clouds.
///
/// The filter and delimiters are shared by every cloud in the scope.
/// Computations take `Arc` snapshots under a read lock, so a mutation made
/// while a cloud computes applies to the next computation. Each cloud sits
/// behind its own mutex: two computations of one cloud never overlap, while
/// different clouds compute in parallel.
pub struct NetworkScope {
    network: String,
    config: TagCloudConfig,
    population: RwLock<Arc<Population>>,
    filter: RwLock<Arc<WordFilter>>,
    delimiters: RwLock<Arc<WordDelimiters>>,
    clouds: DashMap<String, Arc<Mutex<TagCloud>>>,
}

impl fmt::Debug for NetworkScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkScope")
            .field("network", &self.network)
            .field("items", &self.population().len())
            .field("clouds", &self.cloud_names())
            .finish_non_exhaustive()
    }
}

impl NetworkScope {
    /// A scope over `items`, with filter and delimiters seeded from `config`.
    pub fn new(network: impl Into<String>, items: Vec<Item>, config: &TagCloudConfig) -> CloudResult<Self> {
        let network = network.into();
        require_non_empty("network", &network)?;
        let population = Population::new(items)?;
        let filter = WordFilter::from_config(&config.text);
        let delimiters = WordDelimiters::from_list(&config.text.delimiters)?;
        Ok(Self {
            network,
            config: config.clone(),
            population: RwLock::new(Arc::new(population)),
            filter: RwLock::new(Arc::new(filter)),
            delimiters: RwLock::new(Arc::new(delimiters)),
            clouds: DashMap::new(),
        })
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    pub fn population(&self) -> Arc<Population> {
        Arc::clone(&self.population.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace the population. Every cloud recomputes its background on
    /// next access.
    pub fn set_population(&self, items: Vec<Item>) -> CloudResult<()> {
        let population = Population::new(items)?;
        info!(network = %self.network, items = population.len(), "population replaced");
        *self.population.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(population);
        Ok(())
    }

    pub fn filter(&self) -> Arc<WordFilter> {
        Arc::clone(&self.filter.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn delimiters(&self) -> Arc<WordDelimiters> {
        Arc::clone(&self.delimiters.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Exclude `word` from every cloud in the scope. Returns `false` if it
    /// was already excluded.
    pub fn add_filter_word(&self, word: &str) -> bool {
        let mut guard = self.filter.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut guard).add(word)
    }

    pub fn remove_filter_word(&self, word: &str) -> bool {
        let mut guard = self.filter.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut guard).remove(word)
    }

    pub fn add_delimiter(&self, delimiter: &str) -> CloudResult<bool> {
        let mut guard = self.delimiters.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut guard).add(delimiter)
    }

    pub fn remove_delimiter(&self, delimiter: &str) -> bool {
        let mut guard = self.delimiters.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut guard).remove(delimiter)
    }

    /// Create a cloud with the scope's configured defaults.
    pub fn create_cloud(
        &self,
        name: &str,
        selection: &[ItemId],
        attributes: AttributeSelector,
    ) -> CloudResult<()> {
        let params = CloudParams::from_config(&self.config.cloud, attributes)?;
        self.create_cloud_with(name, selection, params)
    }

    /// Create a cloud with explicit parameters. Every selected item must be
    /// in the population; an existing cloud of the same name is left alone.
    pub fn create_cloud_with(&self, name: &str, selection: &[ItemId], params: CloudParams) -> CloudResult<()> {
        let cloud = TagCloud::new(name, selection, params)?;
        self.population().resolve(cloud.selection())?;
        match self.clouds.entry(name.to_string()) {
            Entry::Occupied(_) => Err(CloudError::DuplicateName {
                name: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(cloud)));
                info!(network = %self.network, cloud = name, "cloud created");
                Ok(())
            }
        }
    }

    pub fn delete_cloud(&self, name: &str) -> CloudResult<()> {
        match self.clouds.remove(name) {
            Some(_) => {
                info!(network = %self.network, cloud = name, "cloud deleted");
                Ok(())
            }
            None => Err(CloudError::CloudNotFound {
                name: name.to_string(),
            }),
        }
    }

    pub fn contains_cloud(&self, name: &str) -> bool {
        self.clouds.contains_key(name)
    }

    /// Cloud names, sorted.
    pub fn cloud_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.clouds.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    pub fn cloud_count(&self) -> usize {
        self.clouds.len()
    }

    /// First unused name of the form `Cloud_N`, N counting from 1.
    pub fn next_cloud_name(&self) -> String {
        (1u64..)
            .map(|n| format!("{CLOUD_NAME_PREFIX}{n}"))
            .find(|name| !self.clouds.contains_key(name))
            .unwrap_or_else(|| CLOUD_NAME_PREFIX.to_string())
    }

    /// Run `f` on a cloud while holding its lock.
    pub fn with_cloud<R, F>(&self, name: &str, f: F) -> CloudResult<R>
    where
        F: FnOnce(&mut TagCloud) -> CloudResult<R>,
    {
        let cloud = self.cloud_handle(name)?;
        let mut guard = lock(&cloud);
        f(&mut guard)
    }

    /// Compute one cloud against the current population, filter, and
    /// delimiters.
    pub fn compute(&self, name: &str) -> CloudResult<Arc<CloudOutput>> {
        let cloud = self.cloud_handle(name)?;
        self.compute_locked(&cloud)
    }

    /// Compute every cloud in parallel. Results are sorted by cloud name.
    pub fn compute_all(&self) -> Vec<(String, CloudResult<Arc<CloudOutput>>)> {
        let clouds: Vec<(String, Arc<Mutex<TagCloud>>)> = self
            .clouds
            .iter()
            .map(|r| (r.key().clone(), Arc::clone(r.value())))
            .collect();
        debug!(network = %self.network, clouds = clouds.len(), "computing all clouds");

        let mut results: Vec<(String, CloudResult<Arc<CloudOutput>>)> = clouds
            .par_iter()
            .map(|(name, cloud)| (name.clone(), self.compute_locked(cloud)))
            .collect();
        results.sort_by(|a, b| a.0.cmp(&b.0));
        results
    }

    /// Export a cloud as a table row, computing it first if needed.
    pub fn export(&self, name: &str) -> CloudResult<CloudTableRow> {
        let output = self.compute(name)?;
        Ok(CloudTableRow::from_output(name, &output))
    }

    /// Selected items of a cloud whose text contains `word`.
    pub fn items_containing(&self, name: &str, word: &str) -> CloudResult<Vec<ItemId>> {
        let output = self.compute(name)?;
        Ok(output.items_containing(word).to_vec())
    }

    fn cloud_handle(&self, name: &str) -> CloudResult<Arc<Mutex<TagCloud>>> {
        self.clouds
            .get(name)
            .map(|r| Arc::clone(r.value()))
            .ok_or_else(|| CloudError::CloudNotFound {
                name: name.to_string(),
            })
    }

    fn compute_locked(&self, cloud: &Mutex<TagCloud>) -> CloudResult<Arc<CloudOutput>> {
        let population = self.population();
        let filter = self.filter();
        let delimiters = self.delimiters();
        lock(cloud).compute(&population, &filter, &delimiters)
    }
}

fn lock(cloud: &Mutex<TagCloud>) -> MutexGuard<'_, TagCloud> {
    cloud.lock().unwrap_or_else(PoisonError::into_inner)
}
