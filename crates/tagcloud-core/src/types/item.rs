//! Items, attribute values, and the background population.
//!
//! Items are owned by the host. The engine only ever reads their attribute
//! text; nothing in the engine mutates an item after it is handed over.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::collections::FxHashMap;
use super::version::next_version;
use crate::errors::{require_non_empty, CloudError, CloudResult};

/// Opaque host identifier for an item (a graph node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A single attribute value as the host stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    Text(String),
    TextList(Vec<String>),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl AttributeValue {
    /// Returns the text fields of a text-typed value, `None` otherwise.
    pub fn text_fields(&self) -> Option<Vec<&str>> {
        match self {
            Self::Text(s) => Some(vec![s.as_str()]),
            Self::TextList(list) => Some(list.iter().map(String::as_str).collect()),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_) | Self::TextList(_))
    }

    /// Human-readable type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::TextList(_) => "text list",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A host item: identifier plus named attributes.
///
/// Attributes are kept in a `BTreeMap` so that "all attributes" mode walks
/// them in a stable order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

/// Which attributes of an item feed the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeSelector {
    /// Every text-typed attribute on the item.
    All,
    /// Only the named attributes.
    Named(Vec<String>),
}

impl AttributeSelector {
    /// Selects a single named attribute.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(vec![name.into()])
    }

    /// Rejects an empty name list or an empty attribute name.
    pub fn validate(&self) -> CloudResult<()> {
        if let Self::Named(names) = self {
            if names.is_empty() {
                return Err(CloudError::invalid(
                    "attributes",
                    "at least one attribute name is required",
                ));
            }
            for name in names {
                require_non_empty("attribute name", name)?;
            }
        }
        Ok(())
    }
}

/// The background population: every item in scope, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Population {
    items: Vec<Item>,
    index: FxHashMap<ItemId, usize>,
    version: u64,
}

impl Population {
    /// Build a population. Duplicate item ids are rejected.
    pub fn new(items: Vec<Item>) -> CloudResult<Self> {
        let mut index = FxHashMap::default();
        index.reserve(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id, pos).is_some() {
                return Err(CloudError::invalid(
                    "items",
                    format!("duplicate item id {}", item.id),
                ));
            }
        }
        Ok(Self {
            items,
            index,
            version: next_version(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Unique per constructed population; background caches key on it.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Resolve a selection to items, in selection order.
    /// Every id must belong to the population.
    pub fn resolve(&self, ids: &[ItemId]) -> CloudResult<Vec<&Item>> {
        ids.iter()
            .map(|&id| {
                self.get(id).ok_or_else(|| {
                    CloudError::invalid("selection", format!("item {id} is not in the population"))
                })
            })
            .collect()
    }
}
