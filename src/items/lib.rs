use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update. A field left out of the body keeps its stored value;
/// `description` uses a double option so an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_or_absent")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

fn present_or_absent<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// The ordered item collection. One write lock serializes mutations so a
/// reader never observes a half-applied create/update/delete.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        ItemStore {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the full collection in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// Appends a new item. Duplicate ids are not rejected: a second create
    /// with the same id appends a second entry, and lookups resolve to the
    /// first one.
    pub async fn create(&self, input: CreateItem) -> Item {
        let item = Item {
            id: input.id,
            name: input.name,
            description: input.description,
            completed: input.completed,
        };
        self.items.write().await.push(item.clone());
        item
    }

    /// Merges `patch` into the first item with a matching id and returns the
    /// updated item, or `None` when no item matches.
    pub async fn update(&self, id: i64, patch: UpdateItem) -> Option<Item> {
        let mut items = self.items.write().await;
        let item = items.iter_mut().find(|item| item.id == id)?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(completed) = patch.completed {
            item.completed = completed;
        }

        Some(item.clone())
    }

    /// Removes and returns the first item with a matching id, or `None`.
    pub async fn delete(&self, id: i64) -> Option<Item> {
        let mut items = self.items.write().await;
        let index = items.iter().position(|item| item.id == id)?;
        Some(items.remove(index))
    }
}
