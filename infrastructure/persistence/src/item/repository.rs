use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::item::errors::ItemError;
use business::domain::item::model::{Item, ItemMutation, NewItem};
use business::domain::item::repository::ItemRepository;
use business::domain::shared::value_objects::{ItemId, Page};

#[derive(Default)]
struct ItemTable {
    /// Last id handed out. Independent of how many rows exist.
    last_id: u64,
    rows: BTreeMap<ItemId, Item>,
}

/// Process-local item store. One lock guards both the id counter and the rows.
#[derive(Default)]
pub struct ItemRepositoryInMemory {
    table: RwLock<ItemTable>,
}

impl ItemRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryInMemory {
    async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::Persistence)?;

        table.last_id += 1;
        let item = Item::from_new(ItemId::new(table.last_id), item);
        table.rows.insert(item.id, item.clone());

        tracing::debug!(item_id = %item.id, "item stored");
        Ok(item)
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        table.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn get_page(&self, page: Page) -> Result<Vec<Item>, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        Ok(page.select(table.rows.values()).cloned().collect())
    }

    async fn apply(&self, id: ItemId, mutation: ItemMutation) -> Result<Item, ItemError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::Persistence)?;

        let row = table.rows.get_mut(&id).ok_or(RepositoryError::NotFound)?;

        // Work on a copy so a rejected mutation leaves the row untouched
        let mut updated = row.clone();
        updated.apply(mutation)?;
        *row = updated.clone();

        tracing::debug!(item_id = %id, deleted = updated.deleted, "item updated");
        Ok(updated)
    }
}
