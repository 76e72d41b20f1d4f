use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ItemId, Page};

use super::errors::ItemError;
use super::model::{Item, ItemMutation, NewItem};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Stores a new live item under the next id from the store's counter.
    async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError>;
    /// Returns the record even when it is soft-deleted.
    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError>;
    /// Returns the raw page window in id order, deleted records included.
    async fn get_page(&self, page: Page) -> Result<Vec<Item>, RepositoryError>;
    /// Applies `mutation` atomically: either every change commits or the record is left untouched.
    async fn apply(&self, id: ItemId, mutation: ItemMutation) -> Result<Item, ItemError>;
}
