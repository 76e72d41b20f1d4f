use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::ItemId;

pub struct DeleteItemParams {
    pub id: ItemId,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    /// Soft-deletes the item and returns the deleted record.
    async fn execute(&self, params: DeleteItemParams) -> Result<Item, ItemError>;
}
