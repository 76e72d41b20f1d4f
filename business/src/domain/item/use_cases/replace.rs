use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::ItemId;

pub struct ReplaceItemParams {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

#[async_trait]
pub trait ReplaceItemUseCase: Send + Sync {
    async fn execute(&self, params: ReplaceItemParams) -> Result<Item, ItemError>;
}
