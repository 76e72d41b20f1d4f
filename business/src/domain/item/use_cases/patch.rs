use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::ItemId;

pub struct PatchItemParams {
    pub id: ItemId,
    /// Field name to new value, as sent by the client.
    pub fields: Map<String, Value>,
}

#[async_trait]
pub trait PatchItemUseCase: Send + Sync {
    async fn execute(&self, params: PatchItemParams) -> Result<Item, ItemError>;
}
