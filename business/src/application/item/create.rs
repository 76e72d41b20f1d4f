use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItem};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Creating item: {}", params.name));

        let new_item = NewItem::new(params.name, params.price)?;
        let item = self
            .repository
            .insert(new_item)
            .await
            .inspect_err(|e| self.logger.error(&format!("Failed to store item: {}", e)))?;

        self.logger
            .info(&format!("Item created with id: {}", item.id));
        Ok(item)
    }
}
