use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemMutation, NewItem};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::replace::{ReplaceItemParams, ReplaceItemUseCase};
use crate::domain::logger::Logger;

pub struct ReplaceItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReplaceItemUseCase for ReplaceItemUseCaseImpl {
    async fn execute(&self, params: ReplaceItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Replacing item: {}", params.id));

        let replacement = NewItem::new(params.name, params.price)?;

        let item = self
            .repository
            .apply(params.id, ItemMutation::Replace(replacement))
            .await
            .map_err(|e| match e {
                ItemError::Repository(RepositoryError::NotFound) => ItemError::NotFound,
                ItemError::Repository(other) => {
                    self.logger
                        .error(&format!("Failed to replace item {}: {}", params.id, other));
                    ItemError::Repository(other)
                }
                other => other,
            })?;

        self.logger.info(&format!("Item replaced: {}", item.id));
        Ok(item)
    }
}
