use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetItemByIdUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemByIdUseCase for GetItemByIdUseCaseImpl {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Fetching item by id: {}", params.id));

        let item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => {
                    self.logger
                        .error(&format!("Failed to load item {}: {}", params.id, other));
                    ItemError::Repository(other)
                }
            })?;

        // Soft-deleted items are invisible to direct lookup
        if item.deleted {
            self.logger
                .debug(&format!("Item {} is deleted", params.id));
            return Err(ItemError::NotFound);
        }

        Ok(item)
    }
}
