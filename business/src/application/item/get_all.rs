use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{Bounds, Page};

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError> {
        let page = Page::new(params.offset, params.limit).ok_or(ItemError::InvalidPage)?;
        let price = Bounds::new(params.min_price, params.max_price);

        self.logger.info(&format!(
            "Listing items (offset: {}, limit: {})",
            page.offset(),
            page.limit()
        ));

        // Window first, filter second
        let items: Vec<Item> = self
            .repository
            .get_page(page)
            .await
            .inspect_err(|e| self.logger.error(&format!("Failed to list items: {}", e)))?
            .into_iter()
            .filter(|item| params.show_deleted || !item.deleted)
            .filter(|item| price.contains(item.price))
            .collect();

        self.logger.info(&format!("Found {} items", items.len()));
        Ok(items)
    }
}
