use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemMutation};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        let item = self
            .repository
            .apply(params.id, ItemMutation::Delete)
            .await
            .map_err(|e| match e {
                ItemError::Repository(RepositoryError::NotFound) => ItemError::NotFound,
                ItemError::Repository(other) => {
                    self.logger
                        .error(&format!("Failed to delete item {}: {}", params.id, other));
                    ItemError::Repository(other)
                }
                other => other,
            })?;

        self.logger.info(&format!("Item deleted: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::NewItem;
    use crate::domain::shared::value_objects::{ItemId, Page};
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn insert(&self, item: NewItem) -> Result<Item, RepositoryError>;
            async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError>;
            async fn get_page(&self, page: Page) -> Result<Vec<Item>, RepositoryError>;
            async fn apply(&self, id: ItemId, mutation: ItemMutation) -> Result<Item, ItemError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_deleted_item() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_apply()
            .withf(|_, mutation| *mutation == ItemMutation::Delete)
            .returning(|id, mutation| {
                let mut item = Item::from_repository(id, "Yogurt".to_string(), 1.2, false);
                item.apply(mutation)?;
                Ok(item)
            });

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(DeleteItemParams { id: ItemId::new(3) })
            .await
            .unwrap();

        assert_eq!(item.id, ItemId::new(3));
        assert!(item.deleted);
    }

    #[tokio::test]
    async fn should_succeed_when_item_already_deleted() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_apply().returning(|id, mutation| {
            let mut item = Item::from_repository(id, "Yogurt".to_string(), 1.2, true);
            item.apply(mutation)?;
            Ok(item)
        });

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams { id: ItemId::new(3) })
            .await;

        assert!(result.unwrap().deleted);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_item() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_apply()
            .returning(|_, _| Err(ItemError::Repository(RepositoryError::NotFound)));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams { id: ItemId::new(8) })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }
}
