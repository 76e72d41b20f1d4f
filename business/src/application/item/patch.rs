use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemMutation};
use crate::domain::item::patch::ItemPatch;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::patch::{PatchItemParams, PatchItemUseCase};
use crate::domain::logger::Logger;

pub struct PatchItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PatchItemUseCase for PatchItemUseCaseImpl {
    async fn execute(&self, params: PatchItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Patching item {} ({} fields)",
            params.id,
            params.fields.len()
        ));

        let current = self
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
        if current.deleted {
            self.logger
                .warn(&format!("Item {} is deleted, patch ignored", params.id));
            return Err(ItemError::NotModified);
        }

        // The whole field set is checked before anything is written
        let patch = ItemPatch::from_fields(&params.fields).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected patch for item {}: {}", params.id, e));
        })?;
        if patch.is_empty() {
            return Ok(current);
        }

        // Deletion can still race in between; `apply` re-checks under the store lock
        let item = self
            .repository
            .apply(params.id, ItemMutation::Patch(patch))
            .await
            .map_err(|e| match e {
                ItemError::Repository(RepositoryError::NotFound) => ItemError::NotFound,
                ItemError::Repository(other) => {
                    self.logger
                        .error(&format!("Failed to patch item {}: {}", params.id, other));
                    ItemError::Repository(other)
                }
                other => other,
            })?;

        self.logger.info(&format!("Item patched: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::NewItem;
    use crate::domain::shared::value_objects::{ItemId, Page};
    use mockall::mock;
    use serde_json::{Map, Value, json};

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

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn butter(id: ItemId, deleted: bool) -> Item {
        Item::from_repository(id, "Butter".to_string(), 2.0, deleted)
    }

    fn repo_holding(deleted: bool) -> MockItemRepo {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(butter(id, deleted)));
        mock_repo.expect_apply().returning(move |id, mutation| {
            let mut item = butter(id, deleted);
            item.apply(mutation)?;
            Ok(item)
        });
        mock_repo
    }

    #[tokio::test]
    async fn should_patch_name_only() {
        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(repo_holding(false)),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                fields: fields(json!({"name": "Salted Butter"})),
            })
            .await
            .unwrap();

        assert_eq!(item.name, "Salted Butter");
        assert_eq!(item.price, 2.0);
    }

    #[tokio::test]
    async fn should_return_item_unchanged_when_no_fields() {
        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(repo_holding(false)),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                fields: Map::new(),
            })
            .await
            .unwrap();

        assert_eq!(item.name, "Butter");
        assert_eq!(item.price, 2.0);
    }

    #[tokio::test]
    async fn should_reject_deleted_flag_without_touching_repository() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(butter(id, false)));
        mock_repo.expect_apply().never();

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                fields: fields(json!({"deleted": true})),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::DeleteViaPatch));
    }

    #[tokio::test]
    async fn should_apply_nothing_when_any_field_is_unknown() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(butter(id, false)));
        mock_repo.expect_apply().never();

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                fields: fields(json!({"name": "New", "colour": "red"})),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::InvalidField(f) if f == "colour"));
    }

    #[tokio::test]
    async fn should_report_not_modified_when_item_deleted() {
        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(repo_holding(true)),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                fields: fields(json!({"price": 3.5})),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotModified));
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_apply().never();

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(42),
                fields: fields(json!({"price": 3.5})),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_prefer_not_modified_over_field_errors_for_deleted_item() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(butter(id, true)));
        mock_repo.expect_apply().never();

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                fields: fields(json!({"deleted": true})),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotModified));
    }

    #[tokio::test]
    async fn should_report_not_modified_when_deleted_between_read_and_write() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(butter(id, false)));
        mock_repo.expect_apply().returning(|id, mutation| {
            let mut item = butter(id, true);
            item.apply(mutation)?;
            Ok(item)
        });

        let use_case = PatchItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PatchItemParams {
                id: ItemId::new(1),
                fields: fields(json!({"name": "Late"})),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotModified));
    }
}
