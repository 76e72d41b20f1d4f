use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{Bounds, Page};

pub struct GetAllCartsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCartsUseCase for GetAllCartsUseCaseImpl {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError> {
        let page = Page::new(params.offset, params.limit).ok_or(CartError::InvalidPage)?;
        let price = Bounds::new(params.min_price, params.max_price);
        let quantity = Bounds::new(params.min_quantity, params.max_quantity);

        self.logger.info(&format!(
            "Listing carts (offset: {}, limit: {})",
            page.offset(),
            page.limit()
        ));

        let carts: Vec<Cart> = self
            .repository
            .get_page(page)
            .await
            .inspect_err(|e| self.logger.error(&format!("Failed to list carts: {}", e)))?
            .into_iter()
            .filter(|cart| price.contains(cart.price) && quantity.contains(cart.quantity()))
            .collect();

        self.logger.info(&format!("Found {} carts", carts.len()));
        Ok(carts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::Item;
    use crate::domain::shared::value_objects::{CartId, ItemId};
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn create(&self) -> Result<Cart, RepositoryError>;
            async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError>;
            async fn get_page(&self, page: Page) -> Result<Vec<Cart>, RepositoryError>;
            async fn add_item(&self, id: CartId, item: &Item) -> Result<Cart, RepositoryError>;
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

    /// Cart `id` holding `quantities[i]` units of item `i + 1`, each priced 1.0.
    fn cart_with(id: u64, quantities: &[u64]) -> Cart {
        let mut cart = Cart::new(CartId::new(id));
        for (index, quantity) in quantities.iter().enumerate() {
            let item = Item::from_repository(
                ItemId::new(index as u64 + 1),
                format!("Item {}", index + 1),
                1.0,
                false,
            );
            for _ in 0..*quantity {
                cart.add_item(&item);
            }
        }
        cart
    }

    fn params() -> GetAllCartsParams {
        GetAllCartsParams {
            offset: 0,
            limit: 10,
            min_price: None,
            max_price: None,
            min_quantity: None,
            max_quantity: None,
        }
    }

    #[tokio::test]
    async fn should_filter_on_summed_quantity() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_page()
            .returning(|_| Ok(vec![cart_with(1, &[3, 4]), cart_with(2, &[1, 1, 1])]));

        let use_case = GetAllCartsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let carts = use_case
            .execute(GetAllCartsParams {
                min_quantity: Some(7),
                max_quantity: Some(7),
                ..params()
            })
            .await
            .unwrap();

        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].id, CartId::new(1));
    }

    #[tokio::test]
    async fn should_filter_on_cart_price() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_page()
            .returning(|_| Ok(vec![cart_with(1, &[2]), cart_with(2, &[5]), cart_with(3, &[])]));

        let use_case = GetAllCartsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let carts = use_case
            .execute(GetAllCartsParams {
                min_price: Some(1.0),
                max_price: Some(4.0),
                ..params()
            })
            .await
            .unwrap();

        let ids: Vec<CartId> = carts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CartId::new(1)]);
    }

    #[tokio::test]
    async fn should_pass_window_to_repository() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_page()
            .withf(|page| page.offset() == 5 && page.limit() == 2)
            .times(1)
            .returning(|_| Ok(vec![]));

        let use_case = GetAllCartsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let carts = use_case
            .execute(GetAllCartsParams {
                offset: 5,
                limit: 2,
                ..params()
            })
            .await
            .unwrap();

        assert!(carts.is_empty());
    }

    #[tokio::test]
    async fn should_reject_zero_limit() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_page().never();

        let use_case = GetAllCartsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllCartsParams {
                limit: 0,
                ..params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidPage));
    }
}
