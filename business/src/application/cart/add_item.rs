use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;

pub struct AddItemToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemToCartUseCase for AddItemToCartUseCaseImpl {
    async fn execute(&self, params: AddItemToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding item {} to cart {}",
            params.item_id, params.cart_id
        ));

        // Verify cart exists
        self.repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => {
                    self.logger
                        .error(&format!("Failed to load cart {}: {}", params.cart_id, other));
                    CartError::Repository(other)
                }
            })?;

        let item = self
            .item_repository
            .get_by_id(params.item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => {
                    self.logger
                        .error(&format!("Failed to load item {}: {}", params.item_id, other));
                    CartError::Repository(other)
                }
            })?;

        // Deleted items can stay in old carts but are not added to any cart
        if item.deleted {
            self.logger.warn(&format!(
                "Refusing to add deleted item {} to cart {}",
                item.id, params.cart_id
            ));
            return Err(CartError::ItemNotFound);
        }

        let cart = self
            .repository
            .add_item(params.cart_id, &item)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => {
                    self.logger
                        .error(&format!("Failed to update cart {}: {}", params.cart_id, other));
                    CartError::Repository(other)
                }
            })?;

        self.logger.info(&format!(
            "Cart {} now holds {} units (price: {})",
            cart.id,
            cart.quantity(),
            cart.price
        ));
        Ok(cart)
    }
}
