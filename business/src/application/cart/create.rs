use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::CreateCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CartId;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self) -> Result<CartId, CartError> {
        let cart = self
            .repository
            .create()
            .await
            .inspect_err(|e| self.logger.error(&format!("Failed to create cart: {}", e)))?;

        self.logger
            .info(&format!("Cart created with id: {}", cart.id));
        Ok(cart.id)
    }
}
