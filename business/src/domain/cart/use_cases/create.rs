use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::CartId;

#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    /// Creates an empty cart and returns only its id.
    async fn execute(&self) -> Result<CartId, CartError>;
}
