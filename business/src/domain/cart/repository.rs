use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::{CartId, Page};

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Stores an empty cart under the next id from the store's counter.
    async fn create(&self) -> Result<Cart, RepositoryError>;
    async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError>;
    /// Returns the raw page window in id order.
    async fn get_page(&self, page: Page) -> Result<Vec<Cart>, RepositoryError>;
    /// Runs [`Cart::add_item`] as one critical section for the target cart.
    async fn add_item(&self, id: CartId, item: &Item) -> Result<Cart, RepositoryError>;
}
