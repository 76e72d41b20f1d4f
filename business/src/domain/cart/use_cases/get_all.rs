use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct GetAllCartsParams {
    pub offset: usize,
    pub limit: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Bounds on the summed line quantity, not the number of lines.
    pub min_quantity: Option<u64>,
    pub max_quantity: Option<u64>,
}

#[async_trait]
pub trait GetAllCartsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllCartsParams) -> Result<Vec<Cart>, CartError>;
}
