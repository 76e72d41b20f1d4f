use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct GetAllItemsParams {
    pub offset: usize,
    pub limit: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub show_deleted: bool,
}

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError>;
}
