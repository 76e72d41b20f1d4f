use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, Object)]
pub struct ItemRequest {
    /// Item name (cannot be empty)
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// Item price (non-negative)
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item identifier
    pub id: u64,
    /// Item name
    pub name: String,
    /// Item price
    pub price: f64,
    /// Whether the item has been soft-deleted
    pub deleted: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.value(),
            name: item.name,
            price: item.price,
            deleted: item.deleted,
        }
    }
}
