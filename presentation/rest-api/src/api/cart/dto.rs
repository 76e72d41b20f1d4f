use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    /// Item identifier
    pub id: u64,
    /// Item name at the time it was first added
    pub name: String,
    /// Units of this item in the cart
    pub quantity: u64,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart identifier
    pub id: u64,
    pub items: Vec<CartLineResponse>,
    /// Accumulated price of every addition
    pub price: f64,
    /// Total units across all lines
    pub quantity: u64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.item_id.value(),
            name: line.name,
            quantity: line.quantity,
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let quantity = cart.quantity();
        Self {
            id: cart.id.value(),
            items: cart.items.into_iter().map(Into::into).collect(),
            price: cart.price,
            quantity,
        }
    }
}
