use serde::{Deserialize, Serialize};

use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::{CartId, ItemId};

/// One distinct item in a cart with its accumulated quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    /// Item name when the line was first added; later renames are not reflected.
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<CartLine>,
    /// Sum of item prices at the moment each addition happened.
    pub price: f64,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
            price: 0.0,
        }
    }

    /// Total quantity across all lines.
    pub fn quantity(&self) -> u64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Adds one unit of `item`.
    ///
    /// Bumps the quantity of the existing line for the item, or appends a new
    /// line with a name snapshot. The cart price grows by the item's current
    /// price either way and is never recomputed from the catalog.
    pub fn add_item(&mut self, item: &Item) {
        match self.items.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(CartLine {
                item_id: item.id,
                name: item.name.clone(),
                quantity: 1,
            }),
        }
        self.price += item.price;
    }
}
