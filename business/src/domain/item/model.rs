use serde::{Deserialize, Serialize};

use super::errors::ItemError;
use super::patch::ItemPatch;
use crate::domain::shared::value_objects::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub deleted: bool,
}

/// Validated name and price for an item that has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

impl NewItem {
    pub fn new(name: String, price: f64) -> Result<Self, ItemError> {
        validate_name(&name)?;
        validate_price(price)?;
        Ok(Self { name, price })
    }
}

/// A change the item store applies to one record under its lock.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemMutation {
    Replace(NewItem),
    Patch(ItemPatch),
    Delete,
}

impl Item {
    pub fn from_new(id: ItemId, item: NewItem) -> Self {
        Self {
            id,
            name: item.name,
            price: item.price,
            deleted: false,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ItemId, name: String, price: f64, deleted: bool) -> Self {
        Self {
            id,
            name,
            price,
            deleted,
        }
    }

    /// Applies `mutation` in place. Fails without touching any field.
    ///
    /// - Replace on a deleted item is `NotFound`.
    /// - Patch on a deleted item is `NotModified`.
    /// - Delete always succeeds; deleting twice keeps the flag set.
    pub fn apply(&mut self, mutation: ItemMutation) -> Result<(), ItemError> {
        match mutation {
            ItemMutation::Replace(replacement) => {
                if self.deleted {
                    return Err(ItemError::NotFound);
                }
                self.name = replacement.name;
                self.price = replacement.price;
            }
            ItemMutation::Patch(patch) => {
                if self.deleted {
                    return Err(ItemError::NotModified);
                }
                if let Some(name) = patch.name {
                    self.name = name;
                }
                if let Some(price) = patch.price {
                    self.price = price;
                }
            }
            ItemMutation::Delete => self.deleted = true,
        }
        Ok(())
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), ItemError> {
    if name.trim().is_empty() {
        return Err(ItemError::NameEmpty);
    }
    Ok(())
}

pub(crate) fn validate_price(price: f64) -> Result<(), ItemError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ItemError::InvalidPrice);
    }
    Ok(())
}
