use serde_json::{Map, Value};

use super::errors::ItemError;
use super::model::{validate_name, validate_price};

const NAME_FIELD: &str = "name";
const PRICE_FIELD: &str = "price";
const DELETED_FIELD: &str = "deleted";

/// A fully validated partial update of an item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemPatch {
    /// Validates every field before anything is applied.
    ///
    /// Only `name` and `price` may be patched. `deleted` is rejected whatever its
    /// value: a truthy one with `DeleteViaPatch`, anything else as an invalid field.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ItemError> {
        let mut patch = Self::default();

        for (field, value) in fields {
            match field.as_str() {
                NAME_FIELD => {
                    let name = value.as_str().ok_or(ItemError::InvalidName)?;
                    validate_name(name)?;
                    patch.name = Some(name.to_string());
                }
                PRICE_FIELD => {
                    let price = value.as_f64().ok_or(ItemError::InvalidPrice)?;
                    validate_price(price)?;
                    patch.price = Some(price);
                }
                DELETED_FIELD if is_truthy(value) => return Err(ItemError::DeleteViaPatch),
                other => return Err(ItemError::InvalidField(other.to_string())),
            }
        }

        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(values) => !values.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
