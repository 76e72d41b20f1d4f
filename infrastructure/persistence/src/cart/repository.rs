use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::shared::value_objects::{CartId, Page};

#[derive(Default)]
struct CartTable {
    last_id: u64,
    rows: BTreeMap<CartId, Arc<Mutex<Cart>>>,
}

/// Process-local cart store.
///
/// The table lock guards the id counter and the set of carts. Each cart has its
/// own mutex, so additions to one cart are serialised while other carts stay
/// available.
#[derive(Default)]
pub struct CartRepositoryInMemory {
    table: RwLock<CartTable>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    fn row(&self, id: CartId) -> Result<Arc<Mutex<Cart>>, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        table.rows.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }
}

fn snapshot(row: &Mutex<Cart>) -> Result<Cart, RepositoryError> {
    row.lock()
        .map(|cart| cart.clone())
        .map_err(|_| RepositoryError::Persistence)
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn create(&self) -> Result<Cart, RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::Persistence)?;

        table.last_id += 1;
        let cart = Cart::new(CartId::new(table.last_id));
        table
            .rows
            .insert(cart.id, Arc::new(Mutex::new(cart.clone())));

        tracing::debug!(cart_id = %cart.id, "cart stored");
        Ok(cart)
    }

    async fn get_by_id(&self, id: CartId) -> Result<Cart, RepositoryError> {
        let row = self.row(id)?;
        snapshot(&row)
    }

    async fn get_page(&self, page: Page) -> Result<Vec<Cart>, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        page.select(table.rows.values())
            .map(|row| snapshot(row))
            .collect()
    }

    async fn add_item(&self, id: CartId, item: &Item) -> Result<Cart, RepositoryError> {
        let row = self.row(id)?;
        let mut cart = row.lock().map_err(|_| RepositoryError::Persistence)?;

        cart.add_item(item);

        tracing::debug!(cart_id = %id, item_id = %item.id, price = cart.price, "item added to cart");
        Ok(cart.clone())
    }
}
