use crate::catalog;
use crate::models::{CartLine, Order, Product};

/// The three tables plus the id sequence. Nothing outside the services
/// mutates these collections directly.
#[derive(Debug)]
pub struct StoreState {
    pub products: Vec<Product>,
    pub cart: Vec<CartLine>,
    pub orders: Vec<Order>,
    next_id: u64,
}

impl StoreState {
    /// Rebuild state from persisted tables. The id sequence resumes above the
    /// highest product or order id so it can never hand out a collision.
    pub fn from_parts(products: Vec<Product>, cart: Vec<CartLine>, orders: Vec<Order>) -> Self {
        let highest = products
            .iter()
            .map(|p| p.id)
            .chain(orders.iter().map(|o| o.id))
            .max()
            .unwrap_or(0);
        Self {
            products,
            cart,
            orders,
            next_id: highest + 1,
        }
    }

    /// Fresh state: the built-in catalog, an empty cart and no orders.
    pub fn seeded() -> Self {
        Self::from_parts(catalog::default_catalog(), Vec::new(), Vec::new())
    }

    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
