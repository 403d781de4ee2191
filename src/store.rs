use crate::dto::admin::DashboardStats;
use crate::dto::orders::CheckoutRequest;
use crate::dto::products::{CreateProductRequest, UpdateProductRequest};
use crate::error::StoreResult;
use crate::models::{CartLine, Category, Order, OrderStatus, Product};
use crate::services::{admin_service, cart_service, order_service, product_service};
use crate::state::StoreState;
use crate::storage::JsonStorage;

/// Single owner of all application state. Instantiated once at process start
/// and passed by reference; every consumer reads and mutates through these
/// operations, never the underlying collections.
#[derive(Debug)]
pub struct Store {
    state: StoreState,
    storage: Option<JsonStorage>,
}

impl Store {
    /// Open against a data directory. When nothing has been persisted yet the
    /// catalog seeds from the built-in defaults; otherwise the persisted state
    /// fully replaces them.
    pub fn open(storage: JsonStorage) -> StoreResult<Self> {
        let state = match storage.load()? {
            Some(state) => state,
            None => StoreState::seeded(),
        };
        Ok(Self {
            state,
            storage: Some(storage),
        })
    }

    /// A seeded store with no persistence attached.
    pub fn in_memory() -> Self {
        Self {
            state: StoreState::seeded(),
            storage: None,
        }
    }

    // --- storefront ---

    pub fn products(&self) -> &[Product] {
        product_service::list_products(&self.state)
    }

    pub fn products_by_category(&self, category: Category) -> Vec<&Product> {
        product_service::products_by_category(&self.state, category)
    }

    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        product_service::search_products(&self.state, query)
    }

    pub fn product(&self, id: u64) -> StoreResult<&Product> {
        product_service::get_product(&self.state, id)
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.state.cart
    }

    pub fn cart_total(&self) -> i64 {
        cart_service::cart_total(&self.state)
    }

    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> CartLine {
        let line = cart_service::add_to_cart(&mut self.state, product, quantity);
        self.persist();
        line
    }

    pub fn remove_from_cart(&mut self, product_id: u64) {
        cart_service::remove_from_cart(&mut self.state, product_id);
        self.persist();
    }

    pub fn update_cart_quantity(&mut self, product_id: u64, quantity: u32) {
        cart_service::update_quantity(&mut self.state, product_id, quantity);
        self.persist();
    }

    pub fn clear_cart(&mut self) {
        cart_service::clear_cart(&mut self.state);
        self.persist();
    }

    /// Checkout. Appends the order, clears the cart and returns the order;
    /// performs no customer validation (that is the form's job, see
    /// [`CheckoutRequest::validate`]).
    pub fn create_order(&mut self, payload: CheckoutRequest) -> Order {
        let order = order_service::create_order(&mut self.state, payload);
        self.persist();
        order
    }

    // --- orders ---

    pub fn orders(&self) -> &[Order] {
        order_service::list_orders(&self.state)
    }

    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        order_service::orders_by_status(&self.state, status)
    }

    pub fn order(&self, id: u64) -> StoreResult<&Order> {
        order_service::get_order(&self.state, id)
    }

    pub fn update_order_status(&mut self, id: u64, status: OrderStatus) -> StoreResult<Order> {
        let order = admin_service::update_order_status(&mut self.state, id, status)?;
        self.persist();
        Ok(order)
    }

    // --- catalog administration ---

    pub fn add_product(&mut self, payload: CreateProductRequest) -> Product {
        let product = product_service::create_product(&mut self.state, payload);
        self.persist();
        product
    }

    pub fn update_product(
        &mut self,
        id: u64,
        payload: UpdateProductRequest,
    ) -> StoreResult<Product> {
        let product = product_service::update_product(&mut self.state, id, payload)?;
        self.persist();
        Ok(product)
    }

    pub fn delete_product(&mut self, id: u64) -> StoreResult<()> {
        product_service::delete_product(&mut self.state, id)?;
        self.persist();
        Ok(())
    }

    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        admin_service::list_low_stock(&self.state, threshold)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        admin_service::dashboard_stats(&self.state)
    }

    // --- persistence ---

    /// Write the current snapshot, surfacing any storage error.
    pub fn flush(&self) -> StoreResult<()> {
        if let Some(storage) = &self.storage {
            storage.save(&self.state)?;
        }
        Ok(())
    }

    // Best-effort write after each mutation; a failure never fails the
    // operation that triggered it.
    fn persist(&self) {
        if let Err(err) = self.flush() {
            tracing::warn!(error = %err, "state persist failed");
        }
    }
}
