use chrono::Utc;

use crate::dto::orders::CheckoutRequest;
use crate::error::{StoreError, StoreResult};
use crate::models::{Order, OrderStatus};
use crate::services::cart_service;
use crate::state::StoreState;

pub fn list_orders(state: &StoreState) -> &[Order] {
    &state.orders
}

pub fn orders_by_status(state: &StoreState, status: OrderStatus) -> Vec<&Order> {
    state.orders.iter().filter(|o| o.status == status).collect()
}

pub fn get_order(state: &StoreState, id: u64) -> StoreResult<&Order> {
    state
        .orders
        .iter()
        .find(|o| o.id == id)
        .ok_or(StoreError::NotFound)
}

/// Checkout: freeze the current cart into a new order, then clear the cart.
/// The total is always computed from the pre-clear cart.
pub fn create_order(state: &mut StoreState, payload: CheckoutRequest) -> Order {
    let total = cart_service::cart_total(state);
    let payment_status = payload.payment_method.initial_payment_status();
    let order = Order {
        id: state.allocate_id(),
        items: state.cart.clone(),
        total,
        status: OrderStatus::Pending,
        created_at: Utc::now(),
        customer: payload.customer,
        payment_method: payload.payment_method,
        payment_status,
    };
    state.orders.push(order.clone());
    state.cart.clear();
    order
}
