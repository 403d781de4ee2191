use crate::dto::admin::DashboardStats;
use crate::error::{StoreError, StoreResult};
use crate::models::{Order, OrderStatus, Product};
use crate::state::StoreState;

/// Overwrites the status field and nothing else. All five states are
/// reachable from any other; the enum already closes the value set.
pub fn update_order_status(
    state: &mut StoreState,
    id: u64,
    status: OrderStatus,
) -> StoreResult<Order> {
    let order = state
        .orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or(StoreError::NotFound)?;
    order.status = status;
    Ok(order.clone())
}

/// Products at or under the threshold, lowest stock first.
pub fn list_low_stock(state: &StoreState, threshold: u32) -> Vec<&Product> {
    let mut items: Vec<&Product> = state
        .products
        .iter()
        .filter(|p| p.stock <= threshold)
        .collect();
    items.sort_by_key(|p| p.stock);
    items
}

pub fn dashboard_stats(state: &StoreState) -> DashboardStats {
    DashboardStats {
        total_products: state.products.len(),
        total_orders: state.orders.len(),
        pending_orders: state
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count(),
        total_revenue: state.orders.iter().map(|o| o.total).sum(),
    }
}
