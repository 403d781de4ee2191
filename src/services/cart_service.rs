use crate::models::{CartLine, Product};
use crate::state::StoreState;

/// Merge-or-append by product id. No stock check; the quantity may exceed
/// what is available.
pub fn add_to_cart(state: &mut StoreState, product: &Product, quantity: u32) -> CartLine {
    if let Some(line) = state.cart.iter_mut().find(|l| l.product.id == product.id) {
        line.quantity += quantity;
        return line.clone();
    }
    let line = CartLine {
        product: product.clone(),
        quantity,
    };
    state.cart.push(line.clone());
    line
}

pub fn remove_from_cart(state: &mut StoreState, product_id: u64) {
    state.cart.retain(|l| l.product.id != product_id);
}

/// Zero behaves exactly as removal; unknown product ids are left alone.
pub fn update_quantity(state: &mut StoreState, product_id: u64, quantity: u32) {
    if quantity == 0 {
        remove_from_cart(state, product_id);
        return;
    }
    if let Some(line) = state.cart.iter_mut().find(|l| l.product.id == product_id) {
        line.quantity = quantity;
    }
}

pub fn clear_cart(state: &mut StoreState) {
    state.cart.clear();
}

/// Recomputed from the live cart on every call, never cached.
pub fn cart_total(state: &StoreState) -> i64 {
    state.cart.iter().map(CartLine::line_total).sum()
}
