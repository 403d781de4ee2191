use htech_store::{
    dto::{
        orders::CheckoutRequest,
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::StoreError,
    models::{Category, Customer, OrderStatus, PaymentMethod, PaymentStatus},
    store::Store,
};

fn customer() -> Customer {
    Customer {
        full_name: "A".into(),
        phone: "0900".into(),
        email: None,
        address: "X".into(),
        city: "HCM".into(),
        district: None,
        note: None,
    }
}

fn checkout(payment_method: PaymentMethod) -> CheckoutRequest {
    CheckoutRequest {
        customer: customer(),
        payment_method,
    }
}

fn widget() -> CreateProductRequest {
    CreateProductRequest {
        name: "Test Widget".into(),
        category: Category::Tablet,
        price: 1_000_000,
        original_price: None,
        image: "https://example.com/widget.jpg".into(),
        description: "A product for testing".into(),
        specs: vec!["Spec A".into(), "Spec B".into()],
        stock: 10,
        brand: "Acme".into(),
    }
}

// Integration flow: shopper adds to cart -> checkout; admin updates the
// status and checks the dashboard.
#[test]
fn checkout_and_admin_flow() -> anyhow::Result<()> {
    let mut store = Store::in_memory();

    let product = store.add_product(widget());
    store.add_to_cart(&product, 2);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart()[0].quantity, 2);
    assert_eq!(store.cart_total(), 2_000_000);

    let order = store.create_order(checkout(PaymentMethod::Cod));
    assert_eq!(order.total, 2_000_000);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.items.len(), 1);
    assert!(store.cart().is_empty());

    let updated = store.update_order_status(order.id, OrderStatus::Completed)?;
    assert_eq!(updated.status, OrderStatus::Completed);

    // Only the status field may change.
    let reread = store.order(order.id)?;
    assert_eq!(reread.id, order.id);
    assert_eq!(reread.items, order.items);
    assert_eq!(reread.total, order.total);
    assert_eq!(reread.created_at, order.created_at);
    assert_eq!(reread.customer, order.customer);
    assert_eq!(reread.payment_method, order.payment_method);
    assert_eq!(reread.payment_status, order.payment_status);

    assert_eq!(store.orders_by_status(OrderStatus::Completed).len(), 1);
    assert!(store.orders_by_status(OrderStatus::Pending).is_empty());

    let stats = store.dashboard_stats();
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.pending_orders, 0);
    assert_eq!(stats.total_revenue, 2_000_000);

    let low = store.low_stock(10);
    assert!(
        low.iter().any(|p| p.id == product.id),
        "expected product to appear in the low-stock list"
    );

    Ok(())
}

#[test]
fn adding_same_product_twice_merges_into_one_line() {
    let mut store = Store::in_memory();
    let product = store.product(1).unwrap().clone();

    store.add_to_cart(&product, 1);
    store.add_to_cart(&product, 3);

    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart()[0].quantity, 4);
}

#[test]
fn zero_quantity_update_equals_removal() {
    let mut a = Store::in_memory();
    let mut b = Store::in_memory();
    let product = a.product(1).unwrap().clone();
    let other = a.product(2).unwrap().clone();

    for store in [&mut a, &mut b] {
        store.add_to_cart(&product, 2);
        store.add_to_cart(&other, 1);
    }
    a.update_cart_quantity(product.id, 0);
    b.remove_from_cart(product.id);

    assert_eq!(a.cart(), b.cart());
}

#[test]
fn cart_total_tracks_every_mutation() {
    let mut store = Store::in_memory();
    let first = store.product(1).unwrap().clone();
    let second = store.product(5).unwrap().clone();

    store.add_to_cart(&first, 2);
    store.add_to_cart(&second, 1);
    assert_eq!(store.cart_total(), first.price * 2 + second.price);

    store.update_cart_quantity(first.id, 5);
    assert_eq!(store.cart_total(), first.price * 5 + second.price);

    store.remove_from_cart(second.id);
    assert_eq!(store.cart_total(), first.price * 5);

    // Unknown ids are left alone.
    store.update_cart_quantity(9999, 3);
    store.remove_from_cart(9999);
    assert_eq!(store.cart_total(), first.price * 5);

    store.clear_cart();
    assert!(store.cart().is_empty());
    assert_eq!(store.cart_total(), 0);
}

#[test]
fn cart_lines_snapshot_the_product_at_add_time() -> anyhow::Result<()> {
    let mut store = Store::in_memory();
    let product = store.product(1)?.clone();
    store.add_to_cart(&product, 1);

    store.update_product(
        product.id,
        UpdateProductRequest {
            price: Some(1),
            ..Default::default()
        },
    )?;

    assert_eq!(store.cart()[0].product.price, product.price);
    assert_eq!(store.cart_total(), product.price);
    Ok(())
}

#[test]
fn non_cod_payments_are_marked_paid_immediately() {
    for (method, expected) in [
        (PaymentMethod::Cod, PaymentStatus::Pending),
        (PaymentMethod::Bank, PaymentStatus::Paid),
        (PaymentMethod::Card, PaymentStatus::Paid),
    ] {
        let mut store = Store::in_memory();
        let product = store.product(1).unwrap().clone();
        store.add_to_cart(&product, 1);
        let order = store.create_order(checkout(method));
        assert_eq!(order.payment_status, expected);
    }
}

#[test]
fn product_ids_never_collide() {
    let mut store = Store::in_memory();

    let first = store.add_product(widget());
    let second = store.add_product(widget());

    assert_ne!(first.id, second.id);
    // Fresh ids sit above every catalog id.
    assert!(first.id > 8 && second.id > first.id);
}

#[test]
fn update_product_merges_only_the_given_fields() -> anyhow::Result<()> {
    let mut store = Store::in_memory();
    let before = store.product(3)?.clone();

    let updated = store.update_product(
        3,
        UpdateProductRequest {
            price: Some(39_990_000),
            stock: Some(12),
            ..Default::default()
        },
    )?;

    assert_eq!(updated.price, 39_990_000);
    assert_eq!(updated.stock, 12);
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.specs, before.specs);
    assert_eq!(updated.original_price, before.original_price);
    Ok(())
}

#[test]
fn mutating_unknown_ids_reports_not_found_and_changes_nothing() {
    let mut store = Store::in_memory();
    let products = store.products().to_vec();

    assert!(matches!(
        store.delete_product(9999),
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        store.update_product(9999, UpdateProductRequest::default()),
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        store.update_order_status(9999, OrderStatus::Completed),
        Err(StoreError::NotFound)
    ));

    assert_eq!(store.products(), products.as_slice());
}

#[test]
fn deleting_a_product_keeps_existing_orders_intact() -> anyhow::Result<()> {
    let mut store = Store::in_memory();
    let product = store.product(2)?.clone();
    store.add_to_cart(&product, 1);
    let order = store.create_order(checkout(PaymentMethod::Bank));

    store.delete_product(product.id)?;

    let reread = store.order(order.id)?;
    assert_eq!(reread.items.len(), 1);
    assert_eq!(reread.items[0].product.id, product.id);
    Ok(())
}

#[test]
fn category_filter_and_search() {
    let store = Store::in_memory();

    assert_eq!(store.products_by_category(Category::Phone).len(), 3);
    assert_eq!(store.products_by_category(Category::Laptop).len(), 4);
    assert_eq!(store.products_by_category(Category::Tablet).len(), 1);

    let hits = store.search_products("macbook");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 3);

    assert!(store.search_products("no such thing").is_empty());
}

#[test]
fn checkout_form_validation_catches_blank_required_fields() {
    let valid = checkout(PaymentMethod::Cod);
    assert!(valid.validate().is_ok());

    let mut missing_name = checkout(PaymentMethod::Cod);
    missing_name.customer.full_name = "  ".into();
    assert!(matches!(
        missing_name.validate(),
        Err(StoreError::BadRequest(_))
    ));

    let mut missing_city = checkout(PaymentMethod::Cod);
    missing_city.customer.city = String::new();
    assert!(missing_city.validate().is_err());
}

#[test]
fn unknown_enum_strings_are_rejected() {
    assert!(serde_json::from_str::<OrderStatus>("\"paid\"").is_err());
    assert!(serde_json::from_str::<Category>("\"desktop\"").is_err());
    assert_eq!(
        serde_json::from_str::<OrderStatus>("\"shipping\"").unwrap(),
        OrderStatus::Shipping
    );
}
