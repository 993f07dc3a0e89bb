//! Browsing, cart and checkout through the session facade.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use gourmet_core::{Category, CategoryFilter, FulfillmentMethod, ProductId};
use gourmet_integration_tests::{euros, gourmet_session, ten_and_five_session};

#[test]
fn test_browse_then_order_through_dialog() {
    let mut session = gourmet_session();

    session.select_category(CategoryFilter::Only(Category::CuredMeats));
    let visible = session.visible_products();
    assert_eq!(visible.len(), 1);
    let jamon = visible[0].id;

    assert!(session.open_product(jamon));
    assert!(session.confirm_product());
    assert!(session.open_product(jamon));
    assert!(session.confirm_product());

    let line = session.cart().line(jamon).unwrap();
    assert_eq!(line.quantity, 2);
    assert_eq!(session.cart().lines().len(), 1);
    assert_eq!(session.notifier().toasts().len(), 2);
}

#[test]
fn test_totals_example() {
    let mut session = ten_and_five_session();
    session.add_product(ProductId::new(1));
    session.add_product(ProductId::new(1));
    session.add_product(ProductId::new(2));

    let totals = session.totals();
    assert_eq!(totals.subtotal.amount, euros(2500));
    assert_eq!(totals.tax.amount, euros(525));
    assert_eq!(totals.total.amount, euros(3025));
}

#[test]
fn test_totals_recomputed_after_adjustments() {
    let mut session = ten_and_five_session();
    session.add_product(ProductId::new(1));
    session.add_product(ProductId::new(2));
    session.adjust_quantity(ProductId::new(2), -1);

    assert!(session.cart().line(ProductId::new(2)).is_none());
    assert_eq!(session.totals().subtotal.amount, euros(1000));
    assert_eq!(session.totals().total.amount, euros(1210));
}

#[test]
fn test_adjust_by_negative_quantity_removes_line() {
    let mut session = gourmet_session();
    let id = ProductId::new(6);
    for _ in 0..3 {
        session.add_product(id);
    }
    assert_eq!(session.adjust_quantity(id, -3), Some(0));
    assert!(session.cart().is_empty());
}

#[test]
fn test_adjust_unknown_id_leaves_cart_unchanged() {
    let mut session = gourmet_session();
    session.add_product(ProductId::new(1));
    let before = session.cart().lines().to_vec();

    assert_eq!(session.adjust_quantity(ProductId::new(2), 1), None);
    assert_eq!(session.cart().lines(), before.as_slice());
}

#[test]
fn test_checkout_snapshot_is_independent_of_cart() {
    let mut session = gourmet_session();
    session.add_product(ProductId::new(2));
    session.set_fulfillment(FulfillmentMethod::HomeDelivery);
    session.finalize_order();

    session.add_product(ProductId::new(2));
    session.add_product(ProductId::new(2));

    let order = session.orders().latest().unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 1);
    assert_eq!(order.fulfillment, FulfillmentMethod::HomeDelivery);
    assert_eq!(session.cart().line(ProductId::new(2)).unwrap().quantity, 2);
}

#[test]
fn test_order_serializes_for_export() {
    let mut session = ten_and_five_session();
    session.add_product(ProductId::new(2));
    let order = session.finalize_order().clone();

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["items"][0]["name"], "Five");
    let total: Decimal = json["total"]["amount"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, euros(605));
    assert_eq!(json["fulfillment"], "take_away");
}
