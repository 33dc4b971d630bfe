//! End-to-end shopping flow over the observable store.
//!
//! Drives a full session the way a page would: load reference data, log
//! in, browse with filters, manage the cart, validate the checkout form,
//! place the order, and read the tracking and analytics views.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use rust_decimal::Decimal;

use monsoon_core::{Money, OrderStatus, ProductId, ShippingAddress};
use monsoon_store::catalog::{self, CatalogDocument, SortMode};
use monsoon_store::checkout::{CheckoutForm, PaymentMethod};
use monsoon_store::{FilterUpdate, Store, analytics, cart, nav, orders};

const CATALOG: &str = r#"{
    "categories": [
        {
            "slug": "electronics",
            "name": "Electronics",
            "description": "Gadgets and devices",
            "image": "images/electronics.jpg"
        },
        {
            "slug": "home",
            "name": "Home",
            "description": "Living and kitchen",
            "image": "images/home.jpg"
        }
    ],
    "products": [
        {
            "id": "p1",
            "name": "Aurora Headphones",
            "description": "Wireless over-ear headphones",
            "category": "Electronics",
            "price": 799900,
            "rating": 4.6,
            "imageUrl": "images/p1.jpg"
        },
        {
            "id": "p2",
            "name": "Clay Tea Set",
            "description": "Hand-thrown six-piece set",
            "category": "Home",
            "price": 189900,
            "rating": 4.8,
            "imageUrl": "images/p2.jpg"
        },
        {
            "id": "p3",
            "name": "Trail Smartwatch",
            "description": "GPS watch with 10-day battery",
            "category": "Electronics",
            "price": 1299900,
            "rating": 4.2,
            "imageUrl": "images/p3.jpg"
        }
    ]
}"#;

fn address() -> ShippingAddress {
    ShippingAddress {
        full_name: "Asha Rao".to_owned(),
        street: "12 Lake Road".to_owned(),
        city: "Pune".to_owned(),
        state: "MH".to_owned(),
        postal_code: "411001".to_owned(),
        country: "India".to_owned(),
    }
}

#[test]
fn test_full_shopping_session() {
    let mut store = Store::new();

    // Header badge re-renders on every committed update.
    let badge = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&badge);
    store.subscribe(move |state| sink.borrow_mut().push(cart::item_count(state)));

    store.load_catalog(CatalogDocument::from_json(CATALOG).unwrap());
    assert_eq!(store.state().categories.len(), 2);
    assert_eq!(store.state().products.len(), 3);

    let user = store.login("asha@example.com", "pw").unwrap();
    assert_eq!(user.name, "asha");
    assert_eq!(nav::access_redirect(nav::Page::Checkout, true), None);

    // Landing on products.html?category=electronics pre-filters the grid.
    let filter =
        nav::category_filter_from_query("category=electronics", &store.state().categories)
            .unwrap();
    store.set_filter(FilterUpdate::Category(Some(filter)));
    store.set_filter(FilterUpdate::Sort(SortMode::PriceAsc));

    let grid = catalog::filter_products(&store.state().products, &store.state().filters);
    let ids: Vec<_> = grid.iter().map(|p| p.id.as_str().to_owned()).collect();
    assert_eq!(ids, vec!["p1", "p3"]);

    // Two headphones, one tea set; then drop the smartwatch impulse.
    store.add_to_cart(ProductId::new("p1"));
    store.add_to_cart(ProductId::new("p1"));
    store.add_to_cart(ProductId::new("p2"));
    store.add_to_cart(ProductId::new("p3"));
    store.remove_from_cart(&ProductId::new("p3"));

    let view = cart::cart_view(store.state());
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.subtotal, Money::from_minor(2 * 799_900 + 189_900));

    // The checkout form gates order placement.
    let form = CheckoutForm {
        address: address(),
        payment: PaymentMethod::Upi {
            id: "asha@okbank".to_owned(),
        },
    };
    form.validate().unwrap();

    let order_id = store.place_order(form.address).unwrap();
    assert!(store.state().cart.is_empty());

    // orders.html?placed=<id> banners the fresh order.
    let query = format!("placed={order_id}");
    assert_eq!(nav::placed_order_from_query(&query), Some(order_id.clone()));

    let order = store.state().orders.first().unwrap();
    assert_eq!(order.id, order_id);
    assert_eq!(order.total, Money::from_minor(1_789_700));
    assert_eq!(order.status, OrderStatus::Processing);

    let timeline = orders::timeline(order.status);
    assert!((timeline.progress_percent - 0.0).abs() < f64::EPSILON);
    assert!(timeline.steps.first().unwrap().active);

    // Analytics over the single-order history.
    let metrics = analytics::summary(&store.state().orders, Utc::now());
    assert_eq!(metrics.total_orders, 1);
    assert_eq!(metrics.total_revenue, Money::from_minor(1_789_700));
    assert_eq!(metrics.average_order_value, Decimal::new(17_897, 0));
    assert_eq!(metrics.revenue_growth_percent, Decimal::ONE_HUNDRED);

    let series = analytics::monthly_series(&store.state().orders);
    assert_eq!(series.len(), 1);
    assert_eq!(series.first().unwrap().orders, 1);

    let breakdown = analytics::category_breakdown(&store.state().orders);
    let rows: Vec<_> = breakdown
        .iter()
        .map(|row| (row.category.as_str(), row.revenue.as_minor()))
        .collect();
    assert_eq!(
        rows,
        vec![("Electronics", 1_599_800), ("Home", 189_900)]
    );

    // Badge history: catalog load, login, 2 filters, 4 adds, 1 remove,
    // then checkout clearing the cart.
    assert_eq!(
        *badge.borrow(),
        vec![0, 0, 0, 0, 1, 2, 3, 4, 3, 0]
    );

    store.logout();
    assert!(store.state().user.is_none());
    assert_eq!(
        nav::access_redirect(nav::Page::Orders, false),
        Some(nav::Page::Login)
    );
}

#[test]
fn test_checkout_rejected_before_order_placement() {
    let mut store = Store::new();
    store.load_catalog(CatalogDocument::from_json(CATALOG).unwrap());
    store.add_to_cart(ProductId::new("p1"));

    let mut bad_address = address();
    bad_address.postal_code = String::new();
    let form = CheckoutForm {
        address: bad_address,
        payment: PaymentMethod::Card {
            number: "4111 1111 1111 1111".to_owned(),
            expiry: "09/27".to_owned(),
            cvv: "123".to_owned(),
        },
    };

    assert!(form.validate().is_err());
    // The form never reached place_order; the cart is intact.
    assert_eq!(store.state().cart.len(), 1);
    assert!(store.state().orders.is_empty());
}

#[test]
fn test_catalog_survives_partial_document() {
    let mut store = Store::new();
    store.load_catalog(CatalogDocument::from_json(r#"{"categories": []}"#).unwrap());

    assert!(store.state().products.is_empty());
    let grid = catalog::filter_products(&store.state().products, &store.state().filters);
    assert!(grid.is_empty());
}
