//! Command implementations: browsing and the scripted session.

use chrono::Utc;

use monsoon_core::{Money, ProductId, ShippingAddress};
use monsoon_store::catalog::{self, CatalogDocument};
use monsoon_store::checkout::{CheckoutForm, PaymentMethod};
use monsoon_store::config::StoreConfig;
use monsoon_store::format::format_inr;
use monsoon_store::{FilterUpdate, SortMode, Store, StoreError, analytics, cart, orders};

/// Build a store over the configured reference data document.
fn load_store(config: &StoreConfig) -> Result<Store, StoreError> {
    let document = CatalogDocument::from_path(&config.data_path)?;
    let mut store = Store::new();
    store.set_filter(FilterUpdate::MaxPrice(config.price_ceiling));
    store.load_catalog(document);
    Ok(store)
}

/// List the loaded categories.
#[allow(clippy::print_stdout)]
pub fn categories(config: &StoreConfig) -> Result<(), StoreError> {
    let store = load_store(config)?;

    if store.state().categories.is_empty() {
        println!("No categories loaded.");
        return Ok(());
    }

    for category in &store.state().categories {
        println!(
            "{:<14} {:<14} {}",
            category.slug, category.name, category.description
        );
    }
    Ok(())
}

/// Filter and sort the product grid.
#[allow(clippy::print_stdout)]
pub fn catalog(
    config: &StoreConfig,
    category: Option<String>,
    search: Option<String>,
    max_price: Option<i64>,
    min_rating: Option<f64>,
    sort: SortMode,
) -> Result<(), StoreError> {
    let mut store = load_store(config)?;

    if category.is_some() {
        store.set_filter(FilterUpdate::Category(category));
    }
    if let Some(search) = search {
        store.set_filter(FilterUpdate::Search(search));
    }
    if let Some(max_price) = max_price {
        store.set_filter(FilterUpdate::MaxPrice(Money::from_minor(max_price)));
    }
    if let Some(min_rating) = min_rating {
        store.set_filter(FilterUpdate::MinRating(min_rating));
    }
    store.set_filter(FilterUpdate::Sort(sort));

    let state = store.state();
    let grid = catalog::filter_products(&state.products, &state.filters);

    if grid.is_empty() {
        println!("No products found. Adjust filters or clear search to explore more items.");
        return Ok(());
    }

    for product in grid {
        println!(
            "{:<6} {:<28} {:<14} {:>14}  {:.1}",
            product.id,
            product.name,
            product.category,
            format_inr(product.price),
            product.rating
        );
    }
    Ok(())
}

/// Run a scripted shopping session: login, cart, checkout, analytics.
#[allow(clippy::print_stdout)]
pub fn simulate(config: &StoreConfig) -> Result<(), StoreError> {
    let mut store = load_store(config)?;

    if store.state().products.is_empty() {
        println!("Catalog is empty; nothing to simulate.");
        return Ok(());
    }

    // The header re-renders on every committed update, as a page would.
    store.subscribe(|state| {
        tracing::debug!(
            cart_items = cart::item_count(state),
            user = state.user.as_ref().map_or("guest", |user| user.name.as_str()),
            "header refreshed"
        );
    });

    let user = store.login("asha@example.com", "monsoon-demo")?;
    println!("Logged in as {} <{}>", user.name, user.email);

    // Two of the first product, one each of the next two.
    let picks: Vec<ProductId> = store
        .state()
        .products
        .iter()
        .take(3)
        .map(|product| product.id.clone())
        .collect();
    for id in &picks {
        store.add_to_cart(id.clone());
    }
    if let Some(first) = picks.first() {
        store.add_to_cart(first.clone());
    }

    let view = cart::cart_view(store.state());
    println!("\nCart ({} items):", cart::item_count(store.state()));
    for line in &view.lines {
        println!(
            "  {:<28} x{:<2} {:>14}",
            line.product.name,
            line.quantity,
            format_inr(line.line_total)
        );
    }
    println!("  Subtotal {:>37}", format_inr(view.subtotal));

    let form = CheckoutForm {
        address: ShippingAddress {
            full_name: "Asha Rao".to_owned(),
            street: "12 Lake Road".to_owned(),
            city: "Pune".to_owned(),
            state: "Maharashtra".to_owned(),
            postal_code: "411001".to_owned(),
            country: "India".to_owned(),
        },
        payment: PaymentMethod::Upi {
            id: "asha@okbank".to_owned(),
        },
    };
    form.validate()?;

    let order_id = store.place_order(form.address)?;
    println!("\nOrder placed: {order_id}");

    for order in &store.state().orders {
        let timeline = orders::timeline(order.status);
        println!(
            "  #{} [{}] {} ({:.0}% of delivery timeline)",
            order.short_id(),
            order.status,
            format_inr(order.total),
            timeline.progress_percent
        );
        for item in &order.items {
            println!(
                "    {:<28} x{:<2} {:>12}",
                item.product_name,
                item.quantity,
                format_inr(item.total_amount)
            );
        }
    }

    let now = Utc::now();
    let metrics = analytics::summary(&store.state().orders, now);
    println!("\nAnalytics:");
    println!("  Total revenue    {}", format_inr(metrics.total_revenue));
    println!("  Total orders     {}", metrics.total_orders);
    println!("  Avg order value  {:.2}", metrics.average_order_value);
    println!("  Revenue growth   {}%", metrics.revenue_growth_percent);

    for bucket in analytics::monthly_series(&store.state().orders) {
        println!(
            "  {:<9} {:>3} orders {:>14}",
            bucket.label,
            bucket.orders,
            format_inr(bucket.revenue)
        );
    }
    for row in analytics::category_breakdown(&store.state().orders) {
        println!("  {:<14} {:>14}", row.category, format_inr(row.revenue));
    }

    Ok(())
}
