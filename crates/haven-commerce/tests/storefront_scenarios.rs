//! End-to-end checks of the cart and listing behavior the storefront relies on.

use haven_commerce::prelude::*;

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

fn two_product_catalog() -> Catalog {
    Catalog::new(
        vec![
            Product::new("a", "Comfort Cotton Wrap", usd(2000), "cotton-hijabs")
                .with_colors(["White"])
                .with_sizes(["One Size"]),
            Product::new("b", "Flowing Chiffon Shawl", usd(3500), "chiffon-hijabs")
                .with_colors(["Silver"])
                .with_sizes(["One Size"]),
        ],
        vec![
            Category::new("2", "Cotton Hijabs", "cotton-hijabs"),
            Category::new("3", "Chiffon Hijabs", "chiffon-hijabs"),
        ],
    )
}

#[test]
fn cart_over_threshold_ships_free() {
    let catalog = two_product_catalog();
    let a = catalog.product(&ProductId::new("a")).unwrap();
    let b = catalog.product(&ProductId::new("b")).unwrap();

    let cart = Cart::new(Currency::USD)
        .add_item(a, a.default_selection(), 2)
        .unwrap()
        .add_item(b, b.default_selection(), 1)
        .unwrap();
    let totals = cart.totals(&PricingConfig::default());

    assert_eq!(totals.subtotal, usd(7500));
    assert_eq!(totals.shipping, usd(0));
    assert_eq!(totals.tax, usd(600));
    assert_eq!(totals.total, usd(8100));
    assert_eq!(totals.total.display(), "$81.00");
}

#[test]
fn small_cart_pays_flat_fee() {
    let item = LineItem::new(ProductId::new("x"), "Active Jersey Hijab", usd(1000), 1);
    let totals = compute_totals(&[item], &PricingConfig::default());

    assert_eq!(totals.subtotal, usd(1000));
    assert_eq!(totals.shipping, usd(999));
    assert_eq!(totals.tax, usd(80));
    assert_eq!(totals.total, usd(2079));
}

#[test]
fn subtotal_of_exactly_fifty_still_pays_shipping() {
    let item = LineItem::new(ProductId::new("x"), "Bundle", usd(2500), 2);
    let totals = compute_totals(&[item], &PricingConfig::default());
    assert_eq!(totals.subtotal, usd(5000));
    assert_eq!(totals.shipping, usd(999));
}

#[test]
fn silk_in_stock_filter_returns_only_available_silk() {
    let in_stock = Product::new("s1", "Elegant Silk Scarf", usd(8999), "silk-hijabs");
    let sold_out =
        Product::new("s2", "Royal Silk Hijab", usd(12999), "silk-hijabs").with_stock(false);
    let cotton = Product::new("c1", "Comfort Cotton Wrap", usd(2499), "cotton-hijabs");
    let products = vec![in_stock.clone(), sold_out, cotton];

    let spec = FilterSpec::default()
        .with_price_range(PriceRange::from_decimal(0.0, 500.0, Currency::USD))
        .with_category("silk-hijabs")
        .in_stock();
    let result = filter_products(&products, &spec);

    assert_eq!(result, vec![in_stock]);
}

#[test]
fn zero_quantity_matches_removal() {
    let catalog = Catalog::sample().unwrap();
    let mut cart = Cart::new(Currency::USD);
    for id in ["1", "2", "3"] {
        let product = catalog.product(&ProductId::new(id)).unwrap();
        cart = cart.add_item(product, product.default_selection(), 1).unwrap();
    }

    for line in &cart.items {
        assert_eq!(
            cart.set_quantity(&line.id, 0),
            cart.remove_line_item(&line.id)
        );
    }
}

#[test]
fn sample_listing_filters_then_sorts() {
    let catalog = Catalog::sample().unwrap();
    let before = catalog.clone();

    let query = CatalogQuery::new(
        FilterSpec::default().with_search("cotton").in_stock(),
        SortKey::PriceLow,
    );
    let names: Vec<String> = query
        .run(&catalog.products)
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, ["Everyday Cotton Hijab", "Comfort Cotton Wrap"]);
    assert_eq!(catalog, before);
}

#[test]
fn featured_sort_keeps_catalog_order_within_groups() {
    let catalog = Catalog::sample().unwrap();
    let ids: Vec<String> = sort_products(&catalog.products, SortKey::Featured)
        .into_iter()
        .map(|p| p.id.into_inner())
        .collect();
    assert_eq!(ids, ["1", "2", "3", "5", "4", "6", "7", "8"]);
}

#[test]
fn filtering_twice_changes_nothing() {
    let catalog = Catalog::sample().unwrap();
    let specs = [
        FilterSpec::default(),
        FilterSpec::default().with_color("Black").in_stock(),
        FilterSpec::default()
            .with_search("SILK")
            .with_price_range(PriceRange::from_decimal(150.0, 50.0, Currency::USD)),
    ];
    for spec in specs {
        let once = filter_products(&catalog.products, &spec);
        assert_eq!(filter_products(&once, &spec), once);
    }
}

#[test]
fn session_checkout_snapshot() {
    let catalog = Catalog::sample().unwrap();
    let config = PricingConfig::default();
    let mut session = ShopSession::new(Currency::USD);

    let wrap = catalog.product(&ProductId::new("2")).unwrap();
    session
        .add_to_cart(wrap, VariantSelection::new("Beige", "Large"), 3)
        .unwrap();
    assert!(session.wishlist.toggle(&wrap.id));

    let order = Order::from_cart(&session.cart, CustomerInfo::default(), &config).unwrap();
    assert_eq!(order.totals, session.totals(&config));
    assert_eq!(order.totals.subtotal, usd(7497));
    assert_eq!(order.items[0].color, "Beige");
}
