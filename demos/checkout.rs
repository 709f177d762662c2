// ============================================================================
// Checkout Example
// ============================================================================
//
// Run with logging to see the observer spans:
//     cargo run --example checkout --features logging

use boutique_money::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(err) = boutique_money::utils::init_logging("info,boutique_money=debug") {
        eprintln!("logging disabled: {}", err);
    }

    println!("=== Checkout Example ===\n");

    let service = match MoneyServiceBuilder::new("checkoutservice")
        .currency("USD")
        .build(Arc::new(TracingObserver))
    {
        Ok(service) => service,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            return;
        },
    };

    // Cart: (name, unit price, quantity)
    let cart = [
        ("Sunglasses", MoneyValue::new("USD", 19, 990_000_000), 2u32),
        ("Tank Top", MoneyValue::new("USD", 18, 990_000_000), 1),
        ("Candle Holder", MoneyValue::new("USD", 18, 990_000_000), 3),
    ];

    println!("Line items:");
    let mut lines = Vec::with_capacity(cart.len());
    for (name, price, quantity) in &cart {
        let line = service.multiply_slow(price, *quantity);
        println!("  {:<14} {} x {} = {}", name, quantity, price, line);
        lines.push(line);
    }

    let item_count: u32 = cart.iter().map(|(_, _, quantity)| quantity).sum();
    let shipping = service.shipping_quote(item_count);
    println!("\nShipping for {} items: {}", item_count, shipping);

    lines.push(shipping.to_money(service.config().currency_code.as_str()));
    match service.total(&lines) {
        Ok(total) => println!("Order total: {}", total),
        Err(err) => println!("Could not total order: {}", err),
    }

    // A foreign-currency item is rejected, not silently added
    println!("\n=== Mixed Currencies ===");
    let euro_item = MoneyValue::new("EUR", 12, 0);
    match service.sum(&lines[0], &euro_item) {
        Ok(total) => println!("Unexpected total: {}", total),
        Err(err) => println!("Rejected: {}", err),
    }

    // Refund: negate and net against the charge
    println!("\n=== Refund ===");
    let refund = service.negate(&lines[0]);
    match service.sum(&lines[0], &refund) {
        Ok(net) => println!("Charge {} + refund {} = {}", lines[0], refund, net),
        Err(err) => println!("Refund failed: {}", err),
    }

    println!("\nOperations run: {}", service.operation_count());
}
