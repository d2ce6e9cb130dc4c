//! Minimal walkthrough: declare policies, run, consume the outcome.
use rust_decimal::Decimal;
use valid_rail::{Builder, Policy};

#[derive(Debug)]
#[allow(dead_code)]
struct Order {
    item: String,
    amount: Decimal,
}

fn main() {
    let item = Some("keyboard");
    let amount = Some(Decimal::from(120));

    let outcome = Builder::empty()
        .with(Policy::non_empty(item, "item"))
        .with(Policy::greater_than_zero(amount, "amount"))
        .create(|| Order {
            item: item.unwrap_or_default().to_string(),
            amount: amount.unwrap_or_default(),
        })
        .run();

    outcome.if_valid_or_else(
        |order| println!("accepted: {order:?}"),
        |failures| println!("rejected: {failures}"),
    );
}
