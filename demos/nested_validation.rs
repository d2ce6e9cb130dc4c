//! Nested validation: a parent validator aggregates a child's policies via
//! `depends_on` and reports every failure in one pass, without ever invoking
//! the child's payload producer.
use valid_rail::{policies, Policy};

#[derive(Debug)]
#[allow(dead_code)]
struct Address {
    street: String,
    city: String,
}

#[derive(Debug)]
#[allow(dead_code)]
struct Customer {
    name: String,
    address: Address,
}

fn main() {
    let street: Option<&str> = Some("Baker Street 221b");
    let city: Option<&str> = None;
    let name: Option<&str> = Some("");

    let address = policies![
        Policy::non_empty(street, "address.street"),
        Policy::non_empty(city, "address.city"),
    ]
    .create(|| Address {
        street: street.unwrap_or_default().to_string(),
        city: city.unwrap_or_default().to_string(),
    });

    let outcome = policies![Policy::non_empty(name, "name")]
        .depends_on(&address)
        .create(|| Customer {
            name: name.unwrap_or_default().to_string(),
            address: Address {
                street: street.unwrap_or_default().to_string(),
                city: city.unwrap_or_default().to_string(),
            },
        })
        .run();

    // Two failures, reported together: name and address.city.
    for failure in outcome.failures() {
        println!("{failure}");
    }
}
