//! Fact rendering, one template per category.
//!
//! The rendered text is user-facing and compared byte-for-byte in tests:
//! wording, attribute order, `$` prefixes and line indentation are fixed.

use roamer_core::{Category, Fact};

/// Topics a user can ask about, shown after a new location and on a miss.
pub const TOPIC_MENU: &str = "- Tourist attractions and best time to visit\n\
                              - Average daily costs and expenses\n\
                              - Tax rates and financial information";

/// Render one fact as a human-readable block.
pub fn render(fact: &Fact) -> String {
    match &fact.category {
        Category::Tax => render_tax(fact),
        Category::Tourist => render_tourist(fact),
        Category::Cost => render_cost(fact),
        Category::Other(_) => render_other(fact),
    }
}

fn render_tax(fact: &Fact) -> String {
    format!(
        "According to {}, the tax rate in {} is {}",
        fact.source,
        fact.location,
        fact.attribute("tax_rate")
    )
}

fn render_tourist(fact: &Fact) -> String {
    format!(
        "Tourist Information for {} (Source: {}):\n  - Main Attractions: {}\n  - Best Time to Visit: {}",
        fact.location,
        fact.source,
        fact.attribute("attractions"),
        fact.attribute("best_time")
    )
}

fn render_cost(fact: &Fact) -> String {
    format!(
        "Travel Costs for {} (Source: {}):\n  - Average Daily Cost: ${}\n  - Hotel: ${} per night\n  - Food: ${} per day",
        fact.location,
        fact.source,
        fact.attribute("daily_cost"),
        fact.attribute("hotel_avg"),
        fact.attribute("food_avg")
    )
}

/// Attributes in key order as `k=v`, comma separated.
fn render_other(fact: &Fact) -> String {
    let attributes = fact
        .attributes
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Information about {}: {} (Source: {})",
        fact.location, attributes, fact.source
    )
}

/// Offered the first time a location comes up.
pub fn follow_up_prompt(location: &str) -> String {
    format!("\nWould you like to know more about {location}? You can ask about:\n{TOPIC_MENU}")
}
