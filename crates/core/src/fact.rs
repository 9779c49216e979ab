//! Fact and Category: the immutable records the engine answers from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

/// The topic a fact belongs to.
///
/// Parsing a tag is total: anything that is not one of the known topics is
/// kept verbatim as [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Tax rates (`tax_rate`)
    Tax,
    /// Attractions and seasons (`attractions`, `best_time`)
    Tourist,
    /// Travel expenses (`daily_cost`, `hotel_avg`, `food_avg`)
    Cost,
    /// Any other tag
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Tax => "tax",
            Category::Tourist => "tourist",
            Category::Cost => "cost",
            Category::Other(tag) => tag,
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "tax" => Category::Tax,
            "tourist" => Category::Tourist,
            "cost" => Category::Cost,
            _ => Category::Other(s.trim().to_string()),
        })
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(category) => category,
            Err(never) => match never {},
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute bundle about a location, with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// The location name as it appears in the source
    pub location: String,

    /// Which topic this fact covers
    pub category: Category,

    /// Column name → value, excluding the location and source columns
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Where the data came from (document name, dataset, ...)
    pub source: String,
}

impl Fact {
    pub fn new(
        location: impl Into<String>,
        category: Category,
        source: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            category,
            attributes: BTreeMap::new(),
            source: source.into(),
        }
    }

    /// Builder-style attribute insertion.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Attribute value, or the empty string when the column is absent.
    pub fn attribute(&self, key: &str) -> &str {
        self.attributes.get(key).map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse_case_insensitively() {
        assert_eq!("tax".parse::<Category>().unwrap(), Category::Tax);
        assert_eq!("Tourist".parse::<Category>().unwrap(), Category::Tourist);
        assert_eq!(" COST ".parse::<Category>().unwrap(), Category::Cost);
    }

    #[test]
    fn unknown_tag_is_kept() {
        let c: Category = "weather".parse().unwrap();
        assert_eq!(c, Category::Other("weather".into()));
        assert_eq!(c.to_string(), "weather");
    }

    #[test]
    fn missing_attribute_reads_empty() {
        let fact = Fact::new("Travis County", Category::Tax, "tax_policies_2023.pdf")
            .with_attribute("tax_rate", "1.9%");
        assert_eq!(fact.attribute("tax_rate"), "1.9%");
        assert_eq!(fact.attribute("best_time"), "");
    }

    #[test]
    fn category_serializes_as_tag() {
        let fact = Fact::new("Austin", Category::Cost, "travel_costs.csv");
        let json = serde_json::to_string(&fact).unwrap();
        assert!(json.contains("\"category\":\"cost\""));

        let back: Fact = serde_json::from_str(&json).unwrap();
        assert_eq!(back.category, Category::Cost);
    }
}
