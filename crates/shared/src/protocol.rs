//! Wire contract of the `/recommend` endpoint.
//!
//! Responses follow the `{ products, report }` shape: a single free-text report
//! accompanies the product list. Per-product descriptions are not part of this schema.

use serde::{de::IgnoredAny, Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub region: String,
    pub categories: Vec<String>,
    pub gender: String,
    pub age: String,
    pub days: u32,
    pub companion_relations: Vec<String>,
    pub companion_age_groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub age_type: String,
    pub price_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub product_id: String,
    pub option_name: String,
    #[serde(default)]
    pub prices: Vec<Price>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub region: String,
    pub product_name: String,
    pub place_type: String,
    pub category: String,
    #[serde(default)]
    pub options: Vec<ProductOption>,
}

impl Product {
    /// First price of the first option, as pre-formatted by the service.
    pub fn display_price(&self) -> Option<&str> {
        self.options
            .first()
            .and_then(|option| option.prices.first())
            .map(|price| price.price_text.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecommendResponseWire")]
pub struct RecommendResponse {
    pub products: Vec<Product>,
    pub report: String,
}

/// The service answers a query with no matching travel logs with a bare `[]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendResponseWire {
    Packages {
        products: Vec<Product>,
        report: String,
    },
    NoMatches(Vec<IgnoredAny>),
}

impl TryFrom<RecommendResponseWire> for RecommendResponse {
    type Error = String;

    fn try_from(wire: RecommendResponseWire) -> Result<Self, Self::Error> {
        match wire {
            RecommendResponseWire::Packages { products, report } => Ok(Self { products, report }),
            RecommendResponseWire::NoMatches(items) if items.is_empty() => Ok(Self::default()),
            RecommendResponseWire::NoMatches(items) => Err(format!(
                "expected a recommendation object, got an array of {} items",
                items.len()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_json(options: &str) -> String {
        format!(
            r#"{{"product_id":"P1","region":"나트랑","product_name":"빈펄 랜드","place_type":"테마파크","category":"투어/액티비티","options":{options}}}"#
        )
    }

    #[test]
    fn decodes_packages_with_report() {
        let body = format!(
            r#"{{"products":[{}],"report":"para1\n\npara2"}}"#,
            product_json(
                r#"[{"product_id":"P1","option_name":"A","prices":[{"age_type":"adult","price_text":"$10"}]}]"#
            )
        );
        let response: RecommendResponse = serde_json::from_str(&body).expect("decode");
        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].display_price(), Some("$10"));
        assert_eq!(response.report, "para1\n\npara2");
    }

    #[test]
    fn bare_empty_array_means_no_matches() {
        let response: RecommendResponse = serde_json::from_str("[]").expect("decode");
        assert!(response.products.is_empty());
        assert!(response.report.is_empty());
    }

    #[test]
    fn non_empty_array_is_rejected() {
        assert!(serde_json::from_str::<RecommendResponse>("[1, 2]").is_err());
    }

    #[test]
    fn missing_report_is_rejected() {
        let body = format!(r#"{{"products":[{}]}}"#, product_json("[]"));
        assert!(serde_json::from_str::<RecommendResponse>(&body).is_err());
    }

    #[test]
    fn display_price_absent_without_options_or_prices() {
        let no_options: Product = serde_json::from_str(&product_json("[]")).expect("decode");
        assert_eq!(no_options.display_price(), None);

        let no_prices: Product = serde_json::from_str(&product_json(
            r#"[{"product_id":"P1","option_name":"A","prices":[]}]"#,
        ))
        .expect("decode");
        assert_eq!(no_prices.display_price(), None);
    }
}
