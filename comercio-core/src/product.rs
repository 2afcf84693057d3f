use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price of a product in the three supported currencies. Each component
/// is stored independently; none is derived from another and no exchange
/// rates are involved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub usd: Decimal,
    pub eur: Decimal,
    pub cop: Decimal,
}

/// A product owned by exactly one company, referenced by `id_company`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub characteristics: Option<String>,
    pub price: Price,
    pub id_company: i32,
}

/// Write shape for product create/update. Updates replace every field,
/// including all three price components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    #[serde(default)]
    pub characteristics: Option<String>,
    pub price: Price,
    pub id_company: i32,
}

/// Product listing row joined with its owning company.
/// `company_name` is `None` when the company reference is absent, which
/// should not happen while the cascade-delete invariant holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub characteristics: Option<String>,
    pub price: Price,
    pub company_name: Option<String>,
    pub id_company: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_components_serialize_as_numbers() {
        let price = Price {
            usd: Decimal::from(10),
            eur: Decimal::from(9),
            cop: Decimal::from(40000),
        };
        let value = serde_json::to_value(price).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "usd": 10.0, "eur": 9.0, "cop": 40000.0 })
        );
    }

    #[test]
    fn price_deserializes_from_json_numbers() {
        let price: Price =
            serde_json::from_str(r#"{"usd": 10, "eur": 9.5, "cop": 40000}"#).unwrap();
        assert_eq!(price.usd, Decimal::from(10));
        assert_eq!(price.eur, Decimal::new(95, 1));
        assert_eq!(price.cop, Decimal::from(40000));
    }

    #[test]
    fn product_fields_require_the_full_price_triple() {
        let result = serde_json::from_str::<ProductFields>(
            r#"{"name": "Widget", "price": {"usd": 10, "eur": 9}, "id_company": 1}"#,
        );
        assert!(result.is_err());
    }
}
