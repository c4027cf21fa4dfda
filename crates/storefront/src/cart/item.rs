//! Cart line items.

use quitanda_core::Price;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// Serialized with camelCase keys; the persisted cart is a JSON array of
/// these records under a single storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product name; unique within the cart.
    pub name: String,
    /// Price per unit.
    pub unit_price: Price,
    /// Number of units; at least 1 while the item exists.
    pub quantity: u32,
    /// Optional product image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl LineItem {
    /// Subtotal for this line: `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(name: &str, price: &str, quantity: u32) -> LineItem {
        LineItem {
            name: name.to_owned(),
            unit_price: Price::parse(price).unwrap(),
            quantity,
            image_ref: None,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(
            item("Café Torrado", "R$ 42,90", 3).line_total(),
            Price::parse("R$ 128,70").unwrap()
        );
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&LineItem {
            image_ref: Some("/img/cafe.jpg".to_owned()),
            ..item("Café Torrado", "R$ 42,90", 2)
        })
        .unwrap();

        assert_eq!(
            json,
            "{\"name\":\"Café Torrado\",\"unitPrice\":\"42.90\",\"quantity\":2,\"imageRef\":\"/img/cafe.jpg\"}"
        );
    }

    #[test]
    fn test_serde_omits_absent_image() {
        let json = serde_json::to_string(&item("Queijo Minas", "R$ 38,00", 1)).unwrap();
        assert!(!json.contains("imageRef"));

        let parsed: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.image_ref, None);
    }

    #[test]
    fn test_serde_round_trip() {
        let original = LineItem {
            image_ref: Some("/img/doce.jpg".to_owned()),
            ..item("Doce de Leite", "R$ 19,50", 4)
        };
        let json = serde_json::to_string(&original).unwrap();
        let parsed: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
