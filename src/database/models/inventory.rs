use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::query_builder::SearchMode;
use crate::database::repository::{Entity, PgQueryAs};

/// One stock movement for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Inventory {
    #[serde(rename = "inventoryID")]
    pub inventory_id: i32,
    #[serde(rename = "productID")]
    pub product_id: i32,
    #[serde(rename = "actionID")]
    pub action_id: i32,
    pub quantity_changed: i32,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryInput {
    #[serde(rename = "productID")]
    pub product_id: i32,
    #[serde(rename = "actionID")]
    pub action_id: i32,
    pub quantity_changed: i32,
    pub timestamp: NaiveDateTime,
}

impl Entity for Inventory {
    type Input = InventoryInput;

    const TABLE: &'static str = "INVENTORY";
    const ID_COLUMN: &'static str = "INVENTORY_ID";
    // Searched but not part of the record.
    const SEARCH_COLUMN: &'static str = "INVENTORY_DESCRIPTION";
    const SEARCH_MODE: SearchMode = SearchMode::CaseSensitive;
    const COLUMNS: &'static [&'static str] = &["PRODUCT_ID", "ACTION_ID", "QUANTITY_CHANGED", "TIMESTAMP"];

    fn bind_input<'q>(input: InventoryInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(input.product_id)
            .bind(input.action_id)
            .bind(input.quantity_changed)
            .bind(input.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_timestamp_input() {
        let input: InventoryInput = serde_json::from_value(json!({
            "productID": 1,
            "actionID": 2,
            "quantityChanged": -4,
            "timestamp": "2024-03-01T09:30:00"
        }))
        .unwrap();

        assert_eq!(input.quantity_changed, -4);
        assert_eq!(input.timestamp.to_string(), "2024-03-01 09:30:00");
    }
}
