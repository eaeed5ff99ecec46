use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::query_builder::SearchMode;
use crate::database::repository::{Entity, PgQueryAs};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Product {
    #[serde(rename = "productID")]
    pub product_id: i32,
    pub product_name: String,
    pub product_description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub product_price: Decimal,
    pub product_quantity: i32,
    #[serde(rename = "categoryID")]
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub product_name: String,
    #[serde(default)]
    pub product_description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub product_price: Decimal,
    pub product_quantity: i32,
    #[serde(rename = "categoryID", default)]
    pub category_id: Option<i32>,
}

impl Entity for Product {
    type Input = ProductInput;

    const TABLE: &'static str = "PRODUCTS";
    const ID_COLUMN: &'static str = "PRODUCT_ID";
    const SEARCH_COLUMN: &'static str = "PRODUCT_NAME";
    const SEARCH_MODE: SearchMode = SearchMode::CaseInsensitive;
    const COLUMNS: &'static [&'static str] = &[
        "PRODUCT_NAME",
        "PRODUCT_DESCRIPTION",
        "PRODUCT_PRICE",
        "PRODUCT_QUANTITY",
        "CATEGORY_ID",
    ];

    fn bind_input<'q>(input: ProductInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(input.product_name)
            .bind(input.product_description)
            .bind(input.product_price)
            .bind(input.product_quantity)
            .bind(input.category_id)
    }
}
