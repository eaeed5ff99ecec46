use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::query_builder::SearchMode;
use crate::database::repository::{Entity, PgQueryAs};

/// An expense, optionally tied to a category, inventory entry and marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Expense {
    #[serde(rename = "expenseID")]
    pub expense_id: i32,
    pub expense_description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense_amount: Decimal,
    pub expense_date: NaiveDateTime,
    #[serde(rename = "categoryID")]
    pub category_id: Option<i32>,
    #[serde(rename = "inventoryID")]
    pub inventory_id: Option<i32>,
    #[serde(rename = "marketplaceID")]
    pub marketplace_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    #[serde(default)]
    pub expense_description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense_amount: Decimal,
    pub expense_date: NaiveDateTime,
    #[serde(rename = "categoryID", default)]
    pub category_id: Option<i32>,
    #[serde(rename = "inventoryID", default)]
    pub inventory_id: Option<i32>,
    #[serde(rename = "marketplaceID", default)]
    pub marketplace_id: Option<i32>,
}

impl Entity for Expense {
    type Input = ExpenseInput;

    const TABLE: &'static str = "EXPENSES";
    const ID_COLUMN: &'static str = "EXPENSE_ID";
    const SEARCH_COLUMN: &'static str = "EXPENSE_DESCRIPTION";
    const SEARCH_MODE: SearchMode = SearchMode::CaseInsensitive;
    const COLUMNS: &'static [&'static str] = &[
        "EXPENSE_DESCRIPTION",
        "EXPENSE_AMOUNT",
        "EXPENSE_DATE",
        "CATEGORY_ID",
        "INVENTORY_ID",
        "MARKETPLACE_ID",
    ];

    fn bind_input<'q>(input: ExpenseInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(input.expense_description)
            .bind(input.expense_amount)
            .bind(input.expense_date)
            .bind(input.category_id)
            .bind(input.inventory_id)
            .bind(input.marketplace_id)
    }
}
