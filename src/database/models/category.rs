use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::query_builder::SearchMode;
use crate::database::repository::{Entity, PgQueryAs};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Category {
    #[serde(rename = "categoryID")]
    pub category_id: i32,
    pub category_name: String,
    pub category_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub category_name: String,
    #[serde(default)]
    pub category_description: Option<String>,
}

impl Entity for Category {
    type Input = CategoryInput;

    const TABLE: &'static str = "CATEGORIES";
    const ID_COLUMN: &'static str = "CATEGORY_ID";
    const SEARCH_COLUMN: &'static str = "CATEGORY_NAME";
    const SEARCH_MODE: SearchMode = SearchMode::CaseInsensitive;
    const COLUMNS: &'static [&'static str] = &["CATEGORY_NAME", "CATEGORY_DESCRIPTION"];

    fn bind_input<'q>(input: CategoryInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(input.category_name).bind(input.category_description)
    }
}
