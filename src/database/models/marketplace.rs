use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::query_builder::SearchMode;
use crate::database::repository::{Entity, PgQueryAs};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Marketplace {
    #[serde(rename = "marketplaceID")]
    pub marketplace_id: i32,
    pub marketplace_name: String,
    pub marketplace_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceInput {
    pub marketplace_name: String,
    #[serde(default)]
    pub marketplace_description: Option<String>,
}

impl Entity for Marketplace {
    type Input = MarketplaceInput;

    const TABLE: &'static str = "MARKETPLACES";
    const ID_COLUMN: &'static str = "MARKETPLACE_ID";
    const SEARCH_COLUMN: &'static str = "MARKETPLACE_NAME";
    const SEARCH_MODE: SearchMode = SearchMode::CaseInsensitive;
    const COLUMNS: &'static [&'static str] = &["MARKETPLACE_NAME", "MARKETPLACE_DESCRIPTION"];

    fn bind_input<'q>(input: MarketplaceInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(input.marketplace_name).bind(input.marketplace_description)
    }
}
