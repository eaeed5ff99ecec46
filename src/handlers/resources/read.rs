use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::app::AppState;
use crate::database::{Database, Repository};
use crate::error::ApiResult;

use super::params::{id_param, text_param};
use super::Resource;

/// GET /<Controller>/Get<Plural> - every row
pub async fn list<T: Resource>(State(state): State<AppState>) -> ApiResult<Vec<T>> {
    let mut conn = state.database.connect().await?;
    let result = Repository::<T>::new(&mut conn).select_all().await;
    Database::close(conn).await;
    let rows = result?;

    tracing::debug!(table = T::TABLE, count = rows.len(), "Listed rows");
    Ok(Json(rows))
}

/// GET /<Controller>/Get<Plural>ByID - zero or one row, as a list
pub async fn get_by_id<T: Resource>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<T>> {
    let id = id_param(&params, T::ID_PARAM)?;

    let mut conn = state.database.connect().await?;
    let result = Repository::<T>::new(&mut conn).select_by_id(id).await;
    Database::close(conn).await;
    let rows = result?;
    Ok(Json(rows))
}

/// GET /<Controller>/Get<Plural>By<Name|Description> - substring search
pub async fn search<T: Resource>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<T>> {
    let term = text_param(&params, T::SEARCH_PARAM)?;

    let mut conn = state.database.connect().await?;
    let result = Repository::<T>::new(&mut conn).search(term).await;
    Database::close(conn).await;
    let rows = result?;

    tracing::debug!(table = T::TABLE, term, count = rows.len(), "Searched rows");
    Ok(Json(rows))
}
