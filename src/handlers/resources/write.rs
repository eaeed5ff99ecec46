use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::{Database, Repository};
use crate::error::ApiResult;

use super::params::id_param;
use super::Resource;

/// POST /<Controller>/Add<Singular> - insert and return the stored row
pub async fn add<T: Resource>(
    State(state): State<AppState>,
    Json(input): Json<T::Input>,
) -> ApiResult<T> {
    let mut conn = state.database.connect().await?;
    let result = Repository::<T>::new(&mut conn).insert(input).await;
    Database::close(conn).await;
    let row = result?;

    tracing::info!(table = T::TABLE, "Inserted row");
    Ok(Json(row))
}

/// PUT /<Controller>/Edit<Singular> - replace the writable columns of one row
pub async fn edit<T: Resource>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    Json(input): Json<T::Input>,
) -> ApiResult<T> {
    let id = id_param(&params, T::ID_PARAM)?;

    let mut conn = state.database.connect().await?;
    let result = Repository::<T>::new(&mut conn).update(id, input).await;
    Database::close(conn).await;
    let row = result?;

    tracing::info!(table = T::TABLE, id, "Updated row");
    Ok(Json(row))
}

/// DELETE /<Controller>/Delete<Singular>
pub async fn remove<T: Resource>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Value> {
    let id = id_param(&params, T::ID_PARAM)?;

    let mut conn = state.database.connect().await?;
    let result = Repository::<T>::new(&mut conn).delete(id).await;
    Database::close(conn).await;
    let deleted = result?;

    tracing::info!(table = T::TABLE, id, "Deleted row");
    Ok(Json(json!({ "deleted": deleted })))
}
