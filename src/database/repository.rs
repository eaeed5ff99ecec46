use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgConnection, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::database::manager::DatabaseError;
use crate::database::query_builder::{QueryBuilder, SearchMode};

pub type PgQueryAs<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// A record type backed by one table.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    /// Request body accepted by add/edit
    type Input: DeserializeOwned + Send + 'static;

    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    const SEARCH_COLUMN: &'static str;
    const SEARCH_MODE: SearchMode;
    /// Writable columns, in the order `bind_input` binds them.
    const COLUMNS: &'static [&'static str];

    fn bind_input<'q>(input: Self::Input, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;
}

pub struct Repository<'c, T> {
    conn: &'c mut PgConnection,
    builder: QueryBuilder<'static>,
    _phantom: std::marker::PhantomData<T>,
}

impl<'c, T: Entity> Repository<'c, T> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self {
            conn,
            builder: QueryBuilder::new(T::TABLE, T::ID_COLUMN),
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(&mut self) -> Result<Vec<T>, DatabaseError> {
        let sql = self.builder.select_all();
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&mut *self.conn).await?;
        Ok(rows)
    }

    /// Rows matching the id; empty when nothing matches.
    pub async fn select_by_id(&mut self, id: i32) -> Result<Vec<T>, DatabaseError> {
        let sql = self.builder.select_by_id();
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(rows)
    }

    pub async fn search(&mut self, term: &str) -> Result<Vec<T>, DatabaseError> {
        let sql = self.builder.search(T::SEARCH_COLUMN, T::SEARCH_MODE);
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(T::SEARCH_MODE.pattern(term))
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(rows)
    }

    pub async fn insert(&mut self, input: T::Input) -> Result<T, DatabaseError> {
        let sql = self.builder.insert(T::COLUMNS);
        let row = T::bind_input(input, sqlx::query_as::<_, T>(&sql))
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(row)
    }

    pub async fn update(&mut self, id: i32, input: T::Input) -> Result<T, DatabaseError> {
        let sql = self.builder.update(T::COLUMNS);
        T::bind_input(input, sqlx::query_as::<_, T>(&sql))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Returns the number of deleted rows; zero rows is `NotFound`.
    pub async fn delete(&mut self, id: i32) -> Result<u64, DatabaseError> {
        let sql = self.builder.delete();
        let result = sqlx::query(&sql).bind(id).execute(&mut *self.conn).await?;
        match result.rows_affected() {
            0 => Err(Self::not_found(id)),
            n => Ok(n),
        }
    }

    fn not_found(id: i32) -> DatabaseError {
        DatabaseError::NotFound(format!("{} {} not found in {}", T::ID_COLUMN, id, T::TABLE))
    }
}
