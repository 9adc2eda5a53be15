//! `SQLite` implementation of [`HaikuRepository`].

use std::future::Future;

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{FromRow, Row, SqlitePool};

use haikus_app::ports::HaikuRepository;
use haikus_domain::date::{format_date, parse_date};
use haikus_domain::error::HaikuError;
use haikus_domain::haiku::Haiku;
use haikus_domain::id::HaikuId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Haiku`].
struct Wrapper(Haiku);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Haiku> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let author: String = row.try_get("author")?;
        let text: String = row.try_get("text")?;
        let year_of_release: String = row.try_get("year_of_release")?;
        let date_uploaded: String = row.try_get("date_uploaded")?;

        let year_of_release =
            parse_date(&year_of_release).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let date_uploaded =
            parse_date(&date_uploaded).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Haiku {
            id: HaikuId::from(id),
            title,
            author,
            text,
            year_of_release,
            date_uploaded,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO haikus (id, title, author, text, year_of_release, date_uploaded)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM haikus WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM haikus ORDER BY rowid";
const UPDATE: &str = r"
    UPDATE haikus
    SET title = ?, author = ?, text = ?, year_of_release = ?, date_uploaded = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM haikus WHERE id = ?";

fn insert(haiku: &Haiku) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    sqlx::query(INSERT)
        .bind(haiku.id.as_str())
        .bind(&haiku.title)
        .bind(&haiku.author)
        .bind(&haiku.text)
        .bind(format_date(haiku.year_of_release))
        .bind(format_date(haiku.date_uploaded))
}

/// `SQLite`-backed haiku repository.
pub struct SqliteHaikuRepository {
    pool: SqlitePool,
}

impl SqliteHaikuRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HaikuRepository for SqliteHaikuRepository {
    fn create_many(
        &self,
        haikus: Vec<Haiku>,
    ) -> impl Future<Output = Result<Vec<Haiku>, HaikuError>> + Send {
        let pool = self.pool.clone();
        async move {
            // rows that could not be decoded again must never reach the table
            for haiku in &haikus {
                haiku.validate()?;
            }
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            for haiku in &haikus {
                insert(haiku)
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }
            tx.commit().await.map_err(StorageError::from)?;

            Ok(haikus)
        }
    }

    fn create(&self, haiku: Haiku) -> impl Future<Output = Result<Haiku, HaikuError>> + Send {
        let pool = self.pool.clone();
        async move {
            haiku.validate()?;
            insert(&haiku)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(haiku)
        }
    }

    fn get_by_id(
        &self,
        id: HaikuId,
    ) -> impl Future<Output = Result<Option<Haiku>, HaikuError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Haiku>, HaikuError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, haiku: Haiku) -> impl Future<Output = Result<Haiku, HaikuError>> + Send {
        let pool = self.pool.clone();
        async move {
            haiku.validate()?;
            sqlx::query(UPDATE)
                .bind(&haiku.title)
                .bind(&haiku.author)
                .bind(&haiku.text)
                .bind(format_date(haiku.year_of_release))
                .bind(format_date(haiku.date_uploaded))
                .bind(haiku.id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(haiku)
        }
    }

    fn delete(&self, id: HaikuId) -> impl Future<Output = Result<(), HaikuError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;
            tracing::trace!(%id, rows = result.rows_affected(), "haiku delete");

            Ok(())
        }
    }
}
