//! `SQLite` implementation of [`ProjetRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use portfolio_app::ports::ProjetRepository;
use portfolio_app::seed::default_projets;
use portfolio_domain::error::PortfolioError;
use portfolio_domain::projet::{Projet, ProjetDraft, STATUT_TERMINE};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Projet`].
struct Wrapper(Projet);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Projet> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        // Rows written before the statut migration carry NULL here.
        let statut: Option<String> = row.try_get("statut")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

        Ok(Self(Projet {
            id: row.try_get("id")?,
            annee: row.try_get("annee")?,
            titre: row.try_get("titre")?,
            description: row.try_get("description")?,
            competences: row.try_get("competences")?,
            image: row.try_get("image")?,
            statut: statut.unwrap_or_else(|| STATUT_TERMINE.to_string()),
            created_at,
            updated_at,
        }))
    }
}

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS projets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    annee TEXT NOT NULL,
    titre TEXT NOT NULL,
    description TEXT NOT NULL,
    competences TEXT NOT NULL,
    image TEXT,
    statut TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";
const ADD_STATUT_COLUMN: &str = "ALTER TABLE projets ADD COLUMN statut TEXT";
const COUNT_ALL: &str = "SELECT COUNT(*) FROM projets";
const SELECT_ALL: &str = "SELECT * FROM projets ORDER BY annee DESC, id DESC";
const SELECT_BY_ID: &str = "SELECT * FROM projets WHERE id = ?";
const INSERT: &str = "INSERT INTO projets \
    (annee, titre, description, competences, image, statut, created_at, updated_at) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
const UPDATE: &str = "UPDATE projets SET annee = ?, titre = ?, description = ?, \
    competences = ?, image = ?, statut = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM projets WHERE id = ?";

/// `SQLite` already has the column when the migration re-runs; that is
/// success, not failure.
fn is_duplicate_column(err: &sqlx::Error) -> bool {
    err.to_string().contains("duplicate column")
}

async fn insert_draft(pool: &SqlitePool, draft: &ProjetDraft) -> Result<i64, StorageError> {
    let now = Utc::now();
    let result = sqlx::query(INSERT)
        .bind(&draft.annee)
        .bind(&draft.titre)
        .bind(&draft.description)
        .bind(&draft.competences)
        .bind(draft.image.as_deref())
        .bind(draft.statut_or_default())
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// `SQLite`-backed project repository.
#[derive(Clone)]
pub struct SqliteProjetRepository {
    pool: SqlitePool,
}

impl SqliteProjetRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProjetRepository for SqliteProjetRepository {
    fn initialize(&self) -> impl Future<Output = Result<(), PortfolioError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(CREATE_TABLE)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            match sqlx::query(ADD_STATUT_COLUMN).execute(&pool).await {
                Ok(_) => tracing::info!("statut column added to projets table"),
                Err(err) if is_duplicate_column(&err) => {}
                Err(err) => return Err(StorageError::from(err).into()),
            }

            let (count,): (i64,) = sqlx::query_as(COUNT_ALL)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            if count == 0 {
                tracing::info!("projets table empty, seeding default entries");
                for draft in default_projets() {
                    insert_draft(&pool, &draft)
                        .await
                        .map_err(StorageError::from)?;
                }
            }

            tracing::info!("sqlite projets store ready");
            Ok(())
        }
    }

    fn list_all(&self) -> impl Future<Output = Result<Vec<Projet>, PortfolioError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Projet>, PortfolioError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn insert(
        &self,
        draft: ProjetDraft,
    ) -> impl Future<Output = Result<i64, PortfolioError>> + Send {
        let pool = self.pool.clone();
        async move { Ok(insert_draft(&pool, &draft).await.map_err(StorageError::from)?) }
    }

    fn update(
        &self,
        id: i64,
        draft: ProjetDraft,
    ) -> impl Future<Output = Result<(), PortfolioError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&draft.annee)
                .bind(&draft.titre)
                .bind(&draft.description)
                .bind(&draft.competences)
                .bind(draft.image.as_deref())
                .bind(draft.statut_or_default())
                .bind(Utc::now())
                .bind(id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn delete(&self, id: i64) -> impl Future<Output = Result<(), PortfolioError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
