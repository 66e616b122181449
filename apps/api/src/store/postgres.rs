//! PostgreSQL-backed content store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::models::portfolio::{
    Assignment, FunAnswer, NewAssignment, NewFunAnswer, NewReflection, NewSkill, Reflection, Skill,
};
use crate::store::ContentStore;

/// Schema bootstrap statements, executed in order at connect time.
/// The CHECK constraints back up the application-level skill validation.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS assignments (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        module_number INTEGER NOT NULL,
        description TEXT NOT NULL,
        key_learnings TEXT[] NOT NULL DEFAULT '{}',
        date TEXT,
        icon TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        level_before INTEGER NOT NULL CHECK (level_before BETWEEN 0 AND 10),
        level_after INTEGER NOT NULL CHECK (level_after BETWEEN 0 AND 10)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reflections (
        id BIGSERIAL PRIMARY KEY,
        topic TEXT NOT NULL,
        content TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS fun_answers (
        id BIGSERIAL PRIMARY KEY,
        text TEXT NOT NULL
    )
    "#,
];

pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    /// Connects to PostgreSQL and bootstraps the schema.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await?;
        }

        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        Ok(sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments ORDER BY module_number ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>> {
        Ok(
            sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        Ok(sqlx::query_as::<_, Skill>("SELECT * FROM skills")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn list_reflections(&self) -> Result<Vec<Reflection>> {
        Ok(sqlx::query_as::<_, Reflection>("SELECT * FROM reflections")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn random_fun_answer(&self) -> Result<Option<FunAnswer>> {
        Ok(sqlx::query_as::<_, FunAnswer>(
            "SELECT * FROM fun_answers ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn create_assignment(&self, new: NewAssignment) -> Result<Assignment> {
        Ok(sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (title, module_number, description, key_learnings, date, icon)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.title)
        .bind(new.module_number)
        .bind(new.description)
        .bind(new.key_learnings)
        .bind(new.date)
        .bind(new.icon)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create_skill(&self, new: NewSkill) -> Result<Skill> {
        new.validate().map_err(anyhow::Error::msg)?;
        Ok(sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, level_before, level_after)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.name)
        .bind(new.category)
        .bind(new.level_before)
        .bind(new.level_after)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create_reflection(&self, new: NewReflection) -> Result<Reflection> {
        Ok(sqlx::query_as::<_, Reflection>(
            "INSERT INTO reflections (topic, content) VALUES ($1, $2) RETURNING *",
        )
        .bind(new.topic)
        .bind(new.content)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create_fun_answer(&self, new: NewFunAnswer) -> Result<FunAnswer> {
        Ok(
            sqlx::query_as::<_, FunAnswer>("INSERT INTO fun_answers (text) VALUES ($1) RETURNING *")
                .bind(new.text)
                .fetch_one(&self.pool)
                .await?,
        )
    }
}
